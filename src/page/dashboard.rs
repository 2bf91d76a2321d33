use crate::{
	components::{GuestTable, Navbar},
	session::SessionStore,
};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Dashboard() -> Html {
	let session = use_store_value::<SessionStore>();
	let greeting = session
		.0
		.as_ref()
		.map(|session| session.account.display_name().to_owned())
		.unwrap_or_else(|| "there".to_owned());
	html! {
		<div class="min-vh-100 bg-light">
			<Navbar />
			<main class="container py-4 text-center">
				<h1 class="display-6 fw-bold mb-2">{format!("Hello, {greeting}!")}</h1>
				<p class="text-muted mb-4">
					{"Welcome to your dashboard. Create invitations and keep track of who is coming."}
				</p>
				<div class="mx-auto col-12 col-md-9 col-lg-8 text-start">
					<GuestTable />
				</div>
			</main>
		</div>
	}
}
