use crate::{session::SessionStore, Route};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Navbar() -> Html {
	let (session, dispatch) = use_store::<SessionStore>();
	let navigator = use_navigator().unwrap();
	let sign_out = Callback::from(move |_: MouseEvent| {
		SessionStore::signed_out(&dispatch);
		navigator.push(&Route::Login);
	});
	html! {
		<nav class="navbar navbar-dark bg-dark px-3">
			<Link<Route> classes="navbar-brand" to={Route::Dashboard}>{"A & B"}</Link<Route>>
			<div class="d-flex align-items-center gap-3">
				{session.0.as_ref().map(|session| html! {
					<span class="navbar-text">{session.account.display_name()}</span>
				})}
				<button class="btn btn-outline-light btn-sm" onclick={sign_out}>{"Sign out"}</button>
			</div>
		</nav>
	}
}
