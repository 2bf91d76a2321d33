use crate::{components, page};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[at("/dashboard")]
	Dashboard,
	#[at("/invitation/:id")]
	Invitation { id: i64 },
	#[not_found]
	#[at("/404")]
	NotFound,
}

pub fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
		Route::Login => html! { <page::Login /> },
		Route::Register => html! { <page::Register /> },
		Route::Dashboard => html! {
			<components::AuthGuard>
				<page::Dashboard />
			</components::AuthGuard>
		},
		Route::Invitation { id } => html! { <page::Invitation {id} /> },
		Route::NotFound => html! {
			<main class="min-vh-100 d-flex align-items-center justify-content-center">
				<h1 class="h3">{"404: Page not found"}</h1>
			</main>
		},
	}
}
