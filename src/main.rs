use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod data;
pub mod page;
pub mod response;
pub mod route;
pub mod session;
pub mod util;

pub use route::Route;

fn main() {
	let _ = console_log::init_with_level(log::Level::Debug);
	yew::Renderer::<App>::new().render();
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={route::switch} />
		</BrowserRouter>
	}
}
