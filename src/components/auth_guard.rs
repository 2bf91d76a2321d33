use crate::{session::SessionStore, Route};
use yew::{html::ChildrenProps, prelude::*};
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Renders its children only for a signed-in host; anonymous visitors are sent to the
/// login page instead.
#[function_component]
pub fn AuthGuard(props: &ChildrenProps) -> Html {
	let session = use_store_value::<SessionStore>();
	if session.0.is_none() {
		return html! { <Redirect<Route> to={Route::Login} /> };
	}
	html! {<>{props.children.clone()}</>}
}
