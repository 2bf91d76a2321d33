use crate::{auth, data::validate, session::SessionStore, Route};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Login() -> Html {
	let (session, dispatch) = use_store::<SessionStore>();
	let navigator = use_navigator().unwrap();
	let email = use_state(String::new);
	let password = use_state(String::new);
	let error = use_state(|| None::<String>);
	let submitting = use_state(|| false);

	// hooks all run before this; an already signed-in host skips the form
	if session.0.is_some() {
		return html! { <Redirect<Route> to={Route::Dashboard} /> };
	}

	let on_email = {
		let email = email.clone();
		Callback::from(move |event: InputEvent| {
			email.set(event.target_unchecked_into::<web_sys::HtmlInputElement>().value());
		})
	};
	let on_password = {
		let password = password.clone();
		Callback::from(move |event: InputEvent| {
			password.set(event.target_unchecked_into::<web_sys::HtmlInputElement>().value());
		})
	};

	let onsubmit = {
		let email = email.clone();
		let password = password.clone();
		let error = error.clone();
		let submitting = submitting.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if let Err(failure) = validate::email(&email).and_then(|_| validate::password(&password)) {
				error.set(Some(failure.to_string()));
				return;
			}
			let email = email.trim().to_owned();
			let password = (*password).clone();
			let error = error.clone();
			let submitting = submitting.clone();
			let dispatch = dispatch.clone();
			let navigator = navigator.clone();
			submitting.set(true);
			wasm_bindgen_futures::spawn_local(async move {
				match auth::sign_in(&email, &password).await {
					Ok(session) => {
						SessionStore::signed_in(&dispatch, session);
						navigator.push(&Route::Dashboard);
					}
					Err(err) => {
						error.set(Some(err.to_string()));
						submitting.set(false);
					}
				}
			});
		})
	};

	html! {
		<main class="min-vh-100 d-flex align-items-center justify-content-center bg-light">
			<div class="card shadow-sm p-4" style="width: 22rem;">
				<h1 class="h4 fw-bold mb-3">{"Sign in"}</h1>
				{error.as_ref().map(|message| html! {
					<div class="alert alert-danger">{message}</div>
				})}
				<form {onsubmit}>
					<div class="mb-3">
						<label class="form-label">{"Email"}</label>
						<input class="form-control" type="email" value={(*email).clone()} oninput={on_email} />
					</div>
					<div class="mb-3">
						<label class="form-label">{"Password"}</label>
						<input class="form-control" type="password" value={(*password).clone()} oninput={on_password} />
					</div>
					<button type="submit" class="btn btn-dark w-100" disabled={*submitting}>
						{if *submitting { "Signing in..." } else { "Sign in" }}
					</button>
				</form>
				<p class="small text-muted mt-3 mb-0">
					{"New here? "}
					<Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
				</p>
			</div>
		</main>
	}
}
