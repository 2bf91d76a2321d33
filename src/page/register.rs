use crate::{auth, data::validate, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Register() -> Html {
	let first_name = use_state(String::new);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let error = use_state(|| None::<String>);
	let submitting = use_state(|| false);
	let registered = use_state(|| false);

	let bind_input = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |event: InputEvent| {
			state.set(event.target_unchecked_into::<web_sys::HtmlInputElement>().value());
		})
	};
	let on_first_name = bind_input(&first_name);
	let on_email = bind_input(&email);
	let on_password = bind_input(&password);

	let onsubmit = {
		let first_name = first_name.clone();
		let email = email.clone();
		let password = password.clone();
		let error = error.clone();
		let submitting = submitting.clone();
		let registered = registered.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			let checked = validate::guest_name(&first_name)
				.and_then(|_| validate::email(&email))
				.and_then(|_| validate::password(&password));
			if let Err(failure) = checked {
				error.set(Some(failure.to_string()));
				return;
			}
			let first_name = first_name.trim().to_owned();
			let email = email.trim().to_owned();
			let password = (*password).clone();
			let error = error.clone();
			let submitting = submitting.clone();
			let registered = registered.clone();
			submitting.set(true);
			wasm_bindgen_futures::spawn_local(async move {
				match auth::sign_up(&email, &password, &first_name).await {
					Ok(()) => registered.set(true),
					Err(err) => error.set(Some(err.to_string())),
				}
				submitting.set(false);
			});
		})
	};

	if *registered {
		return html! {
			<main class="min-vh-100 d-flex align-items-center justify-content-center bg-light">
				<div class="card shadow-sm p-4 text-center" style="width: 22rem;">
					<h1 class="h4 fw-bold mb-3">{"Almost there"}</h1>
					<p class="text-muted">{"Check your inbox and confirm your email, then sign in."}</p>
					<Link<Route> classes="btn btn-dark" to={Route::Login}>{"Back to sign in"}</Link<Route>>
				</div>
			</main>
		};
	}
	html! {
		<main class="min-vh-100 d-flex align-items-center justify-content-center bg-light">
			<div class="card shadow-sm p-4" style="width: 22rem;">
				<h1 class="h4 fw-bold mb-3">{"Create an account"}</h1>
				{error.as_ref().map(|message| html! {
					<div class="alert alert-danger">{message}</div>
				})}
				<form {onsubmit}>
					<div class="mb-3">
						<label class="form-label">{"First name"}</label>
						<input class="form-control" value={(*first_name).clone()} oninput={on_first_name} />
					</div>
					<div class="mb-3">
						<label class="form-label">{"Email"}</label>
						<input class="form-control" type="email" value={(*email).clone()} oninput={on_email} />
					</div>
					<div class="mb-3">
						<label class="form-label">{"Password"}</label>
						<input class="form-control" type="password" value={(*password).clone()} oninput={on_password} />
					</div>
					<button type="submit" class="btn btn-dark w-100" disabled={*submitting}>
						{if *submitting { "Creating..." } else { "Create account" }}
					</button>
				</form>
				<p class="small text-muted mt-3 mb-0">
					{"Already registered? "}
					<Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
				</p>
			</div>
		</main>
	}
}
