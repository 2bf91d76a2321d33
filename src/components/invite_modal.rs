use crate::{
	api::guests::{self, NewGuest},
	data::{validate, Guest},
};
use yew::prelude::*;

static LOG: &str = "invite";

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct InviteModalProps {
	/// Fired with the stored record once the backend has assigned its id. The change
	/// feed will usually deliver the same insert; the merge de-duplicates by id.
	pub on_created: Callback<Guest>,
}

/// Host-side "new invitation" dialog: a name, a cap on accompanying guests, and a
/// create call. The invitation link itself is copied later from the table row.
#[function_component]
pub fn InviteModal(props: &InviteModalProps) -> Html {
	let open = use_state(|| false);
	let name = use_state(String::new);
	let max_guests = use_state(|| 1u32);
	let error = use_state(|| None::<String>);
	let submitting = use_state(|| false);

	let show = {
		let open = open.clone();
		Callback::from(move |_| open.set(true))
	};
	let close = {
		let open = open.clone();
		let name = name.clone();
		let max_guests = max_guests.clone();
		let error = error.clone();
		Callback::from(move |_: ()| {
			open.set(false);
			name.set(String::new());
			max_guests.set(1);
			error.set(None);
		})
	};

	let on_name = {
		let name = name.clone();
		Callback::from(move |event: InputEvent| {
			name.set(event.target_unchecked_into::<web_sys::HtmlInputElement>().value());
		})
	};
	let on_max_guests = {
		let max_guests = max_guests.clone();
		Callback::from(move |event: Event| {
			let value = event.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
			if let Ok(count) = value.parse::<u32>() {
				max_guests.set(count);
			}
		})
	};

	let onsubmit = {
		let name = name.clone();
		let max_guests = max_guests.clone();
		let error = error.clone();
		let submitting = submitting.clone();
		let close = close.clone();
		let on_created = props.on_created.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if let Err(failure) = validate::guest_name(&*name) {
				error.set(Some(failure.to_string()));
				return;
			}
			let new_guest = NewGuest {
				name: name.trim().to_owned(),
				max_guests_allowed: *max_guests,
			};
			let error = error.clone();
			let submitting = submitting.clone();
			let close = close.clone();
			let on_created = on_created.clone();
			submitting.set(true);
			wasm_bindgen_futures::spawn_local(async move {
				match guests::create_one(&new_guest).await {
					Ok(guest) => {
						log::debug!(target: LOG, "created invitation {}", guest.id);
						on_created.emit(guest);
						close.emit(());
					}
					Err(err) => {
						log::error!(target: LOG, "failed to create invitation: {err}");
						error.set(Some(err.user_message().to_owned()));
					}
				}
				submitting.set(false);
			});
		})
	};

	if !*open {
		return html! {
			<button class="btn btn-dark" onclick={show}>{"New invitation"}</button>
		};
	}
	html! {
		<div class="modal d-block" tabindex="-1">
			<div class="modal-dialog">
				<div class="modal-content">
					<form {onsubmit}>
						<div class="modal-header">
							<h5 class="modal-title">{"New invitation"}</h5>
							<button type="button" class="btn-close" onclick={close.reform(|_: MouseEvent| ())} />
						</div>
						<div class="modal-body">
							{error.as_ref().map(|message| html! {
								<div class="alert alert-danger">{message}</div>
							})}
							<div class="mb-3">
								<label class="form-label">{"Guest name"}</label>
								<input class="form-control" value={(*name).clone()} oninput={on_name} />
							</div>
							<div class="mb-3">
								<label class="form-label">{"Maximum party size"}</label>
								<select class="form-select" onchange={on_max_guests}>
									{(1..=10u32).map(|count| html! {
										<option value={count.to_string()} selected={count == *max_guests}>
											{count}
										</option>
									}).collect::<Html>()}
								</select>
							</div>
						</div>
						<div class="modal-footer">
							<button type="submit" class="btn btn-dark" disabled={*submitting}>
								{if *submitting { "Creating..." } else { "Create" }}
							</button>
						</div>
					</form>
				</div>
			</div>
		</div>
	}
}
