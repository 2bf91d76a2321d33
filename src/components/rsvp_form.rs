use crate::{
	api::guests::{self, RsvpChange},
	data::{validate, Guest},
};
use yew::prelude::*;

static LOG: &str = "rsvp";

fn none_if_blank(value: &str) -> Option<String> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct RsvpFormProps {
	pub guest: Guest,
	pub on_updated: Callback<Guest>,
}

/// Attendance response form shown on the invitation page. Attending asks for a party
/// size (bounded by the invitation's cap) plus optional dietary restrictions and
/// special requests; declining clears all of those.
#[function_component]
pub fn RsvpForm(props: &RsvpFormProps) -> Html {
	let attending = use_state(|| true);
	let party_size = use_state(|| 1u32);
	let dietary = use_state(String::new);
	let requests = use_state(String::new);
	let error = use_state(|| None::<String>);
	let submitting = use_state(|| false);

	let choose = |value: bool| {
		let attending = attending.clone();
		Callback::from(move |_: Event| attending.set(value))
	};
	let on_party_size = {
		let party_size = party_size.clone();
		Callback::from(move |event: Event| {
			let value = event.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
			if let Ok(count) = value.parse::<u32>() {
				party_size.set(count);
			}
		})
	};
	let on_dietary = {
		let dietary = dietary.clone();
		Callback::from(move |event: InputEvent| {
			dietary.set(event.target_unchecked_into::<web_sys::HtmlTextAreaElement>().value());
		})
	};
	let on_requests = {
		let requests = requests.clone();
		Callback::from(move |event: InputEvent| {
			requests.set(event.target_unchecked_into::<web_sys::HtmlTextAreaElement>().value());
		})
	};

	let onsubmit = {
		let guest_id = props.guest.id;
		let max_allowed = props.guest.max_guests_allowed;
		let attending = attending.clone();
		let party_size = party_size.clone();
		let dietary = dietary.clone();
		let requests = requests.clone();
		let error = error.clone();
		let submitting = submitting.clone();
		let on_updated = props.on_updated.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			let change = match *attending {
				true => {
					if let Err(failure) = validate::party_size(*party_size, max_allowed) {
						error.set(Some(failure.to_string()));
						return;
					}
					RsvpChange::attending(*party_size, none_if_blank(&dietary), none_if_blank(&requests))
				}
				false => RsvpChange::declined(),
			};
			let error = error.clone();
			let submitting = submitting.clone();
			let on_updated = on_updated.clone();
			submitting.set(true);
			wasm_bindgen_futures::spawn_local(async move {
				match guests::update_one(guest_id, &change).await {
					Ok(updated) => {
						log::debug!(target: LOG, "guest {guest_id} responded");
						error.set(None);
						on_updated.emit(updated);
					}
					Err(err) => {
						log::error!(target: LOG, "failed to submit response: {err}");
						error.set(Some(err.user_message().to_owned()));
					}
				}
				submitting.set(false);
			});
		})
	};

	html! {
		<form class="text-start" {onsubmit}>
			{error.as_ref().map(|message| html! {
				<div class="alert alert-danger">{message}</div>
			})}
			<fieldset class="mb-3">
				<legend class="fs-6">{"Will you be attending?"}</legend>
				<div class="form-check">
					<input
						class="form-check-input" type="radio" name="attendance" id="attendance-yes"
						checked={*attending} onchange={choose(true)}
					/>
					<label class="form-check-label" for="attendance-yes">{"Joyfully accepts"}</label>
				</div>
				<div class="form-check">
					<input
						class="form-check-input" type="radio" name="attendance" id="attendance-no"
						checked={!*attending} onchange={choose(false)}
					/>
					<label class="form-check-label" for="attendance-no">{"Regretfully declines"}</label>
				</div>
			</fieldset>
			{(*attending).then(|| html! {<>
				<div class="mb-3">
					<label class="form-label">{"How many of you are coming?"}</label>
					<select class="form-select" onchange={on_party_size}>
						{(1..=props.guest.max_guests_allowed.max(1)).map(|count| html! {
							<option value={count.to_string()} selected={count == *party_size}>{count}</option>
						}).collect::<Html>()}
					</select>
				</div>
				<div class="mb-3">
					<label class="form-label">{"Dietary restrictions or allergies"}</label>
					<textarea class="form-control" value={(*dietary).clone()} oninput={on_dietary} />
				</div>
				<div class="mb-3">
					<label class="form-label">{"Special requests or a message for the couple"}</label>
					<textarea class="form-control" value={(*requests).clone()} oninput={on_requests} />
				</div>
			</>})}
			<button type="submit" class="btn btn-dark" disabled={*submitting}>
				{if *submitting { "Sending..." } else { "Send response" }}
			</button>
		</form>
	}
}
