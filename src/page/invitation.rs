use crate::{
	api::guests,
	components::RsvpForm,
	data::{Guest, RsvpStatus},
};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct InvitationProps {
	pub id: i64,
}

/// Guest-facing invitation page, reached through the per-guest link. Loads the guest
/// record once, shows the event details, and takes the attendance response.
#[function_component]
pub fn Invitation(props: &InvitationProps) -> Html {
	let fetch = {
		let id = props.id;
		use_async_with_options(
			async move { guests::fetch_one(id).await },
			UseAsyncOptions::enable_auto(),
		)
	};
	// once the invitee responds, the confirmation replaces the fetched record
	let responded = use_state(|| None::<Guest>);
	let on_updated = {
		let responded = responded.clone();
		Callback::from(move |guest: Guest| responded.set(Some(guest)))
	};

	let body = if fetch.loading {
		html! {
			<div class="text-center p-5">
				<div class="spinner-border" role="status" />
			</div>
		}
	} else if let Some(err) = &fetch.error {
		let retry = {
			let fetch = fetch.clone();
			Callback::from(move |_: MouseEvent| fetch.run())
		};
		html! {
			<div class="alert alert-danger d-inline-flex align-items-center gap-3">
				<span>{err.user_message()}</span>
				<button class="btn btn-outline-danger btn-sm" onclick={retry}>{"Retry"}</button>
			</div>
		}
	} else {
		match responded.as_ref().cloned().or_else(|| fetch.data.clone().flatten()) {
			None => html! {
				<p class="text-muted">{"This invitation link is not valid anymore."}</p>
			},
			Some(guest) => html! {<>
				<p class="fs-5 mb-4">{format!("Dear {}, we would love to celebrate with you.", guest.name)}</p>
				{match guest.status() {
					RsvpStatus::Confirmed => html! {
						<div class="alert alert-success">
							{format!("Attendance confirmed for {} — see you there!", guest.guests.unwrap_or(1))}
						</div>
					},
					RsvpStatus::Cancelled => html! {
						<div class="alert alert-secondary">
							{"You have declined. Changed your mind? Send a new response below."}
						</div>
					},
					_ => html!(),
				}}
				<div class="mx-auto col-12 col-md-8 col-lg-6">
					<RsvpForm guest={guest} on_updated={on_updated.clone()} />
				</div>
			</>},
		}
	};

	html! {
		<main class="min-vh-100 p-4 p-md-5 text-center" style="background-color: #e9e9e6;">
			<section class="mb-4">
				<h1 class="display-3">{"A & B"}</h1>
				<p class="fs-4 mb-1">{"31.08.2025"}</p>
				<p class="text-muted mb-0">{"Ceremony at 4 PM, Santa Maria Chapel"}</p>
				<p class="text-muted">{"Reception to follow at Hacienda El Roble"}</p>
			</section>
			{body}
		</main>
	}
}
