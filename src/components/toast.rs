use yew::prelude::*;

const DISMISS_MILLIS: u32 = 2_500;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
	pub message: AttrValue,
	pub is_error: bool,
}

impl Notice {
	pub fn info(message: impl Into<AttrValue>) -> Self {
		Self {
			message: message.into(),
			is_error: false,
		}
	}

	pub fn error(message: impl Into<AttrValue>) -> Self {
		Self {
			message: message.into(),
			is_error: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ToastProps {
	#[prop_or_default]
	pub notice: Option<Notice>,
	pub on_dismiss: Callback<()>,
}

/// Transient feedback banner; auto-dismisses a few seconds after the notice changes.
#[function_component]
pub fn Toast(props: &ToastProps) -> Html {
	let on_dismiss = props.on_dismiss.clone();
	use_effect_with(props.notice.clone(), move |notice| {
		let timeout = notice
			.is_some()
			.then(|| gloo_timers::callback::Timeout::new(DISMISS_MILLIS, move || on_dismiss.emit(())));
		move || drop(timeout)
	});
	let Some(notice) = &props.notice else {
		return html!();
	};
	let class = match notice.is_error {
		true => "toast-notice alert alert-danger position-fixed bottom-0 end-0 m-3",
		false => "toast-notice alert alert-success position-fixed bottom-0 end-0 m-3",
	};
	html! {
		<div {class} role="status">{notice.message.clone()}</div>
	}
}
