use super::use_controller;
use crate::board::StatusMessage;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct StatusBannerProps {
	pub status: Option<StatusMessage>,
	/// (message id, milliseconds) until the message hides itself.
	pub timer: Option<(u64, u32)>,
}

/// Shows the outcome of the latest action. Changing `timer` drops the previous `Timeout`.
#[function_component]
pub fn StatusBanner(StatusBannerProps { status, timer }: &StatusBannerProps) -> Html {
	let controller = use_controller();
	use_effect_with(*timer, move |timer| {
		let timeout = (*timer).map(|(id, duration)| Timeout::new(duration, move || controller.dismiss_status(id)));
		move || drop(timeout)
	});
	match status {
		None => html!(<div id="message" class="hidden" />),
		Some(status) => html! {
			<div id="message" class={status.tone.class()}>{status.text.clone()}</div>
		},
	}
}
