use super::use_controller;
use crate::view::{CardView, ListView, ParticipantView, LOADING_TEXT, NO_PARTICIPANTS_TEXT};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ActivityListProps {
	pub list: ListView,
}

#[function_component]
pub fn ActivityList(ActivityListProps { list }: &ActivityListProps) -> Html {
	let content = match list {
		ListView::Loading => html!(<p>{LOADING_TEXT}</p>),
		ListView::Unavailable(text) => html!(<p>{*text}</p>),
		ListView::Cards(cards) => cards
			.iter()
			.map(|card| html!(<ActivityCard key={card.name.clone()} card={card.clone()} />))
			.collect::<Html>(),
	};
	html! {
		<div id="activities-list">{content}</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ActivityCardProps {
	pub card: CardView,
}

#[function_component]
fn ActivityCard(ActivityCardProps { card }: &ActivityCardProps) -> Html {
	let participants = match card.participants.is_empty() {
		true => html!(<p><em>{NO_PARTICIPANTS_TEXT}</em></p>),
		false => html! {
			<div class="participants-section">
				<h5>{"Participants:"}</h5>
				<ul class="participants-list">
					{for card.participants.iter().map(|row| html!(<ParticipantRow row={row.clone()} />))}
				</ul>
			</div>
		},
	};
	html! {
		<div class="activity-card">
			<h4>{card.name.clone()}</h4>
			<p>{card.description.clone()}</p>
			<p><strong>{"Schedule:"}</strong>{format!(" {}", card.schedule)}</p>
			<p><strong>{"Availability:"}</strong>{format!(" {} spots left", card.spots_left)}</p>
			<div class="participants-container">{participants}</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ParticipantRowProps {
	row: ParticipantView,
}

#[function_component]
fn ParticipantRow(ParticipantRowProps { row }: &ParticipantRowProps) -> Html {
	let controller = use_controller();
	let onclick = Callback::from({
		let activity = row.activity.clone();
		let email = row.email.clone();
		move |_: MouseEvent| {
			let controller = controller.clone();
			let activity = activity.clone();
			let email = email.clone();
			wasm_bindgen_futures::spawn_local(async move { controller.unregister(&activity, &email).await });
		}
	});
	html! {
		<li>
			<span class="participant-email">{row.email.clone()}</span>
			<button
				class={classes!("delete-btn", (!row.removable).then_some("hidden"))}
				data-activity={row.activity.clone()} data-email={row.email.clone()}
				{onclick}
			>
				{"❌"}
			</button>
		</li>
	}
}
