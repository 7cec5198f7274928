use super::{use_controller, Modal};
use crate::{
	api::{ApiError, NewActivity},
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AddActivityProps {
	/// Only logged-in teachers may create activities.
	pub visible: bool,
}

#[function_component]
pub fn AddActivity(AddActivityProps { visible }: &AddActivityProps) -> Html {
	let controller = use_controller();
	let is_open = use_state_eq(|| false);
	let categories = use_state(Vec::<String>::new);

	let onclick = {
		let is_open = is_open.clone();
		let categories = categories.clone();
		Callback::from(move |_: MouseEvent| {
			is_open.set(true);
			let controller = controller.clone();
			let categories = categories.clone();
			crate::util::spawn_local("board", async move {
				categories.set(controller.categories().await?);
				Ok::<(), ApiError>(())
			});
		})
	};
	let close = {
		let is_open = is_open.clone();
		Callback::from(move |_| is_open.set(false))
	};

	html! {<>
		<button id="add-activity-button" class={classes!((!*visible).then_some("hidden"))} {onclick}>
			{"Add Activity"}
		</button>
		if *is_open {
			<CreateActivityModal categories={(*categories).clone()} on_close={close} />
		}
	</>}
}

/// Raw text of each field, converted only on submit.
#[derive(Clone, Debug, Default, PartialEq)]
struct ActivityForm {
	name: String,
	description: String,
	start_time: String,
	end_time: String,
	category: String,
	max_participants: String,
}

impl ActivityForm {
	fn to_request(&self) -> NewActivity {
		NewActivity {
			name: self.name.clone(),
			description: self.description.clone(),
			start_time: self.start_time.clone(),
			end_time: self.end_time.clone(),
			category: self.category.clone(),
			max_participants: NewActivity::parse_capacity(&self.max_participants),
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
struct CreateActivityModalProps {
	categories: Vec<String>,
	on_close: Callback<()>,
}

#[function_component]
fn CreateActivityModal(CreateActivityModalProps { categories, on_close }: &CreateActivityModalProps) -> Html {
	let controller = use_controller();
	let form = use_state(ActivityForm::default);

	let field = |apply: fn(&mut ActivityForm, String)| {
		let form = form.clone();
		move |value: String| {
			let mut next = (*form).clone();
			apply(&mut next, value);
			form.set(next);
		}
	};
	let on_text = |apply: fn(&mut ActivityForm, String)| {
		let update = field(apply);
		Callback::from(move |e: InputEvent| {
			if let Some(value) = e.input_value() {
				update(value);
			}
		})
	};
	let on_category = {
		let update = field(|form, value| form.category = value);
		Callback::from(move |e: Event| {
			if let Some(value) = e.input_value() {
				update(value);
			}
		})
	};

	let onsubmit = {
		let form = form.clone();
		let on_close = on_close.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let controller = controller.clone();
			let form = form.clone();
			let on_close = on_close.clone();
			wasm_bindgen_futures::spawn_local(async move {
				if controller.create_activity(&form.to_request()).await {
					form.set(ActivityForm::default());
					on_close.emit(());
				}
			});
		})
	};

	html! {
		<Modal id="create-activity-modal" title="Create New Activity" on_close={on_close.clone()}>
			<form id="create-activity-form" {onsubmit}>
				<label for="activity-name">{"Name:"}</label>
				<input
					type="text" id="activity-name" required=true
					value={form.name.clone()}
					oninput={on_text(|form, value| form.name = value)}
				/>
				<label for="activity-description">{"Description:"}</label>
				<textarea
					id="activity-description" required=true
					value={form.description.clone()}
					oninput={on_text(|form, value| form.description = value)}
				/>
				<label for="activity-start-time">{"Start Time:"}</label>
				<input
					type="time" id="activity-start-time" required=true
					value={form.start_time.clone()}
					oninput={on_text(|form, value| form.start_time = value)}
				/>
				<label for="activity-end-time">{"End Time:"}</label>
				<input
					type="time" id="activity-end-time" required=true
					value={form.end_time.clone()}
					oninput={on_text(|form, value| form.end_time = value)}
				/>
				<label for="activity-category">{"Category:"}</label>
				<select id="activity-category" required=true onchange={on_category}>
					<option value="" selected={form.category.is_empty()}>{"-- Select a category --"}</option>
					{for categories.iter().map(|category| html! {
						<option value={category.clone()} selected={form.category == *category}>
							{category.clone()}
						</option>
					})}
				</select>
				<label for="activity-max-participants">{"Max Participants:"}</label>
				<input
					type="number" id="activity-max-participants" required=true
					value={form.max_participants.clone()}
					oninput={on_text(|form, value| form.max_participants = value)}
				/>
				<button type="submit">{"Create Activity"}</button>
			</form>
		</Modal>
	}
}
