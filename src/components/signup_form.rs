use super::use_controller;
use crate::util::web_ext::InputExt;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SignupFormProps {
	/// Activity names offered in the selector.
	pub options: Vec<String>,
}

#[function_component]
pub fn SignupForm(SignupFormProps { options }: &SignupFormProps) -> Html {
	let controller = use_controller();
	let email = use_state(String::new);
	let activity = use_state(String::new);

	let on_email = {
		let email = email.clone();
		Callback::from(move |e: InputEvent| {
			if let Some(value) = e.input_value() {
				email.set(value);
			}
		})
	};
	let on_activity = {
		let activity = activity.clone();
		Callback::from(move |e: Event| {
			if let Some(value) = e.input_value() {
				activity.set(value);
			}
		})
	};
	let onsubmit = {
		let email = email.clone();
		let activity = activity.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let controller = controller.clone();
			let email = email.clone();
			let activity = activity.clone();
			wasm_bindgen_futures::spawn_local(async move {
				if controller.signup(&activity, &email).await {
					email.set(String::new());
					activity.set(String::new());
				}
			});
		})
	};

	html! {
		<form id="signup-form" {onsubmit}>
			<div class="form-group">
				<label for="email">{"Student Email:"}</label>
				<input
					type="email" id="email" required=true
					placeholder="your-email@mergington.edu"
					value={(*email).clone()}
					oninput={on_email}
				/>
			</div>
			<div class="form-group">
				<label for="activity">{"Select Activity:"}</label>
				<select id="activity" required=true onchange={on_activity}>
					<option value="" selected={activity.is_empty()}>{"-- Select an activity --"}</option>
					{for options.iter().map(|name| html! {
						<option value={name.clone()} selected={*activity == *name}>{name.clone()}</option>
					})}
				</select>
			</div>
			<button type="submit">{"Sign Up"}</button>
		</form>
	}
}
