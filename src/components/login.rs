use super::{use_controller, Modal};
use crate::{
	controller::LoginOutcome,
	login_form::{LoginForm, LoginFormAction},
	util::web_ext::InputExt,
};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SessionButtonProps {
	pub logged_in: bool,
}

/// Logs the teacher out, or offers the login form when nobody is logged in.
#[function_component]
pub fn SessionButton(SessionButtonProps { logged_in }: &SessionButtonProps) -> Html {
	let controller = use_controller();
	let login_open = use_state_eq(|| false);
	let onclick = {
		let login_open = login_open.clone();
		Callback::from(move |_: MouseEvent| {
			if !controller.logout() {
				login_open.set(!*login_open);
			}
		})
	};
	let close = {
		let login_open = login_open.clone();
		Callback::from(move |_| login_open.set(false))
	};
	html! {<>
		<button id="login-button" {onclick}>
			{if *logged_in { "Logout" } else { "Login" }}
		</button>
		if *login_open {
			<LoginModal on_close={close} />
		}
	</>}
}

#[derive(Clone, PartialEq, Properties)]
pub struct LoginModalProps {
	pub on_close: Callback<()>,
}

#[function_component]
pub fn LoginModal(LoginModalProps { on_close }: &LoginModalProps) -> Html {
	let controller = use_controller();
	let form = use_reducer(LoginForm::default);

	{
		let dispatcher = form.dispatcher();
		use_effect_with(form.error_timer(controller.config()), move |timer| {
			let timeout = (*timer).map(|(attempt, duration)| {
				Timeout::new(duration, move || dispatcher.dispatch(LoginFormAction::ClearError(attempt)))
			});
			move || drop(timeout)
		});
	}

	let edit = {
		let dispatcher = form.dispatcher();
		Callback::from(move |action: LoginFormAction| dispatcher.dispatch(action))
	};
	let on_username = edit.filter_reform(|e: InputEvent| e.input_value().map(LoginFormAction::Username));
	let on_password = edit.filter_reform(|e: InputEvent| e.input_value().map(LoginFormAction::Password));
	let on_username = Callback::from(move |e| { let _ = on_username.emit(e); });
	let on_password = Callback::from(move |e| { let _ = on_password.emit(e); });
	let onsubmit = {
		let form = form.clone();
		let on_close = on_close.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let controller = controller.clone();
			let dispatcher = form.dispatcher();
			let (username, password) = (form.username.clone(), form.password.clone());
			let on_close = on_close.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let outcome = controller.login(&username, &password).await;
				let accepted = outcome == LoginOutcome::Accepted;
				dispatcher.dispatch(LoginFormAction::Answered(outcome));
				if accepted {
					on_close.emit(());
				}
			});
		})
	};

	html! {
		<Modal id="login-modal" title="Teacher Login" on_close={on_close.clone()}>
			<form id="login-form" {onsubmit}>
				<label for="username">{"Username:"}</label>
				<input type="text" id="username" required=true value={form.username.clone()} oninput={on_username} />
				<label for="password">{"Password:"}</label>
				<input type="password" id="password" required=true value={form.password.clone()} oninput={on_password} />
				if let Some(error) = &form.error {
					<p id="login-error">{error.message.clone()}</p>
				}
				<button type="submit">{"Login"}</button>
			</form>
		</Modal>
	}
}
