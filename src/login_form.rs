use crate::{config::Config, controller::LoginOutcome};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct LoginError {
	/// Which rejection this is, so an older timer cannot clear a newer error.
	pub attempt: u32,
	pub message: String,
}

/// Field values and the inline error of the login modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
	pub username: String,
	pub password: String,
	pub error: Option<LoginError>,
	attempts: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginFormAction {
	Username(String),
	Password(String),
	Answered(LoginOutcome),
	ClearError(u32),
}

impl LoginForm {
	pub fn apply(&mut self, action: LoginFormAction) {
		match action {
			LoginFormAction::Username(username) => self.username = username,
			LoginFormAction::Password(password) => self.password = password,
			LoginFormAction::Answered(LoginOutcome::Accepted) => {
				self.password.clear();
				self.error = None;
			}
			LoginFormAction::Answered(LoginOutcome::Rejected(message)) => {
				self.attempts += 1;
				self.password.clear();
				self.error = Some(LoginError {
					attempt: self.attempts,
					message,
				});
			}
			LoginFormAction::Answered(LoginOutcome::Unreachable) => {}
			LoginFormAction::ClearError(attempt) => {
				if self.error.as_ref().map(|error| error.attempt) == Some(attempt) {
					self.error = None;
				}
			}
		}
	}

	/// The error on screen and how long it stays there.
	pub fn error_timer(&self, config: &Config) -> Option<(u32, u32)> {
		let error = self.error.as_ref()?;
		Some((error.attempt, config.login_error_duration_ms))
	}
}

impl Reducible for LoginForm {
	type Action = LoginFormAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = (*self).clone();
		form.apply(action);
		match form != *self {
			true => Rc::new(form),
			false => self,
		}
	}
}
