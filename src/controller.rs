use crate::{
	api::{ApiError, BoardApi, Credentials, NewActivity},
	board::{BoardAction, StatusMessage, Tone},
	config::Config,
	session::Session,
};
use std::{cell::Cell, rc::Rc};
use yew::Callback;

pub static SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub static UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub static CREATE_FAILED: &str = "An error occurred. Please try again.";
pub static REJECTED_WITHOUT_DETAIL: &str = "An error occurred";
pub static LOGIN_REQUIRED: &str = "You must be logged in as a teacher to unregister participants.";
pub static LOGGED_OUT: &str = "You have been logged out.";

/// Interruptions that block the page until acknowledged.
pub trait Notifier {
	fn alert(&self, message: &str);
	fn reload(&self);
}

pub struct BrowserNotifier;
impl Notifier for BrowserNotifier {
	fn alert(&self, message: &str) {
		if let Err(err) = gloo_utils::window().alert_with_message(message) {
			log::error!(target: "board", "{err:?}");
		}
	}

	fn reload(&self) {
		if let Err(err) = gloo_utils::window().location().reload() {
			log::error!(target: "board", "{err:?}");
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
	Accepted,
	/// Shown briefly next to the login form.
	Rejected(String),
	Unreachable,
}

#[derive(Default)]
struct Counters {
	fetch: Cell<u64>,
	status: Cell<u64>,
}
impl Counters {
	fn next(cell: &Cell<u64>) -> u64 {
		let value = cell.get() + 1;
		cell.set(value);
		value
	}
}

/// Carries out every user intent against the API and reports the results to the board.
#[derive(Clone)]
pub struct Controller {
	api: Rc<dyn BoardApi>,
	session: Session,
	notifier: Rc<dyn Notifier>,
	dispatch: Callback<BoardAction>,
	config: Rc<Config>,
	counters: Rc<Counters>,
}
impl PartialEq for Controller {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.counters, &other.counters) && self.dispatch == other.dispatch
	}
}

impl Controller {
	pub fn new(
		api: Rc<dyn BoardApi>,
		session: Session,
		notifier: Rc<dyn Notifier>,
		dispatch: Callback<BoardAction>,
		config: Rc<Config>,
	) -> Self {
		Self {
			api,
			session,
			notifier,
			dispatch,
			config,
			counters: Rc::new(Counters::default()),
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Fetches the whole board. A response is ignored if a newer fetch was issued meanwhile.
	pub async fn refresh(&self) {
		let seq = Counters::next(&self.counters.fetch);
		self.dispatch.emit(BoardAction::FetchIssued(seq));
		match self.api.list_activities().await {
			Ok(snapshot) => {
				log::debug!(target: "board", "fetch {seq} returned {} activities", snapshot.len());
				self.dispatch.emit(BoardAction::FetchLoaded {
					seq,
					snapshot: Rc::new(snapshot),
				});
			}
			Err(err) => {
				log::error!(target: "board", "Error fetching activities: {err:?}");
				self.dispatch.emit(BoardAction::FetchFailed(seq));
			}
		}
	}

	/// Updates one of the view controls, then fetches the board again.
	pub async fn change_filter(&self, change: BoardAction) {
		self.dispatch.emit(change);
		self.refresh().await;
	}

	pub fn dismiss_status(&self, id: u64) {
		self.dispatch.emit(BoardAction::HideStatus(id));
	}

	/// Returns true when the signup form should be cleared.
	pub async fn signup(&self, activity: &str, email: &str) -> bool {
		let result = self.api.signup(activity, email).await;
		self.conclude(result, SIGNUP_FAILED).await
	}

	pub async fn unregister(&self, activity: &str, email: &str) {
		if !self.session.is_logged_in() {
			self.notifier.alert(LOGIN_REQUIRED);
			return;
		}
		let result = self.api.unregister(activity, email).await;
		self.conclude(result, UNREGISTER_FAILED).await;
	}

	/// Returns true when the creation form should close.
	pub async fn create_activity(&self, activity: &NewActivity) -> bool {
		let result = self.api.create_activity(activity).await;
		self.conclude(result, CREATE_FAILED).await
	}

	async fn conclude(&self, result: Result<crate::api::Reply, ApiError>, unreachable: &str) -> bool {
		match result {
			Ok(reply) => {
				self.show_status(reply.message, Tone::Success);
				self.refresh().await;
				true
			}
			Err(err) if err.is_unreachable() => {
				log::error!(target: "board", "{unreachable} {err:?}");
				self.show_status(unreachable.to_owned(), Tone::Error);
				false
			}
			Err(err) => {
				let detail = err.detail().unwrap_or(REJECTED_WITHOUT_DETAIL).to_owned();
				self.show_status(detail, Tone::Error);
				false
			}
		}
	}

	fn show_status(&self, text: String, tone: Tone) {
		let id = Counters::next(&self.counters.status);
		self.dispatch.emit(BoardAction::ShowStatus(StatusMessage { id, text, tone }));
	}

	pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
		let credentials = Credentials {
			username: username.to_owned(),
			password: password.to_owned(),
		};
		match self.api.login(&credentials).await {
			Ok(reply) => {
				log::info!(target: "session", "{} logged in", credentials.username);
				self.session.sign_in();
				self.notifier.alert(&reply.message);
				self.notifier.reload();
				LoginOutcome::Accepted
			}
			Err(err) if err.is_unreachable() => {
				log::error!(target: "session", "Error logging in: {err:?}");
				LoginOutcome::Unreachable
			}
			Err(err) => LoginOutcome::Rejected(err.detail().unwrap_or(REJECTED_WITHOUT_DETAIL).to_owned()),
		}
	}

	/// Returns false when nobody was logged in; the caller offers the login form instead.
	pub fn logout(&self) -> bool {
		if !self.session.is_logged_in() {
			return false;
		}
		self.session.sign_out();
		self.notifier.alert(LOGGED_OUT);
		self.dispatch.emit(BoardAction::Session(false));
		true
	}

	/// Categories offered when creating an activity, read from a fresh fetch.
	pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
		Ok(self.api.list_activities().await?.categories())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		api::Reply,
		data::{Activity, Snapshot},
		session::tests::memory_session,
	};
	use futures::executor::block_on;
	use futures_util::future::LocalBoxFuture;
	use std::cell::RefCell;

	#[derive(Debug, Clone, PartialEq)]
	pub enum Call {
		List,
		Signup(String, String),
		Unregister(String, String),
		Create(NewActivity),
		Login(String),
	}

	pub struct FakeApi {
		pub activities: Result<Snapshot, ApiError>,
		pub reply: Result<Reply, ApiError>,
		pub calls: RefCell<Vec<Call>>,
	}
	impl FakeApi {
		pub fn answering(reply: Result<Reply, ApiError>) -> Self {
			let activities = [("Chess Club", Some("Games")), ("Art Club", Some("Arts"))]
				.into_iter()
				.map(|(name, category)| {
					let activity = Activity {
						category: category.map(str::to_owned),
						max_participants: 12,
						..Default::default()
					};
					(name.to_owned(), activity)
				})
				.collect();
			Self {
				activities: Ok(activities),
				reply,
				calls: RefCell::default(),
			}
		}

		fn record(&self, call: Call) -> Result<Reply, ApiError> {
			self.calls.borrow_mut().push(call);
			self.reply.clone()
		}

		pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
			self.calls.borrow().iter().filter(|call| matches(call)).count()
		}
	}
	impl BoardApi for FakeApi {
		fn list_activities(&self) -> LocalBoxFuture<'_, Result<Snapshot, ApiError>> {
			self.calls.borrow_mut().push(Call::List);
			let activities = self.activities.clone();
			Box::pin(async move { activities })
		}

		fn signup<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
			let reply = self.record(Call::Signup(activity.into(), email.into()));
			Box::pin(async move { reply })
		}

		fn unregister<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
			let reply = self.record(Call::Unregister(activity.into(), email.into()));
			Box::pin(async move { reply })
		}

		fn create_activity<'a>(&'a self, activity: &'a NewActivity) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
			let reply = self.record(Call::Create(activity.clone()));
			Box::pin(async move { reply })
		}

		fn login<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
			let reply = self.record(Call::Login(credentials.username.clone()));
			Box::pin(async move { reply })
		}
	}

	#[derive(Default)]
	pub struct RecordingNotifier {
		pub alerts: RefCell<Vec<String>>,
		pub reloads: Cell<usize>,
	}
	impl Notifier for RecordingNotifier {
		fn alert(&self, message: &str) {
			self.alerts.borrow_mut().push(message.to_owned());
		}

		fn reload(&self) {
			self.reloads.set(self.reloads.get() + 1);
		}
	}

	struct Harness {
		api: Rc<FakeApi>,
		notifier: Rc<RecordingNotifier>,
		session: Session,
		actions: Rc<RefCell<Vec<BoardAction>>>,
		controller: Controller,
	}

	fn harness(reply: Result<Reply, ApiError>, logged_in: bool) -> Harness {
		harness_with(FakeApi::answering(reply), logged_in)
	}

	fn harness_with(api: FakeApi, logged_in: bool) -> Harness {
		let api = Rc::new(api);
		let notifier = Rc::new(RecordingNotifier::default());
		let (session, _) = memory_session();
		if logged_in {
			session.sign_in();
		}
		let actions: Rc<RefCell<Vec<BoardAction>>> = Rc::default();
		let dispatch = Callback::from({
			let actions = actions.clone();
			move |action: BoardAction| actions.borrow_mut().push(action)
		});
		let controller = Controller::new(
			api.clone(),
			session.clone(),
			notifier.clone(),
			dispatch,
			Rc::new(Config::default()),
		);
		Harness {
			api,
			notifier,
			session,
			actions,
			controller,
		}
	}

	fn ok(message: &str) -> Result<Reply, ApiError> {
		Ok(Reply {
			message: message.to_owned(),
		})
	}

	fn rejected(detail: Option<&str>) -> Result<Reply, ApiError> {
		Err(ApiError::Rejected {
			status: 400,
			detail: detail.map(str::to_owned),
		})
	}

	impl Harness {
		fn statuses(&self) -> Vec<(String, Tone)> {
			self.actions
				.borrow()
				.iter()
				.filter_map(|action| match action {
					BoardAction::ShowStatus(status) => Some((status.text.clone(), status.tone)),
					_ => None,
				})
				.collect()
		}

		fn fetches(&self) -> usize {
			self.api.count(|call| *call == Call::List)
		}
	}

	#[test]
	fn refresh_issues_then_loads() {
		let h = harness(ok(""), false);
		block_on(h.controller.refresh());
		let actions = h.actions.borrow();
		assert_eq!(actions[0], BoardAction::FetchIssued(1));
		assert!(matches!(&actions[1], BoardAction::FetchLoaded { seq: 1, snapshot } if snapshot.len() == 2));
	}

	#[test]
	fn refresh_failure_is_reported() {
		let mut api = FakeApi::answering(ok(""));
		api.activities = Err(ApiError::Network("offline".into()));
		let h = harness_with(api, false);
		block_on(h.controller.refresh());
		assert_eq!(h.actions.borrow()[1], BoardAction::FetchFailed(1));
	}

	#[test]
	fn filter_change_refetches() {
		let h = harness(ok(""), false);
		block_on(h.controller.change_filter(BoardAction::Search("chess".into())));
		let actions = h.actions.borrow();
		assert_eq!(actions[0], BoardAction::Search("chess".into()));
		assert_eq!(actions[1], BoardAction::FetchIssued(1));
		assert_eq!(h.fetches(), 1);
	}

	#[test]
	fn overlapping_refreshes_get_increasing_sequence_numbers() {
		let h = harness(ok(""), false);
		block_on(h.controller.refresh());
		block_on(h.controller.refresh());
		let issued = h
			.actions
			.borrow()
			.iter()
			.filter_map(|action| match action {
				BoardAction::FetchIssued(seq) => Some(*seq),
				_ => None,
			})
			.collect::<Vec<_>>();
		assert_eq!(issued, vec![1, 2]);
	}

	#[test]
	fn successful_signup_reports_and_refetches_once() {
		let h = harness(ok("Signed up a@x.com for Chess Club"), false);
		let clear_form = block_on(h.controller.signup("Chess Club", "a@x.com"));
		assert!(clear_form);
		assert_eq!(
			h.statuses(),
			vec![("Signed up a@x.com for Chess Club".to_owned(), Tone::Success)]
		);
		assert_eq!(h.fetches(), 1);
		assert_eq!(
			h.api.calls.borrow()[0],
			Call::Signup("Chess Club".into(), "a@x.com".into())
		);
	}

	#[test]
	fn rejected_signup_shows_detail_verbatim() {
		let h = harness(rejected(Some("Student is already signed up")), false);
		let clear_form = block_on(h.controller.signup("Chess Club", "a@x.com"));
		assert!(!clear_form);
		assert_eq!(h.statuses(), vec![("Student is already signed up".to_owned(), Tone::Error)]);
		assert_eq!(h.fetches(), 0);
	}

	#[test]
	fn rejection_without_detail_uses_generic_text() {
		let h = harness(rejected(None), false);
		block_on(h.controller.signup("Chess Club", "a@x.com"));
		assert_eq!(h.statuses(), vec![(REJECTED_WITHOUT_DETAIL.to_owned(), Tone::Error)]);
	}

	#[test]
	fn unreachable_signup_uses_fallback_text() {
		let h = harness(Err(ApiError::Network("offline".into())), false);
		block_on(h.controller.signup("Chess Club", "a@x.com"));
		assert_eq!(h.statuses(), vec![(SIGNUP_FAILED.to_owned(), Tone::Error)]);
	}

	#[test]
	fn unregister_while_logged_out_never_calls_api() {
		let h = harness(ok("Unregistered a@x.com from Chess Club"), false);
		block_on(h.controller.unregister("Chess Club", "a@x.com"));
		assert!(h.api.calls.borrow().is_empty());
		assert_eq!(*h.notifier.alerts.borrow(), vec![LOGIN_REQUIRED.to_owned()]);
		assert!(h.actions.borrow().is_empty());
	}

	#[test]
	fn unregister_while_logged_in() {
		let h = harness(ok("Unregistered a@x.com from Chess Club"), true);
		block_on(h.controller.unregister("Chess Club", "a@x.com"));
		assert_eq!(
			h.api.calls.borrow()[0],
			Call::Unregister("Chess Club".into(), "a@x.com".into())
		);
		assert_eq!(h.fetches(), 1);
		assert!(h.notifier.alerts.borrow().is_empty());
	}

	#[test]
	fn create_activity_closes_form_on_success() {
		let h = harness(ok("Activity Robotics created"), true);
		let activity = NewActivity {
			name: "Robotics".into(),
			max_participants: Some(10),
			..Default::default()
		};
		assert!(block_on(h.controller.create_activity(&activity)));
		assert_eq!(h.api.calls.borrow()[0], Call::Create(activity));
		assert_eq!(h.fetches(), 1);
	}

	#[test]
	fn create_activity_failure_keeps_form_open() {
		let h = harness(Err(ApiError::Network("offline".into())), true);
		assert!(!block_on(h.controller.create_activity(&NewActivity::default())));
		assert_eq!(h.statuses(), vec![(CREATE_FAILED.to_owned(), Tone::Error)]);
	}

	#[test]
	fn create_activity_validation_error_shows_server_reason() {
		let h = harness(
			Err(ApiError::Rejected {
				status: 422,
				detail: Some("Input should be a valid integer".into()),
			}),
			true,
		);
		let activity = NewActivity {
			name: "Robotics".into(),
			max_participants: NewActivity::parse_capacity("lots"),
			..Default::default()
		};
		assert!(!block_on(h.controller.create_activity(&activity)));
		assert_eq!(h.statuses(), vec![("Input should be a valid integer".to_owned(), Tone::Error)]);
	}

	#[test]
	fn each_status_gets_a_fresh_id() {
		let h = harness(rejected(Some("nope")), false);
		block_on(h.controller.signup("Chess Club", "a@x.com"));
		block_on(h.controller.signup("Chess Club", "a@x.com"));
		let ids = h
			.actions
			.borrow()
			.iter()
			.filter_map(|action| match action {
				BoardAction::ShowStatus(status) => Some(status.id),
				_ => None,
			})
			.collect::<Vec<_>>();
		assert_eq!(ids, vec![1, 2]);
	}

	#[test]
	fn login_success_sets_flag_and_reloads() {
		let h = harness(ok("Login successful"), false);
		let outcome = block_on(h.controller.login("mrodriguez", "art123"));
		assert_eq!(outcome, LoginOutcome::Accepted);
		assert!(h.session.is_logged_in());
		assert_eq!(*h.notifier.alerts.borrow(), vec!["Login successful".to_owned()]);
		assert_eq!(h.notifier.reloads.get(), 1);
	}

	#[test]
	fn login_failure_leaves_flag_alone() {
		let h = harness(rejected(Some("Invalid credentials")), false);
		let outcome = block_on(h.controller.login("mrodriguez", "wrong"));
		assert_eq!(outcome, LoginOutcome::Rejected("Invalid credentials".into()));
		assert!(!h.session.is_logged_in());
		assert_eq!(h.notifier.reloads.get(), 0);
		assert!(h.notifier.alerts.borrow().is_empty());
	}

	#[test]
	fn login_while_unreachable() {
		let h = harness(Err(ApiError::Network("offline".into())), false);
		assert_eq!(block_on(h.controller.login("a", "b")), LoginOutcome::Unreachable);
		assert!(!h.session.is_logged_in());
	}

	#[test]
	fn logout_clears_flag_and_hides_controls() {
		let h = harness(ok(""), true);
		assert!(h.controller.logout());
		assert!(!h.session.is_logged_in());
		assert_eq!(*h.notifier.alerts.borrow(), vec![LOGGED_OUT.to_owned()]);
		assert_eq!(*h.actions.borrow(), vec![BoardAction::Session(false)]);
	}

	#[test]
	fn logout_when_logged_out_does_nothing() {
		let h = harness(ok(""), false);
		assert!(!h.controller.logout());
		assert!(h.notifier.alerts.borrow().is_empty());
		assert!(h.actions.borrow().is_empty());
	}

	#[test]
	fn categories_come_from_a_fresh_fetch() {
		let h = harness(ok(""), true);
		let categories = block_on(h.controller.categories()).unwrap();
		assert_eq!(categories, vec!["Games", "Arts"]);
		assert_eq!(h.fetches(), 1);
	}
}
