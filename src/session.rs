use crate::config::SESSION_FLAG_KEY;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::rc::Rc;

/// Raw string storage that outlives a page load.
pub trait SessionStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: String);
}

/// The browser's `localStorage`.
pub struct BrowserStore;
impl SessionStore for BrowserStore {
	fn get(&self, key: &str) -> Option<String> {
		LocalStorage::raw().get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: String) {
		if let Err(err) = LocalStorage::raw().set_item(key, &value) {
			log::error!(target: "session", "Failed to persist {key:?}: {err:?}");
		}
	}
}

pub trait SessionValue {
	fn id() -> &'static str;

	fn load(store: &dyn SessionStore) -> Option<Self>
	where
		Self: DeserializeOwned,
	{
		let raw = store.get(Self::id())?;
		serde_json::from_str(&raw).ok()
	}

	fn save(&self, store: &dyn SessionStore)
	where
		Self: Serialize,
	{
		match serde_json::to_string(self) {
			Ok(raw) => store.set(Self::id(), raw),
			Err(err) => log::error!(target: "session", "Failed to encode {:?}: {err:?}", Self::id()),
		}
	}
}

/// Whether a teacher has logged in on this browser. Stored as `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherLogin(pub bool);
impl SessionValue for TeacherLogin {
	fn id() -> &'static str {
		SESSION_FLAG_KEY
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	LoggedOut,
	LoggedIn,
}

/// Handle on the login flag. Only gates what the page shows; the server never sees it.
#[derive(Clone)]
pub struct Session(Rc<dyn SessionStore>);

impl Session {
	pub fn new(store: Rc<dyn SessionStore>) -> Self {
		Self(store)
	}

	pub fn browser() -> Self {
		Self::new(Rc::new(BrowserStore))
	}

	pub fn state(&self) -> SessionState {
		match TeacherLogin::load(&*self.0) {
			Some(TeacherLogin(true)) => SessionState::LoggedIn,
			_ => SessionState::LoggedOut,
		}
	}

	pub fn is_logged_in(&self) -> bool {
		self.state() == SessionState::LoggedIn
	}

	pub fn sign_in(&self) {
		TeacherLogin(true).save(&*self.0);
	}

	pub fn sign_out(&self) {
		TeacherLogin(false).save(&*self.0);
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Session").field(&self.state()).finish()
	}
}
