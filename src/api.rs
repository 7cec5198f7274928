use crate::{
	data::Snapshot,
	response::{InvalidJson, Response},
};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use url::Url;

/// The board's HTTP collaborator. Every call is a single attempt with no timeout.
pub trait BoardApi {
	fn list_activities(&self) -> LocalBoxFuture<'_, Result<Snapshot, ApiError>>;

	fn signup<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>>;

	fn unregister<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>>;

	fn create_activity<'a>(&'a self, activity: &'a NewActivity) -> LocalBoxFuture<'a, Result<Reply, ApiError>>;

	fn login<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, Result<Reply, ApiError>>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Network(String),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("rejected with status {status}: {detail:?}")]
	Rejected { status: u16, detail: Option<String> },
}

impl From<reqwest::Error> for ApiError {
	fn from(err: reqwest::Error) -> Self {
		Self::Network(err.to_string())
	}
}

impl ApiError {
	/// The server's explanation, when it gave one.
	pub fn detail(&self) -> Option<&str> {
		match self {
			Self::Rejected { detail, .. } => detail.as_deref(),
			_ => None,
		}
	}

	/// Transport failures and unreadable answers are handled alike.
	pub fn is_unreachable(&self) -> bool {
		!matches!(self, Self::Rejected { .. })
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
	pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewActivity {
	pub name: String,
	pub description: String,
	pub start_time: String,
	pub end_time: String,
	pub category: String,
	/// `None` when the form text holds no number; sent as `null` for the server to reject.
	pub max_participants: Option<i64>,
}

impl NewActivity {
	/// Reads a capacity the way a browser's `parseInt(text, 10)` would: leading whitespace,
	/// an optional sign, then as many digits as follow.
	pub fn parse_capacity(text: &str) -> Option<i64> {
		let text = text.trim_start();
		let (negative, rest) = match text.as_bytes().first() {
			Some(b'-') => (true, &text[1..]),
			Some(b'+') => (false, &text[1..]),
			_ => (false, text),
		};
		let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
		let value = rest[..digits].parse::<i64>().ok()?;
		Some(if negative { -value } else { value })
	}
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}
impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Relative path of a roster change, with both values percent-encoded.
pub fn roster_path(activity: &str, action: &str, email: &str) -> String {
	format!(
		"activities/{}/{action}?email={}",
		urlencoding::encode(activity),
		urlencoding::encode(email)
	)
}

#[derive(Clone, Debug)]
pub struct HttpApi {
	client: reqwest::Client,
	root: Url,
}

impl HttpApi {
	pub fn new(root: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			root,
		}
	}

	fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		endpoint(&self.root, path)
	}
}

fn endpoint(root: &Url, path: &str) -> Result<Url, ApiError> {
	root.join(path)
		.map_err(|err| ApiError::Network(format!("invalid endpoint {path:?}: {err}")))
}

impl BoardApi for HttpApi {
	fn list_activities(&self) -> LocalBoxFuture<'_, Result<Snapshot, ApiError>> {
		Box::pin(async move {
			let url = self.endpoint("activities")?;
			Response::from(self.client.get(url)).send().await
		})
	}

	fn signup<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
		Box::pin(async move {
			let url = self.endpoint(&roster_path(activity, "signup", email))?;
			Response::from(self.client.post(url)).send().await
		})
	}

	fn unregister<'a>(&'a self, activity: &'a str, email: &'a str) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
		Box::pin(async move {
			let url = self.endpoint(&roster_path(activity, "unregister", email))?;
			Response::from(self.client.delete(url)).send().await
		})
	}

	fn create_activity<'a>(&'a self, activity: &'a NewActivity) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
		Box::pin(async move {
			let url = self.endpoint("activities")?;
			Response::from(self.client.post(url)).with_json(activity).send().await
		})
	}

	fn login<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, Result<Reply, ApiError>> {
		Box::pin(async move {
			let url = self.endpoint("login")?;
			Response::from(self.client.post(url)).with_json(credentials).send().await
		})
	}
}
