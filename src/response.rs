use crate::api::ApiError;
use reqwest::RequestBuilder;
use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, ApiError> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		interpret(status.as_u16(), status.is_success(), &text)
	}
}

/// Decodes a response body: the expected payload on success, a rejection otherwise.
pub(crate) fn interpret<T>(status: u16, success: bool, text: &str) -> Result<T, ApiError>
where
	T: DeserializeOwned,
{
	if success {
		return serde_json::from_str(text).map_err(|err| InvalidJson::new(text, &err).into());
	}
	let rejection: Rejection = serde_json::from_str(text).map_err(|err| InvalidJson::new(text, &err))?;
	Err(ApiError::Rejected {
		status,
		detail: rejection.explanation(),
	})
}

/// Body of a non-2xx answer. Most endpoints fill `detail`, login may answer with `message`.
/// Validation failures (422) carry a list of `{loc, msg, type}` entries in `detail`.
#[derive(Debug, Default, Deserialize)]
struct Rejection {
	#[serde(default)]
	detail: Value,
	#[serde(default)]
	message: Option<String>,
}

impl Rejection {
	fn explanation(self) -> Option<String> {
		let detail = match self.detail {
			Value::String(text) => Some(text),
			Value::Array(entries) => {
				let messages = entries
					.iter()
					.filter_map(|entry| entry.get("msg").and_then(Value::as_str))
					.join("; ");
				(!messages.is_empty()).then_some(messages)
			}
			_ => None,
		};
		detail.or(self.message)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct InvalidJson(pub String, pub String);
impl InvalidJson {
	fn new(text: &str, err: &serde_json::Error) -> Self {
		Self(text.to_owned(), err.to_string())
	}
}
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
