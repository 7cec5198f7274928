use url::Url;

/// Local storage key of the teacher login flag.
pub static SESSION_FLAG_KEY: &str = "isTeacherLoggedIn";
/// Name of the optional `<meta>` tag that points the board at a different API host.
pub static API_META_NAME: &str = "activity-board-api";
/// Name of the optional `<meta>` tag holding the console log level.
pub static LOG_META_NAME: &str = "activity-board-log";
static DEFAULT_API_ROOT: &str = "http://localhost:8000/";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	pub api_root: Url,
	pub status_duration_ms: u32,
	pub login_error_duration_ms: u32,
	pub log_level: log::LevelFilter,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			api_root: Url::parse(DEFAULT_API_ROOT).expect("default api root is a valid url"),
			status_duration_ms: 5000,
			login_error_duration_ms: 3000,
			log_level: log::LevelFilter::Info,
		}
	}
}

impl Config {
	/// Resolves the API root from the hosting page.
	pub fn from_document() -> Self {
		let mut config = Self::default();
		let document = gloo_utils::document();
		let meta = |name: &str| {
			document
				.query_selector(&format!("meta[name=\"{name}\"]"))
				.ok()
				.flatten()
				.and_then(|meta| meta.get_attribute("content"))
		};
		if let Some(level) = meta(LOG_META_NAME) {
			match level.parse::<log::LevelFilter>() {
				Ok(level) => config.log_level = level,
				Err(_) => log::warn!(target: "config", "Unknown log level {level:?}"),
			}
		}
		let declared = meta(API_META_NAME);
		let base = document.base_uri().ok().flatten();
		match resolve_api_root(declared.as_deref(), base.as_deref()) {
			Some(root) => config.api_root = root,
			None => log::warn!(target: "config", "No usable api root on page, using {}", config.api_root),
		}
		config
	}
}

/// The declared root wins; otherwise the origin of the page the board was served from.
fn resolve_api_root(declared: Option<&str>, base: Option<&str>) -> Option<Url> {
	let base = base.and_then(|base| Url::parse(base).ok());
	if let Some(declared) = declared {
		let parsed = match &base {
			Some(base) => base.join(declared),
			None => Url::parse(declared),
		};
		match parsed {
			Ok(root) => return Some(with_trailing_slash(root)),
			Err(err) => log::warn!(target: "config", "Ignoring api root {declared:?}: {err}"),
		}
	}
	let mut origin = base?;
	if origin.cannot_be_a_base() {
		return None;
	}
	origin.set_path("/");
	origin.set_query(None);
	origin.set_fragment(None);
	Some(origin)
}

fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url
}
