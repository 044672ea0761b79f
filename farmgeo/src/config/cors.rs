//! CORS policy for the farm API.
//!
//! By default all origins are allowed (`*`). The browser map editor usually runs
//! on a different origin than the API, so restricting this list is the main knob
//! for production deployments.
//!
//! ```yaml
//! cors:
//!   allowed_origins:
//!     - "https://farms.example.org"
//!     - "*.example.net"
//!   max_age_seconds: 86400
//! ```
use serde::Deserialize;

/// - `allowed_origins`: origins, globs or regular expressions. Defaults to `["*"]`.
/// - `max_age_seconds`: how long browsers may cache preflight responses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Cors {
	/// Supports:
	/// - `*` to allow all origins
	/// - Exact origins like `https://example.com`
	/// - Globs at the start of the domain like `*.example.com`
	/// - Globs at the end of the domain like `example.*`
	/// - Regular expressions enclosed in slashes like `/domain\..*$/`
	#[serde(default = "default_allowed_origins")]
	pub allowed_origins: Vec<String>,

	/// Defaults to 86400 (1 day)
	#[serde(default)]
	pub max_age_seconds: Option<u64>,
}

fn default_allowed_origins() -> Vec<String> {
	vec!["*".to_string()]
}

impl Default for Cors {
	fn default() -> Self {
		Self {
			allowed_origins: default_allowed_origins(),
			max_age_seconds: None,
		}
	}
}

impl Cors {
	#[must_use]
	pub fn max_age_seconds(&self) -> u64 {
		self.max_age_seconds.unwrap_or(86400)
	}
}
