//! CORS layer built from [`Cors`] config.
//!
//! Supported `allowed_origins` patterns:
//! - `"*"`                     → allow all origins
//! - `"*.example.com"`        → suffix match
//! - `"https://example.com*"` → prefix match
//! - `"/^https://(foo|bar)\.example\.com$/"` → regular expression between slashes
//! - anything else is compared exactly

use crate::config::Cors;
use anyhow::{Context, Result};
use axum::http::{header::HeaderValue, request::Parts};
use regex::Regex;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

enum OriginCheck {
	All,
	Suffix(String),
	Prefix(String),
	Pattern(Regex),
	Exact(String),
}

impl OriginCheck {
	fn parse(pattern: &str) -> Result<Self> {
		Ok(if pattern == "*" {
			OriginCheck::All
		} else if let Some(suffix) = pattern.strip_prefix('*')
			&& !suffix.is_empty()
			&& !suffix.contains('*')
		{
			OriginCheck::Suffix(suffix.to_string())
		} else if let Some(prefix) = pattern.strip_suffix('*')
			&& !prefix.is_empty()
			&& !prefix.contains('*')
		{
			OriginCheck::Prefix(prefix.to_string())
		} else if pattern.len() > 2 && pattern.starts_with('/') && pattern.ends_with('/') {
			let re = Regex::new(&pattern[1..pattern.len() - 1]).with_context(|| format!("invalid CORS origin pattern {pattern}"))?;
			OriginCheck::Pattern(re)
		} else {
			OriginCheck::Exact(pattern.to_string())
		})
	}

	fn matches(&self, origin: &str) -> bool {
		match self {
			OriginCheck::All => true,
			OriginCheck::Suffix(suffix) => origin.ends_with(suffix.as_str()),
			OriginCheck::Prefix(prefix) => origin.starts_with(prefix.as_str()),
			OriginCheck::Pattern(re) => re.is_match(origin),
			OriginCheck::Exact(exact) => origin == exact,
		}
	}
}

/// Build a `CorsLayer` that allows any method and header for the configured origins.
pub fn build_cors_layer(cors: &Cors) -> Result<CorsLayer> {
	let checks = cors
		.allowed_origins
		.iter()
		.map(|pattern| OriginCheck::parse(pattern))
		.collect::<Result<Vec<_>>>()?;

	Ok(CorsLayer::new()
		.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _req: &Parts| {
			let origin = origin.to_str().unwrap_or("");
			checks.iter().any(|check| check.matches(origin))
		}))
		.allow_methods(Any)
		.allow_headers(Any)
		.max_age(Duration::from_secs(cors.max_age_seconds())))
}
