use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where farms are persisted.
///
/// Without a `path` the server keeps farms in memory and loses them on exit.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
	/// SQLite file, created on first use.
	#[serde(default)]
	pub path: Option<PathBuf>,
}

impl DatabaseConfig {
	pub fn override_optional_path(&mut self, path: &Option<PathBuf>) {
		if path.is_some() {
			self.path.clone_from(path);
		}
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		if let Some(path) = &self.path
			&& path.is_relative()
		{
			self.path = Some(base.join(path));
		}
	}
}
