use super::{Cors, DatabaseConfig, GeometryConfig, ServerConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// HTTP server configuration
	#[serde(default)]
	pub server: ServerConfig,

	/// Cross-Origin Resource Sharing (CORS) settings
	#[serde(default)]
	pub cors: Cors,

	/// Farm storage
	#[serde(default)]
	pub database: DatabaseConfig,

	/// Polygon settings
	#[serde(default)]
	pub geometry: GeometryConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parse from a file path. Relative paths inside the file are resolved
	/// against the directory containing it.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		let mut cfg = Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))?;

		if let Some(base) = path.parent() {
			cfg.resolve_paths(base);
		}
		Ok(cfg)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		self.database.resolve_paths(base);
	}
}
