#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;

#[cfg(windows)]
pub const BINARY_NAME: &str = "farmgeo.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "farmgeo";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to create a Command for the farmgeo binary.
pub fn farmgeo_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}
