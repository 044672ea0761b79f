mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Normalize a GeoJSON polygon and print it as a canonical feature
	Normalize(tools::normalize::Subcommand),

	#[clap(alias = "server")]
	/// Serve the farm API via http
	Serve(tools::serve::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Normalize(arguments) => tools::normalize::run(arguments),
		Commands::Serve(arguments) => tools::serve::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["farmgeo"]).unwrap_err().to_string();
		assert!(err.starts_with("Normalizes and stores farm boundary polygons"));
		assert!(err.contains("\nUsage: farmgeo [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["farmgeo", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("farmgeo "));
	}

	#[test]
	fn normalize_subcommand() {
		let output = run_command(vec!["farmgeo", "normalize"]).unwrap_err().to_string();
		assert!(output.starts_with("Normalize a GeoJSON polygon"));
	}
}
