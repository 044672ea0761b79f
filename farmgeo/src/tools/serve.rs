use anyhow::Result;
use farmgeo::{
	config::Config,
	farm::FarmService,
	server::FarmServer,
	store::{FarmStore, MemoryStore, SqliteStore},
};
use std::{path::PathBuf, sync::Arc};
use tokio::time::{Duration, sleep};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Path to a YAML configuration file for server, CORS, database and geometry settings.
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 0.0.0.0
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 8080
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// SQLite file to store farms in. Without one, farms are kept in memory.
	#[arg(long, value_name = "FILE", display_order = 1)]
	pub database: Option<PathBuf>,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 4)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = if let Some(config_path) = &arguments.config {
		Config::from_path(config_path)?
	} else {
		Config::default()
	};

	config.server.override_optional_ip(&arguments.ip);
	config.server.override_optional_port(&arguments.port);
	config.database.override_optional_path(&arguments.database);

	let store: Arc<dyn FarmStore> = match &config.database.path {
		Some(path) => {
			log::info!("storing farms in {path:?}");
			Arc::new(SqliteStore::open_path(path)?)
		}
		None => {
			log::info!("storing farms in memory");
			Arc::new(MemoryStore::new())
		}
	};

	let service = FarmService::new(store, config.geometry.srid());
	let mut server = FarmServer::from_config(&config, service);
	server.start().await?;

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		loop {
			sleep(Duration::from_secs(60)).await;
		}
	}

	server.stop().await;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use tempfile::tempdir;

	#[test]
	fn in_memory() -> Result<()> {
		run_command(vec![
			"farmgeo",
			"serve",
			"-i",
			"127.0.0.1",
			"-p",
			"65101",
			"--auto-shutdown",
			"200",
		])?;
		Ok(())
	}

	#[test]
	fn with_database() -> Result<()> {
		let dir = tempdir()?;
		let path = dir.path().join("farms.sqlite");
		run_command(vec![
			"farmgeo",
			"serve",
			"-i",
			"127.0.0.1",
			"-p",
			"65102",
			"--database",
			path.to_str().unwrap(),
			"--auto-shutdown",
			"200",
		])?;
		assert!(path.exists());
		Ok(())
	}
}
