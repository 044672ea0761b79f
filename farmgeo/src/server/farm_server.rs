use super::build_router;
use crate::{
	config::{Config, Cors},
	farm::FarmService,
};
use anyhow::{Context, Result};
use tokio::sync::oneshot::Sender;

pub struct FarmServer {
	ip: String,
	port: u16,
	cors: Cors,
	service: FarmService,
	exit_signal: Option<Sender<()>>,
}

impl FarmServer {
	pub fn new(ip: &str, port: u16, cors: Cors, service: FarmService) -> FarmServer {
		FarmServer {
			ip: ip.to_owned(),
			port,
			cors,
			service,
			exit_signal: None,
		}
	}

	/// Binds to `0.0.0.0:8080` unless the config says otherwise.
	pub fn from_config(config: &Config, service: FarmService) -> FarmServer {
		FarmServer::new(
			config.server.ip.as_deref().unwrap_or("0.0.0.0"),
			config.server.port.unwrap_or(8080),
			config.cors.clone(),
			service,
		)
	}

	/// The bound port. After [`start`](Self::start) with port `0` this is the port
	/// the OS picked.
	#[must_use]
	pub fn port(&self) -> u16 {
		self.port
	}

	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() {
			self.stop().await;
		}

		log::info!("starting server");

		let router = build_router(self.service.clone(), &self.cors)?;

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = tokio::net::TcpListener::bind(&addr)
			.await
			.with_context(|| format!("binding to {addr}"))?;
		self.port = listener.local_addr()?.port();
		eprintln!("server starts listening on {}:{}", self.ip, self.port);

		let (tx, rx) = tokio::sync::oneshot::channel::<()>();

		tokio::spawn(async move {
			let result = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await;
			if let Err(err) = result {
				log::error!("server stopped with error: {err}");
			}
		});

		self.exit_signal = Some(tx);

		Ok(())
	}

	pub async fn stop(&mut self) {
		let Some(exit_signal) = self.exit_signal.take() else {
			return;
		};

		log::info!("stopping server");
		exit_signal.send(()).ok();
	}
}
