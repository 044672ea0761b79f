use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
	/// IP to bind to. Default: 0.0.0.0
	#[serde()]
	pub ip: Option<String>,

	/// TCP port to bind to. Default: 8080
	#[serde()]
	pub port: Option<u16>,
}

impl ServerConfig {
	pub fn override_optional_ip(&mut self, ip: &Option<String>) {
		if ip.is_some() {
			self.ip.clone_from(ip);
		}
	}
	pub fn override_optional_port(&mut self, port: &Option<u16>) {
		if port.is_some() {
			self.port = *port;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn overrides_only_when_set() {
		let mut cfg = ServerConfig {
			ip: Some("127.0.0.1".into()),
			port: Some(8080),
		};
		cfg.override_optional_ip(&None);
		cfg.override_optional_port(&Some(9000));
		assert_eq!(cfg.ip.as_deref(), Some("127.0.0.1"));
		assert_eq!(cfg.port, Some(9000));
	}
}
