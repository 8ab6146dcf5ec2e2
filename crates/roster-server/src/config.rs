use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "users.db";

/// Process configuration, read once from the environment at startup.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let db_path = std::env::var("ROSTER_DB_PATH")
            .unwrap_or_else(|_| DEFAULT_DB_PATH.into())
            .into();

        Ok(Self { port, db_path })
    }

    /// All interfaces, so the service is reachable from outside a container.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_all_interfaces() {
        let config = Config {
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.into(),
        };
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:5000");
    }
}
