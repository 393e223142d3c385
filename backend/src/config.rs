use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("HOST is not a valid IP address: {0}")]
    InvalidHost(String),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
    #[error("static directory {0} does not exist or is not a directory")]
    MissingStaticDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("HOST").ok().as_deref(),
            env::var("PORT").ok().as_deref(),
            env::var("STATIC_DIR").ok().as_deref(),
        )
    }

    pub fn from_values(
        host: Option<&str>,
        port: Option<&str>,
        static_dir: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.to_string()))?;

        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p.to_string()))?,
            None => DEFAULT_PORT,
        };

        let static_dir = PathBuf::from(
            static_dir
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_STATIC_DIR),
        );
        if !static_dir.is_dir() {
            return Err(ConfigError::MissingStaticDir(static_dir));
        }

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_values(None, None, dir.path().to_str()).unwrap();
        assert_eq!(config.addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.static_dir, dir.path());
    }

    #[test]
    fn explicit_host_and_port() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_values(Some("127.0.0.1"), Some("8080"), dir.path().to_str()).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn bad_port_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_values(None, Some("http"), dir.path().to_str()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".into()));
    }

    #[test]
    fn bad_host_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_values(Some("localhost:1"), None, dir.path().to_str()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHost("localhost:1".into()));
    }

    #[test]
    fn missing_static_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dist");
        let err = Config::from_values(None, None, missing.to_str()).unwrap_err();
        assert_eq!(err, ConfigError::MissingStaticDir(missing));
    }

    #[test]
    fn file_is_not_a_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<html></html>").unwrap();
        let err = Config::from_values(None, None, file.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingStaticDir(_)));
    }
}
