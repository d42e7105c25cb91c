use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Dictionaries
    pub dictionaries_dir: Option<PathBuf>,
    pub strict_dictionaries: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Dictionaries - embedded copies are used when no directory is set
            dictionaries_dir: std::env::var("DICTIONARIES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            strict_dictionaries: std::env::var("STRICT_DICTIONARIES")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
        })
    }

    /// Socket address the HTTP service binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["HOST", "PORT", "DICTIONARIES_DIR", "STRICT_DICTIONARIES"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.dictionaries_dir.is_none());
        assert!(!config.strict_dictionaries);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("DICTIONARIES_DIR", "/srv/site/dictionaries");
        std::env::set_var("STRICT_DICTIONARIES", "TRUE");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.dictionaries_dir,
            Some(PathBuf::from("/srv/site/dictionaries"))
        );
        assert!(config.strict_dictionaries);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_falls_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("DICTIONARIES_DIR", "  ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert!(config.dictionaries_dir.is_none());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dictionaries_dir: None,
            strict_dictionaries: false,
        };
        assert_eq!(config.bind_addr().unwrap().port(), 8080);

        let bad = Config {
            host: "not a host".to_string(),
            ..config
        };
        assert!(bad.bind_addr().is_err());
    }
}
