//! Command-line and environment configuration

use axum_extra::extract::cookie::Key;
use clap::Parser;

use crate::error::AppError;

/// Lobby server - create rooms, join by code, ready up and start
#[derive(Parser, Debug, Clone)]
#[command(name = "lobby_server", version, about)]
pub struct Config {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 80)]
    pub port: u16,

    /// Secret used to sign session cookies (at least 64 bytes).
    /// A random key is generated at startup when unset.
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Buffer size of the room registry command channel
    #[arg(long, default_value_t = 256)]
    pub channel_buffer: usize,
}

impl Config {
    /// Address string passed to the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Key used to sign session cookies
    pub fn session_key(&self) -> Result<Key, AppError> {
        match &self.session_secret {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|e| AppError::SessionKey(e.to_string())),
            None => Ok(Key::generate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config =
            Config::try_parse_from(["lobby_server", "--host", "127.0.0.1", "--port", "8080"])
                .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_host_from_env() {
        std::env::set_var("HOST", "127.0.0.1");
        let config = Config::try_parse_from(["lobby_server", "--port", "8080"]).unwrap();
        std::env::remove_var("HOST");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_session_key_from_secret() {
        let secret = "s".repeat(64);
        let config = Config::try_parse_from(["lobby_server", "--session-secret", &secret]).unwrap();
        assert!(config.session_key().is_ok());
    }

    #[test]
    fn test_session_key_too_short() {
        let config = Config::try_parse_from(["lobby_server", "--session-secret", "short"]).unwrap();
        assert!(matches!(config.session_key(), Err(AppError::SessionKey(_))));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Config::try_parse_from(["lobby_server", "--port", "99999"]).is_err());
    }
}
