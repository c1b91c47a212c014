//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// Bind address configuration for the API server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// Address string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
    }
}
