use std::env;

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3333";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: "3333")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let ip = env::var("SERVICE_IP").unwrap_or(defaults.ip);
        let port = env::var("SERVICE_PORT").unwrap_or(defaults.port);

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
