//! Connection configuration

use serde::{Deserialize, Serialize};

/// Default telnet port; 30001 is the read-only variant
pub const DEFAULT_PORT: u16 = 30000;
/// Default login user
pub const DEFAULT_USER: &str = "administrator";
/// Default login password
pub const DEFAULT_PASSWORD: &str = "admin";

/// Console connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Console host address
    pub host: String,
    /// Telnet port
    pub port: u16,
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Config for a host with default port and credentials
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the login credentials
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }
}
