//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the entries API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address a transport front end should bind to.
    pub bind_addr: SocketAddr,
    /// Maximum concurrent connections.
    pub max_connections: usize,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Minimum accepted length of the key and value fields, in characters.
    pub min_field_chars: usize,
    /// Maximum accepted length of the key and value fields, in characters.
    pub max_field_chars: usize,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            max_connections: 1000,
            request_timeout: Duration::from_secs(30),
            min_field_chars: 1,
            max_field_chars: 10,
        }
    }

    /// Sets the maximum concurrent connections.
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the accepted field length range.
    pub fn with_field_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_field_chars = min;
        self.max_field_chars = max;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}
