use std::net::SocketAddr;

/// Where the server listens and which path accepts WebSocket upgrades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub path: String,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:5000";
    pub const DEFAULT_PATH: &'static str = "/ws";

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            path: Self::DEFAULT_PATH.to_owned(),
        }
    }
}
