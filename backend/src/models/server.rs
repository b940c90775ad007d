//! Static server topology advertised to the proxy.

use serde::Serialize;

/// A single server in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub port: u16,
}

impl ServerInfo {
    pub fn new(name: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            port,
        }
    }
}

/// Proxy plus the hubs it should register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerList {
    pub proxy: ServerInfo,
    pub hubs: Vec<ServerInfo>,
}

impl ServerList {
    pub fn topology() -> Self {
        Self {
            proxy: ServerInfo::new("Proxy", 25577),
            hubs: vec![ServerInfo::new("Hub1", 25565)],
        }
    }
}
