//! Configuration module for the sandbox backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Peer endpoint notified when the proxy reports ready.
pub const DEFAULT_PEER_URL: &str = "http://127.0.0.1:5712/servers/updateservers";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret required on every request (auth disabled when absent)
    pub api_key: Option<String>,
    /// Path to the JSON player file
    pub players_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// URL of the peer service receiving the ready signal
    pub peer_url: String,
    /// Shared secret sent to the peer service
    pub peer_api_key: String,
    /// Reject rank updates outside the known rank set
    pub strict_ranks: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_key = env::var("SANDBOX_API_KEY").ok().filter(|k| !k.is_empty());

        let players_path = env::var("SANDBOX_PLAYERS_PATH")
            .unwrap_or_else(|_| "./players.json".to_string())
            .into();

        let bind_addr_raw =
            env::var("SANDBOX_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5600".to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|e| format!("Invalid SANDBOX_BIND_ADDR {:?}: {}", bind_addr_raw, e))?;

        let peer_url = env::var("SANDBOX_PEER_URL").unwrap_or_else(|_| DEFAULT_PEER_URL.to_string());

        let peer_api_key = env::var("SANDBOX_PEER_API_KEY")
            .ok()
            .or_else(|| api_key.clone())
            .unwrap_or_default();

        let strict_ranks = env::var("SANDBOX_STRICT_RANKS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let log_level = env::var("SANDBOX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api_key,
            players_path,
            bind_addr,
            peer_url,
            peer_api_key,
            strict_ranks,
            log_level,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
