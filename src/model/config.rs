use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the game server; `/state` is appended.
    pub url: String,
    /// Per-request timeout. Kept well under the polling interval so slow
    /// fetches cannot pile up behind the ticker.
    pub fetch_timeout_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    /// Observed deployments run at 250 or 1000.
    pub poll_interval_ms: u64,
    pub leaderboard_size: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                url: "http://localhost:8080".into(),
                fetch_timeout_ms: 200,
            },
            display: DisplayConfig {
                poll_interval_ms: 250,
                leaderboard_size: 8,
            },
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        // Create default config file if missing
        let _ = fs::write(path, toml::to_string(&default).unwrap());
        default
    }
}
