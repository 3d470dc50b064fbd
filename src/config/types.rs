use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend (e.g. "http://localhost:8000").
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u32,
    /// Serve the built-in sample collections instead of the network.
    pub offline: bool,
}

/// Presentation settings for the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            offline: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}
