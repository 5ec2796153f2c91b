use serde::Deserialize;

/// Registry used when no config file or CLI flag overrides it.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where searches are sent and how the HTTP client is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryConfig {
    /// Registry root (e.g., "https://registry.npmjs.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_user_agent() -> String {
    format!("pkgsearch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
