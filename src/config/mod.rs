mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RegistryConfig, UiConfig, DEFAULT_REGISTRY_URL};
