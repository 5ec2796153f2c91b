//! Command-line surface.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::dispatcher::search_signals;
use crate::registry::SearchBackend;
use crate::ui::store::Store;

/// pkgsearch - search a package registry from the terminal
#[derive(Debug, Parser)]
#[command(name = "pkgsearch")]
#[command(version)]
#[command(about = "Search a package registry from the terminal", long_about = None)]
pub struct Args {
    /// Registry root URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Path to the config file (default: <config_dir>/pkgsearch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run one search, print the package names and exit
    #[arg(long, value_name = "TERM", allow_hyphen_values = true)]
    pub once: Option<String>,
}

impl Args {
    /// Load the config file and apply CLI overrides on top of it.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(registry) = &self.registry {
            config.registry.base_url = registry.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

/// Outcome of a non-interactive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnceOutcome {
    Found(Vec<String>),
    Failed(String),
}

/// Run one search through a fresh store and report its final state.
pub async fn run_once<B: SearchBackend>(backend: &B, term: &str) -> OnceOutcome {
    let mut store = Store::new();
    for signal in search_signals(backend, term).await {
        store.dispatch(signal);
    }
    match store.select(|s| s.error.clone()) {
        Some(message) => OnceOutcome::Failed(message),
        None => OnceOutcome::Found(store.select(|s| s.data.clone())),
    }
}

/// Write one name per line.
pub fn print_names(out: &mut impl Write, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    out.flush()
}
