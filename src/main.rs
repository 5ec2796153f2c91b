use anyhow::Context;
use clap::Parser;
use pkgsearch::cli::{print_names, run_once, Args, OnceOutcome};
use pkgsearch::logging::init_tracing;
use pkgsearch::registry::RegistryClient;
use pkgsearch::ui::runtime;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let config = args.resolve_config().context("Failed to load configuration")?;
    let client = RegistryClient::new(&config.registry)
        .context("Failed to build the registry client")?;

    tracing::info!(registry = %config.registry.base_url, "pkgsearch starting");

    if let Some(term) = &args.once {
        return match run_once(&client, term).await {
            OnceOutcome::Found(names) => {
                print_names(&mut std::io::stdout().lock(), &names)?;
                Ok(ExitCode::SUCCESS)
            }
            OnceOutcome::Failed(message) => {
                eprintln!("Error: {}", message);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let label = registry_label(&config.registry.base_url);
    runtime::run(Arc::new(client), &config, label)
        .await
        .context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

/// Host part of the registry URL for the header, or the URL itself.
fn registry_label(base_url: &str) -> String {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string())
}
