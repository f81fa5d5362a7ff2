use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::config::{load_config, resolve_settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = load_config()?;
    let settings = resolve_settings(file, cli.server.clone(), cli.timeout_ms);
    tracing::debug!(server = %settings.server, timeout_ms = settings.timeout_ms, "settings resolved");

    commands::handle_runtime_commands(&cli, &settings)
}
