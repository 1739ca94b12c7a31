//! Cinseal CLI - Protect PDFs with the CIN they contain and mail them.

use cinseal_cli::commands;
use cinseal_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> cinseal_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Run(args) => commands::execute_run(args, &config, &formatter).await,
        Command::Scan(args) => commands::execute_scan(args, &config, &formatter).await,
        Command::Records(args) => commands::execute_records(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config_path, &config, &formatter),
    }
}
