//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    path: &Path,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => init_config(path, force, formatter),
        ConfigAction::Show => show_config(config),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}

/// Print the effective configuration without secrets.
fn show_config(config: &Config) -> Result<()> {
    let mut redacted = config.clone();
    if redacted.mail.password.is_some() {
        redacted.mail.password = Some("********".to_string());
    }
    print!("{}", redacted.to_toml()?);
    Ok(())
}
