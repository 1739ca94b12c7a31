//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cinseal - Password-protect PDFs with the CIN they contain and mail them.
#[derive(Debug, Parser)]
#[command(name = "cinseal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (filenames and identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Protect, store and mail every PDF in a folder
    Run(RunArgs),

    /// Show which CIN each PDF in a folder would be protected with
    Scan(ScanArgs),

    /// List stored records
    Records(RecordsArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Folder containing the PDF files
    pub folder: PathBuf,

    /// Recipient address (overrides the configured recipient)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Database file (overrides the configured path)
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// SMTP password
    #[arg(long, env = "CINSEAL_SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Folder containing the PDF files
    pub folder: PathBuf,
}

/// Arguments for the records command.
#[derive(Debug, Parser)]
pub struct RecordsArgs {
    /// Database file (overrides the configured path)
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command() {
        let cli = Cli::parse_from(["cinseal", "run", "inbox", "--to", "someone@example.com"]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.folder, PathBuf::from("inbox"));
                assert_eq!(args.to.as_deref(), Some("someone@example.com"));
                assert!(args.database.is_none());
            }
            other => panic!("Expected Run command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cinseal", "scan", "inbox", "--format", "json", "-vv", "--no-color"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Scan(_)));
    }

    #[test]
    fn test_records_database_override() {
        let cli = Cli::parse_from(["cinseal", "records", "--database", "/tmp/x.db"]);
        match cli.command {
            Command::Records(args) => assert_eq!(args.database, Some(PathBuf::from("/tmp/x.db"))),
            other => panic!("Expected Records command, got {other:?}"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["cinseal", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            other => panic!("Expected Config Init command, got {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["cinseal"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
