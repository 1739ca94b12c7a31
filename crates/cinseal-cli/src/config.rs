//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use cinseal_notifier::MailerConfig;
use cinseal_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database holding the protected files
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Default recipient for `run`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Sender identity and SMTP endpoints
    #[serde(default)]
    pub mail: MailerConfig,

    /// File selection and mail wording
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".cinseal").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::path(),
        }
    }

    /// Load configuration from file, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the mail and pipeline sections.
    pub fn validate(&self) -> Result<()> {
        self.mail.validate()?;
        self.pipeline.validate()?;
        Ok(())
    }

    /// Pick the recipient: explicit argument first, then the configured one.
    pub fn recipient<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        explicit
            .or(self.recipient.as_deref())
            .ok_or_else(|| {
                CliError::InvalidInput(
                    "No recipient. Pass --to or set `recipient` in the config file.".to_string(),
                )
            })
    }

    /// Pick the database: explicit argument first, then the configured one.
    pub fn database<'a>(&'a self, explicit: Option<&'a Path>) -> &'a Path {
        explicit.unwrap_or(&self.database_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            recipient: None,
            mail: MailerConfig::default(),
            pipeline: PipelineConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("files.db")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
