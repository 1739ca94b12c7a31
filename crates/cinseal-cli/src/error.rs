//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline error (unreadable folder, invalid pipeline settings)
    #[error(transparent)]
    Pipeline(#[from] cinseal_pipeline::PipelineError),

    /// Record store error
    #[error("Store error: {0}")]
    Store(#[from] cinseal_store::StoreError),

    /// Mail setup error
    #[error("Mail error: {0}")]
    Notifier(#[from] cinseal_notifier::NotifierError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
