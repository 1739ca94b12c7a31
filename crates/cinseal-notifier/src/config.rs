//! Configuration for mail delivery
//!
//! Defines the SMTP endpoints and credentials. The retry budget of each
//! stage is fixed and not configurable.

use crate::NotifierError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder sender written into fresh configs
pub const PLACEHOLDER_SENDER: &str = "sender@example.com";

/// Attempts made against the fallback endpoint
pub const FALLBACK_MAX_ATTEMPTS: u32 = 3;

/// Pause between fallback attempts
pub const FALLBACK_RETRY_DELAY: Duration = Duration::from_secs(2);

/// How the connection to the SMTP server is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportSecurity {
    /// Implicit TLS from the first byte (usually port 465)
    Tls,

    /// Plaintext upgraded with STARTTLS (usually port 587)
    StartTls,

    /// No encryption; only for local relays and tests
    None,
}

/// Retry budget of one delivery stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,

    /// Pause between consecutive attempts
    pub retry_delay: Duration,
}

impl DeliveryPolicy {
    /// Exactly one attempt
    pub fn single() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }

    /// Up to `max_attempts` attempts with a fixed delay between them
    ///
    /// A budget of zero is treated as one attempt.
    pub fn retrying(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    /// Budget of the primary stage: one attempt
    pub fn primary_stage() -> Self {
        Self::single()
    }

    /// Budget of the fallback stage: three attempts two seconds apart
    pub fn fallback_stage() -> Self {
        Self::retrying(FALLBACK_MAX_ATTEMPTS, FALLBACK_RETRY_DELAY)
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self::single()
    }
}

/// One SMTP endpoint
///
/// # Examples
///
/// ```
/// use cinseal_notifier::{SmtpConfig, TransportSecurity};
///
/// let primary = SmtpConfig::implicit_tls("smtp.gmail.com");
/// assert_eq!(primary.port, 465);
///
/// let fallback = SmtpConfig::starttls("smtp.gmail.com");
/// assert_eq!(fallback.security, TransportSecurity::StartTls);
/// assert_eq!(fallback.port, 587);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Server host name
    pub host: String,

    /// Server port
    pub port: u16,

    /// Connection security
    pub security: TransportSecurity,

    /// Connection and command timeout in seconds
    /// Default: 10
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl SmtpConfig {
    /// Implicit TLS on port 465
    pub fn implicit_tls(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 465,
            security: TransportSecurity::Tls,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// STARTTLS on port 587
    pub fn starttls(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 587,
            security: TransportSecurity::StartTls,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Plaintext relay (e.g. a local test mail server)
    pub fn plaintext(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            security: TransportSecurity::None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Get the timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Short name used in logs
    pub fn label(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self, stage: &str) -> Result<(), NotifierError> {
        if self.host.trim().is_empty() {
            return Err(NotifierError::Config(format!("{stage} host must not be empty")));
        }
        if self.port == 0 {
            return Err(NotifierError::Config(format!("{stage} port must not be 0")));
        }
        if self.timeout_secs == 0 {
            return Err(NotifierError::Config(format!(
                "{stage} timeout_secs must be positive"
            )));
        }
        Ok(())
    }
}

/// Sender identity plus the primary and fallback endpoints
///
/// # Examples
///
/// ```
/// use cinseal_notifier::MailerConfig;
///
/// let config = MailerConfig::default();
/// assert_eq!(config.primary.port, 465);
/// assert_eq!(config.fallback.port, 587);
/// assert!(config.password.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailerConfig {
    /// From address
    pub sender: String,

    /// SMTP login; defaults to the sender address when absent
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP password; usually supplied through the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Endpoint tried first, once
    pub primary: SmtpConfig,

    /// Endpoint tried after the primary failed, up to three times
    pub fallback: SmtpConfig,
}

impl Default for MailerConfig {
    /// Gmail endpoints: implicit TLS on 465, then STARTTLS on 587
    fn default() -> Self {
        Self {
            sender: PLACEHOLDER_SENDER.to_string(),
            username: None,
            password: None,
            primary: SmtpConfig::implicit_tls("smtp.gmail.com"),
            fallback: SmtpConfig::starttls("smtp.gmail.com"),
        }
    }
}

impl MailerConfig {
    /// Unauthenticated plaintext relay on localhost for both stages
    ///
    /// Suitable for development against a local catch-all mail server.
    pub fn local_relay(port: u16) -> Self {
        Self {
            sender: PLACEHOLDER_SENDER.to_string(),
            username: None,
            password: None,
            primary: SmtpConfig::plaintext("localhost", port),
            fallback: SmtpConfig::plaintext("localhost", port),
        }
    }

    /// Login name used for authentication
    pub fn login(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.sender)
    }

    /// Check that the configuration can be used to build transports
    pub fn validate(&self) -> Result<(), NotifierError> {
        if !self.sender.contains('@') {
            return Err(NotifierError::Config(format!(
                "sender '{}' is not a mail address",
                self.sender
            )));
        }
        self.primary.validate("primary")?;
        self.fallback.validate("fallback")?;
        Ok(())
    }

    /// Parse from TOML text
    pub fn from_toml(text: &str) -> Result<Self, NotifierError> {
        toml::from_str(text).map_err(|e| NotifierError::Config(e.to_string()))
    }

    /// Render as TOML text
    pub fn to_toml(&self) -> Result<String, NotifierError> {
        toml::to_string_pretty(self).map_err(|e| NotifierError::Config(e.to_string()))
    }
}
