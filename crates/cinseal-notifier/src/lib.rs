//! Cinseal Notifier Layer
//!
//! Delivers protected documents by mail.
//!
//! # Architecture
//!
//! Delivery is a two-stage strategy:
//!
//! ```text
//! Notification → primary DeliveryStrategy (1 attempt)
//!                  └─ on failure → secondary DeliveryStrategy (3 attempts, 2 s apart)
//! ```
//!
//! Each stage wraps a [`MailTransport`]. The primary is never retried and the
//! secondary is only used after the primary failed; the error of the
//! secondary's final attempt is surfaced.
//!
//! # Transports
//!
//! - [`SmtpTransport`]: lettre-backed SMTP (implicit TLS, STARTTLS or plaintext)
//! - [`MockTransport`]: Scripted transport for testing, records every attempt
//!
//! # Examples
//!
//! ```
//! use cinseal_domain::Notification;
//! use cinseal_domain::traits::Notifier;
//! use cinseal_notifier::{DeliveryPolicy, DeliveryStrategy, FallbackNotifier, MockTransport};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let primary = MockTransport::failing("primary");
//! let secondary = MockTransport::succeeding("secondary");
//!
//! let notifier = FallbackNotifier::new(
//!     DeliveryStrategy::new(primary.clone(), DeliveryPolicy::single()),
//!     DeliveryStrategy::new(secondary.clone(), DeliveryPolicy::retrying(3, Duration::ZERO)),
//! );
//!
//! notifier.send(&Notification::new("to@example.com", "subject", "body")).await.unwrap();
//! assert_eq!(primary.attempts(), 1);
//! assert_eq!(secondary.attempts(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod smtp;
pub mod strategy;
pub mod transport;

use cinseal_domain::Notification;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::{
    DeliveryPolicy, MailerConfig, SmtpConfig, TransportSecurity, FALLBACK_MAX_ATTEMPTS,
    FALLBACK_RETRY_DELAY,
};
pub use smtp::{build_message, SmtpTransport};
pub use strategy::{DeliveryStrategy, FallbackNotifier};
pub use transport::MailTransport;

/// Errors that can occur during mail delivery
#[derive(Error, Debug)]
pub enum NotifierError {
    /// Network, TLS or SMTP protocol failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// A sender or recipient address could not be parsed
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Transport configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Mock transport for deterministic testing
///
/// Outcomes are scripted per attempt; once the script runs out the default
/// outcome applies. Every attempt is counted and every accepted notification
/// is recorded.
///
/// # Examples
///
/// ```
/// use cinseal_notifier::MockTransport;
///
/// // Fails twice, then accepts everything
/// let transport = MockTransport::failing_times("flaky", 2);
/// assert_eq!(transport.attempts(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockTransport {
    label: String,
    default_ok: bool,
    script: Arc<Mutex<VecDeque<bool>>>,
    attempts: Arc<Mutex<usize>>,
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl MockTransport {
    fn with_script(label: impl Into<String>, default_ok: bool, script: VecDeque<bool>) -> Self {
        Self {
            label: label.into(),
            default_ok,
            script: Arc::new(Mutex::new(script)),
            attempts: Arc::new(Mutex::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A transport that accepts every notification
    pub fn succeeding(label: impl Into<String>) -> Self {
        Self::with_script(label, true, VecDeque::new())
    }

    /// A transport that rejects every notification
    pub fn failing(label: impl Into<String>) -> Self {
        Self::with_script(label, false, VecDeque::new())
    }

    /// A transport that rejects the first `failures` attempts, then accepts
    pub fn failing_times(label: impl Into<String>, failures: usize) -> Self {
        Self::with_script(label, true, std::iter::repeat(false).take(failures).collect())
    }

    /// Number of send attempts so far
    pub fn attempts(&self) -> usize {
        *lock(&self.attempts)
    }

    /// Notifications that were accepted
    pub fn sent(&self) -> Vec<Notification> {
        lock(&self.sent).clone()
    }

    /// Reset the attempt counter and the sent log
    pub fn reset(&self) {
        *lock(&self.attempts) = 0;
        lock(&self.sent).clear();
    }

    fn attempt(&self, notification: &Notification) -> Result<(), NotifierError> {
        let attempt = {
            let mut attempts = lock(&self.attempts);
            *attempts += 1;
            *attempts
        };

        let ok = lock(&self.script).pop_front().unwrap_or(self.default_ok);
        if !ok {
            return Err(NotifierError::Transport(format!(
                "{}: mock failure on attempt {}",
                self.label, attempt
            )));
        }

        lock(&self.sent).push(notification.clone());
        Ok(())
    }
}

impl MailTransport for MockTransport {
    fn label(&self) -> &str {
        &self.label
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        self.attempt(notification)
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> Notification {
        Notification::new("to@example.com", "subject", "body")
    }

    #[tokio::test]
    async fn test_mock_transport_succeeding() {
        let transport = MockTransport::succeeding("ok");
        assert!(transport.send(&notification()).await.is_ok());
        assert_eq!(transport.attempts(), 1);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_transport_failing() {
        let transport = MockTransport::failing("down");
        let result = transport.send(&notification()).await;
        assert!(matches!(result, Err(NotifierError::Transport(_))));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_mock_transport_failing_times() {
        let transport = MockTransport::failing_times("flaky", 2);

        assert!(transport.send(&notification()).await.is_err());
        assert!(transport.send(&notification()).await.is_err());
        assert!(transport.send(&notification()).await.is_ok());
        assert_eq!(transport.attempts(), 3);
    }

    #[tokio::test]
    async fn test_mock_transport_clone_shares_counters() {
        let first = MockTransport::succeeding("shared");
        let second = first.clone();

        first.send(&notification()).await.unwrap();

        assert_eq!(second.attempts(), 1);
        second.reset();
        assert_eq!(first.attempts(), 0);
    }
}
