//! Bounded retry and primary/fallback delivery

use crate::{DeliveryPolicy, MailTransport, NotifierError};
use cinseal_domain::traits::Notifier;
use cinseal_domain::Notification;
use tracing::{debug, info, warn};

/// A transport paired with its retry budget
#[derive(Debug, Clone)]
pub struct DeliveryStrategy<T> {
    transport: T,
    policy: DeliveryPolicy,
}

impl<T: MailTransport + Sync> DeliveryStrategy<T> {
    /// Create a new strategy
    pub fn new(transport: T, policy: DeliveryPolicy) -> Self {
        Self { transport, policy }
    }

    /// The wrapped transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The retry budget
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Attempt delivery up to `max_attempts` times
    ///
    /// Sleeps `retry_delay` between attempts, never after the last one.
    /// Returns the error of the final attempt when every attempt failed.
    pub async fn deliver(&self, notification: &Notification) -> Result<(), NotifierError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.transport.send(notification).await {
                Ok(()) => {
                    debug!(
                        "{} delivered on attempt {}/{}",
                        self.transport.label(),
                        attempt,
                        max_attempts
                    );
                    return Ok(());
                }
                Err(e) if attempt < max_attempts => {
                    warn!(
                        "{} attempt {}/{} failed: {}",
                        self.transport.label(),
                        attempt,
                        max_attempts,
                        e
                    );
                    tokio::time::sleep(self.policy.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Primary stage first, secondary stage only when the primary failed
#[derive(Debug, Clone)]
pub struct FallbackNotifier<P, S> {
    primary: DeliveryStrategy<P>,
    secondary: DeliveryStrategy<S>,
}

impl<P, S> FallbackNotifier<P, S>
where
    P: MailTransport + Sync,
    S: MailTransport + Sync,
{
    /// Create a new notifier
    pub fn new(primary: DeliveryStrategy<P>, secondary: DeliveryStrategy<S>) -> Self {
        Self { primary, secondary }
    }

    /// Primary once, then the secondary up to three times two seconds apart
    pub fn with_stage_policies(primary: P, secondary: S) -> Self {
        Self::new(
            DeliveryStrategy::new(primary, DeliveryPolicy::primary_stage()),
            DeliveryStrategy::new(secondary, DeliveryPolicy::fallback_stage()),
        )
    }

    /// The primary stage
    pub fn primary(&self) -> &DeliveryStrategy<P> {
        &self.primary
    }

    /// The secondary stage
    pub fn secondary(&self) -> &DeliveryStrategy<S> {
        &self.secondary
    }
}

impl<P, S> Notifier for FallbackNotifier<P, S>
where
    P: MailTransport + Sync,
    S: MailTransport + Sync,
{
    type Error = NotifierError;

    async fn send(&self, notification: &Notification) -> Result<(), Self::Error> {
        let primary_error = match self.primary.deliver(notification).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        warn!(
            "Primary transport {} failed ({}), falling back to {}",
            self.primary.transport().label(),
            primary_error,
            self.secondary.transport().label()
        );

        self.secondary.deliver(notification).await?;
        info!(
            "Delivered to {} via fallback {}",
            notification.to,
            self.secondary.transport().label()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;
    use std::time::Duration;

    fn notification() -> Notification {
        Notification::new("to@example.com", "subject", "body")
    }

    fn notifier(
        primary: &MockTransport,
        secondary: &MockTransport,
    ) -> FallbackNotifier<MockTransport, MockTransport> {
        FallbackNotifier::with_stage_policies(primary.clone(), secondary.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_retries_until_success() {
        let transport = MockTransport::failing_times("flaky", 2);
        let strategy =
            DeliveryStrategy::new(transport.clone(), DeliveryPolicy::retrying(3, Duration::from_secs(2)));

        let started = tokio::time::Instant::now();
        strategy.deliver(&notification()).await.unwrap();

        assert_eq!(transport.attempts(), 3);
        assert!(started.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_surfaces_last_error() {
        let transport = MockTransport::failing("down");
        let strategy =
            DeliveryStrategy::new(transport.clone(), DeliveryPolicy::retrying(3, Duration::from_secs(2)));

        let err = strategy.deliver(&notification()).await.unwrap_err();

        assert_eq!(transport.attempts(), 3);
        assert!(err.to_string().contains("attempt 3"));
    }

    #[tokio::test]
    async fn test_single_policy_never_retries() {
        let transport = MockTransport::failing("down");
        let strategy = DeliveryStrategy::new(transport.clone(), DeliveryPolicy::single());

        assert!(strategy.deliver(&notification()).await.is_err());
        assert_eq!(transport.attempts(), 1);
    }

    #[tokio::test]
    async fn test_primary_success_skips_secondary() {
        let primary = MockTransport::succeeding("primary");
        let secondary = MockTransport::succeeding("secondary");

        notifier(&primary, &secondary).send(&notification()).await.unwrap();

        assert_eq!(primary.attempts(), 1);
        assert_eq!(secondary.attempts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_succeeds_on_second_attempt() {
        let primary = MockTransport::failing("primary");
        let secondary = MockTransport::failing_times("secondary", 1);

        notifier(&primary, &secondary).send(&notification()).await.unwrap();

        assert_eq!(primary.attempts(), 1);
        assert_eq!(secondary.attempts(), 2);
        assert_eq!(secondary.sent().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_attempts_fail() {
        let primary = MockTransport::failing("primary");
        let secondary = MockTransport::failing("secondary");

        let err = notifier(&primary, &secondary)
            .send(&notification())
            .await
            .unwrap_err();

        assert_eq!(primary.attempts(), 1);
        assert_eq!(secondary.attempts(), 3);
        assert!(err.to_string().contains("secondary"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_waits_between_attempts() {
        let primary = MockTransport::failing("primary");
        let secondary = MockTransport::failing("secondary");

        let started = tokio::time::Instant::now();
        let _ = notifier(&primary, &secondary).send(&notification()).await;

        assert!(started.elapsed() >= Duration::from_secs(4));
        assert!(started.elapsed() < Duration::from_secs(6));
    }
}
