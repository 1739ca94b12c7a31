//! The single-connection mail transport seam

use crate::NotifierError;
use cinseal_domain::Notification;
use std::future::Future;

/// One way of handing a notification to a mail server
///
/// A transport makes exactly one delivery attempt per call; retrying is the
/// job of [`DeliveryStrategy`](crate::DeliveryStrategy).
pub trait MailTransport {
    /// Short name used in logs ("primary", "smtp.example.com:587", ...)
    fn label(&self) -> &str;

    /// Attempt delivery once
    fn send(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<(), NotifierError>> + Send;
}
