//! lettre-backed SMTP transport

use crate::{MailTransport, MailerConfig, NotifierError, SmtpConfig, TransportSecurity};
use cinseal_domain::Notification;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// One SMTP endpoint, one attempt per send
pub struct SmtpTransport {
    label: String,
    sender: Mailbox,
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Build a transport for one endpoint of a mailer configuration
    pub fn from_config(mailer: &MailerConfig, endpoint: &SmtpConfig) -> Result<Self, NotifierError> {
        let sender: Mailbox = mailer
            .sender
            .parse()
            .map_err(|e| NotifierError::InvalidAddress(format!("{}: {e}", mailer.sender)))?;

        let builder = match endpoint.security {
            TransportSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&endpoint.host),
            TransportSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&endpoint.host)
            }
            TransportSecurity::None => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &endpoint.host,
            )),
        }
        .map_err(|e| NotifierError::Config(e.to_string()))?;

        let mut builder = builder
            .port(endpoint.port)
            .timeout(Some(endpoint.timeout()));

        if let Some(password) = &mailer.password {
            builder = builder.credentials(Credentials::new(
                mailer.login().to_string(),
                password.clone(),
            ));
        }

        Ok(Self {
            label: endpoint.label(),
            sender,
            inner: builder.build(),
        })
    }
}

impl MailTransport for SmtpTransport {
    fn label(&self) -> &str {
        &self.label
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        let message = build_message(&self.sender, notification)?;
        let response = self
            .inner
            .send(message)
            .await
            .map_err(|e| NotifierError::Transport(format!("{}: {e}", self.label)))?;
        debug!("{} accepted message: {}", self.label, response.code());
        Ok(())
    }
}

/// Assemble a MIME message: plain-text body plus the optional attachment
pub fn build_message(sender: &Mailbox, notification: &Notification) -> Result<Message, NotifierError> {
    let recipient: Mailbox = notification
        .to
        .parse()
        .map_err(|e| NotifierError::InvalidAddress(format!("{}: {e}", notification.to)))?;

    let builder = Message::builder()
        .from(sender.clone())
        .to(recipient)
        .subject(notification.subject.clone());

    let message = match &notification.attachment {
        None => builder.singlepart(SinglePart::plain(notification.body.clone())),
        Some(attachment) => {
            let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
                NotifierError::InvalidMessage(format!("{}: {e}", attachment.content_type))
            })?;
            builder.multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(notification.body.clone()))
                    .singlepart(
                        Attachment::new(attachment.filename.clone())
                            .body(attachment.bytes.clone(), content_type),
                    ),
            )
        }
    };

    message.map_err(|e| NotifierError::InvalidMessage(e.to_string()))
}
