//! Outbound notification module

/// MIME type used for protected PDF attachments
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A file attached to a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    /// Attachment filename shown to the recipient
    pub filename: String,

    /// MIME content type
    pub content_type: String,

    /// Raw attachment bytes
    pub bytes: Vec<u8>,
}

impl MailAttachment {
    /// Create a PDF attachment
    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes,
        }
    }
}

/// A plain-text mail with an optional attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub body: String,

    /// Optional attachment
    pub attachment: Option<MailAttachment>,
}

impl Notification {
    /// Create a notification without an attachment
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            attachment: None,
        }
    }

    /// Attach a file
    pub fn with_attachment(mut self, attachment: MailAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
