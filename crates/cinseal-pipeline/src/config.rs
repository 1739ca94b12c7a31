//! Configuration for pipeline runs
//!
//! Defines which files are picked up and how notification mails are worded.

use crate::PipelineError;
use serde::{Deserialize, Serialize};

/// Wording of the mail sent for each protected file
///
/// # Examples
///
/// ```
/// use cinseal_pipeline::MailTemplate;
///
/// let template = MailTemplate::default();
/// assert_eq!(template.subject("A123456.pdf"), "Protected PDF: A123456.pdf");
/// assert!(template.body("A123456.pdf", "A123456").contains("Password to open the file: A123456"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailTemplate {
    /// Text placed before the filename in the subject
    /// Default: "Protected PDF: "
    pub subject_prefix: String,

    /// First line of the body
    /// Default: "Dear recipient,"
    pub greeting: String,

    /// Last line of the body
    /// Default: "Best regards"
    pub signoff: String,
}

impl Default for MailTemplate {
    fn default() -> Self {
        Self {
            subject_prefix: "Protected PDF: ".to_string(),
            greeting: "Dear recipient,".to_string(),
            signoff: "Best regards".to_string(),
        }
    }
}

impl MailTemplate {
    /// Subject line for a file
    pub fn subject(&self, filename: &str) -> String {
        format!("{}{}", self.subject_prefix, filename)
    }

    /// Body naming the file and its password
    pub fn body(&self, filename: &str, password: &str) -> String {
        format!(
            "{}\n\n\
             Please find attached the password-protected PDF file: {}\n\n\
             Password to open the file: {}\n\n\
             Simply open the PDF with any PDF reader and enter the password when prompted.\n\n\
             {}",
            self.greeting, filename, password, self.signoff
        )
    }
}

/// Configuration for a [`FolderPipeline`](crate::FolderPipeline)
///
/// # Examples
///
/// ```
/// use cinseal_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.extension, "pdf");
/// assert!(config.accepts("Report.PDF"));
/// assert!(!config.accepts("notes.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// File extension picked up, without the dot, compared ASCII case-insensitively
    /// Default: "pdf"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Mail wording
    #[serde(default)]
    pub template: MailTemplate,
}

fn default_extension() -> String {
    "pdf".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            template: MailTemplate::default(),
        }
    }
}

impl PipelineConfig {
    /// Whether a directory entry name is processed
    pub fn accepts(&self, filename: &str) -> bool {
        let suffix_len = self.extension.len() + 1;
        if filename.len() < suffix_len {
            return false;
        }
        let split = filename.len() - suffix_len;
        if !filename.is_char_boundary(split) {
            return false;
        }
        let suffix = &filename[split..];
        suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(&self.extension)
    }

    /// Check the configuration for values that would make a run meaningless
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.extension.is_empty() || self.extension.contains('.') {
            return Err(PipelineError::Config(format!(
                "extension '{}' must be non-empty and without dots",
                self.extension
            )));
        }
        if self.template.subject_prefix.trim().is_empty() {
            return Err(PipelineError::Config(
                "template.subject_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse from TOML text
    pub fn from_toml(text: &str) -> Result<Self, PipelineError> {
        toml::from_str(text).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Render as TOML text
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        toml::to_string_pretty(self).map_err(|e| PipelineError::Config(e.to_string()))
    }
}
