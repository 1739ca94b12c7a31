//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cinseal_notifier::{FallbackNotifier, MailerConfig, SmtpTransport};
use cinseal_pdf::{PdfProtector, PdfTextExtractor};
use cinseal_pipeline::FolderPipeline;
use cinseal_store::SqliteStore;
use tracing::debug;

/// Execute the run command.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    config.validate()?;
    let recipient = config.recipient(args.to.as_deref())?;
    let mail = mailer_config(config, args.smtp_password);

    let notifier = build_notifier(&mail)?;
    let database = config.database(args.database.as_deref());
    debug!("Using database {}", database.display());
    let store = SqliteStore::new(database)?;

    let mut pipeline = FolderPipeline::new(
        PdfTextExtractor::new(),
        PdfProtector::default(),
        store,
        notifier,
        config.pipeline.clone(),
    );

    let report = pipeline.run(&args.folder, recipient).await?;
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Mail settings with the command-line password applied.
fn mailer_config(config: &Config, password: Option<String>) -> MailerConfig {
    let mut mail = config.mail.clone();
    if password.is_some() {
        mail.password = password;
    }
    mail
}

/// Primary endpoint once, then the fallback three times.
fn build_notifier(mail: &MailerConfig) -> Result<FallbackNotifier<SmtpTransport, SmtpTransport>> {
    let primary = SmtpTransport::from_config(mail, &mail.primary)?;
    let fallback = SmtpTransport::from_config(mail, &mail.fallback)?;

    Ok(FallbackNotifier::with_stage_policies(primary, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_password_override() {
        let mut config = Config::default();
        config.mail.password = Some("from-file".to_string());

        let mail = mailer_config(&config, None);
        assert_eq!(mail.password.as_deref(), Some("from-file"));

        let mail = mailer_config(&config, Some("from-env".to_string()));
        assert_eq!(mail.password.as_deref(), Some("from-env"));
    }

    #[tokio::test]
    async fn test_builds_notifier_from_defaults() {
        let notifier = build_notifier(&MailerConfig::default()).unwrap();
        assert_eq!(notifier.primary().policy().max_attempts, 1);
        assert_eq!(notifier.secondary().policy().max_attempts, 3);
    }

    #[tokio::test]
    async fn test_partial_fallback_section_keeps_retry_budget() {
        let mail = MailerConfig::from_toml(
            r#"
            sender = "office@example.com"

            [primary]
            host = "mail.example.com"
            port = 465
            security = "tls"
            max_attempts = 4
            retry_delay_secs = 1

            [fallback]
            host = "mail.example.com"
            port = 587
            security = "starttls"
            "#,
        )
        .unwrap();
        mail.validate().unwrap();

        let notifier = build_notifier(&mail).unwrap();
        assert_eq!(notifier.primary().policy().max_attempts, 1);
        assert_eq!(notifier.secondary().policy().max_attempts, 3);
        assert_eq!(notifier.secondary().policy().retry_delay, Duration::from_secs(2));
    }
}
