//! Per-file orchestration with failure isolation

use crate::scan::{list_candidates, Candidate};
use crate::{BatchOutcome, BatchReport, FileError, PipelineConfig, PipelineError};
use cinseal_domain::traits::{DocumentProtector, Notifier, RecordStore, TextExtractor};
use cinseal_domain::{BatchId, Cin, ExtractionResult, FileRecord, MailAttachment, Notification};
use cinseal_extractor::IdentifierExtractor;
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract, protect, store and mail every document of a folder
///
/// Files are handled one at a time. A failure in any step skips that file
/// only; the rest of the batch continues.
///
/// # Examples
///
/// ```no_run
/// use cinseal_notifier::{FallbackNotifier, MailerConfig, SmtpTransport};
/// use cinseal_pdf::{PdfProtector, PdfTextExtractor};
/// use cinseal_pipeline::{FolderPipeline, PipelineConfig};
/// use cinseal_store::SqliteStore;
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mail = MailerConfig::default();
/// let notifier = FallbackNotifier::with_stage_policies(
///     SmtpTransport::from_config(&mail, &mail.primary)?,
///     SmtpTransport::from_config(&mail, &mail.fallback)?,
/// );
///
/// let mut pipeline = FolderPipeline::new(
///     PdfTextExtractor::new(),
///     PdfProtector::default(),
///     SqliteStore::new("files.db")?,
///     notifier,
///     PipelineConfig::default(),
/// );
///
/// let report = pipeline.run(Path::new("inbox"), "recipient@example.com").await?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct FolderPipeline<X, P, S, N> {
    text_extractor: X,
    protector: P,
    store: S,
    notifier: N,
    extractor: IdentifierExtractor,
    config: PipelineConfig,
}

impl<X, P, S, N> FolderPipeline<X, P, S, N>
where
    X: TextExtractor,
    X::Error: Display,
    P: DocumentProtector,
    P::Error: Display,
    S: RecordStore,
    S::Error: Display,
    N: Notifier,
    N::Error: Display,
{
    /// Assemble a pipeline from its collaborators
    pub fn new(text_extractor: X, protector: P, store: S, notifier: N, config: PipelineConfig) -> Self {
        Self {
            text_extractor,
            protector,
            store,
            notifier,
            extractor: IdentifierExtractor::new(),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Process every accepted file in `folder`, mailing results to `recipient`
    ///
    /// # Errors
    ///
    /// Only a folder that cannot be listed aborts the run. Every per-file
    /// failure is reported as [`BatchOutcome::Skipped`].
    pub async fn run(&mut self, folder: &Path, recipient: &str) -> Result<BatchReport, PipelineError> {
        let started = Instant::now();
        let candidates = list_candidates(folder, &self.config).await?;
        let mut report = BatchReport::new(BatchId::new());

        info!(
            "Batch {} started: {} file(s) in {}",
            report.batch_id,
            candidates.len(),
            folder.display()
        );

        for candidate in candidates {
            let outcome = match self.process_file(&candidate, recipient, report.batch_id).await {
                Ok(identifier) => {
                    info!(
                        "Processed and sent {} with password: {}",
                        candidate.filename, identifier
                    );
                    BatchOutcome::Succeeded { identifier }
                }
                Err(reason) => {
                    warn!("Skipped {}: {}", candidate.filename, reason);
                    BatchOutcome::Skipped(reason)
                }
            };
            report.record(candidate.filename, outcome);
        }

        report.elapsed = started.elapsed();
        info!(
            "Batch {} finished: {} succeeded, {} skipped",
            report.batch_id,
            report.succeeded(),
            report.skipped()
        );

        Ok(report)
    }

    /// Run every step for one file
    async fn process_file(
        &mut self,
        candidate: &Candidate,
        recipient: &str,
        batch_id: BatchId,
    ) -> Result<Cin, FileError> {
        let filename = candidate.filename.as_str();

        let bytes = tokio::fs::read(&candidate.path)
            .await
            .map_err(|e| FileError::UnreadableDocument(format!("{filename}: {e}")))?;

        let text = self
            .text_extractor
            .extract_text(&bytes)
            .map_err(|e| FileError::UnreadableDocument(format!("{filename}: {e}")))?;

        let identifier = match self.extractor.extract(&text) {
            ExtractionResult::Found(cin) => cin,
            ExtractionResult::NotFound => {
                return Err(FileError::NotFoundIdentifier {
                    filename: filename.to_string(),
                })
            }
            ExtractionResult::Ambiguous(count) => {
                return Err(FileError::AmbiguousIdentifier {
                    filename: filename.to_string(),
                    count,
                })
            }
        };
        debug!("{}: identifier {}", filename, identifier);

        let document = self
            .protector
            .protect(&bytes, &identifier)
            .map_err(|e| FileError::ProtectionError(e.to_string()))?;

        let record = FileRecord::new(filename, document, batch_id);
        let record_id = self
            .store
            .append(&record)
            .map_err(|e| FileError::StoreError(e.to_string()))?;
        debug!("{}: stored as record {}", filename, record_id);

        let template = &self.config.template;
        let notification = Notification::new(
            recipient,
            template.subject(filename),
            template.body(filename, record.password()),
        )
        .with_attachment(MailAttachment::pdf(
            filename,
            record.protected_bytes().to_vec(),
        ));

        self.notifier
            .send(&notification)
            .await
            .map_err(|e| FileError::TransportError(e.to_string()))?;

        Ok(identifier)
    }
}
