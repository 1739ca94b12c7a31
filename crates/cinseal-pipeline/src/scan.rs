//! Folder listing and extraction preview

use crate::{PipelineConfig, PipelineError};
use cinseal_domain::traits::TextExtractor;
use cinseal_domain::{Cin, ExtractionResult};
use cinseal_extractor::IdentifierExtractor;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A directory entry selected for processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Entry name
    pub filename: String,

    /// Full path
    pub path: PathBuf,
}

/// List the entries of `folder` accepted by `config`, sorted by name
///
/// Only an unreadable folder is an error; entries that cannot be inspected
/// are logged and left out.
pub async fn list_candidates(
    folder: &Path,
    config: &PipelineConfig,
) -> Result<Vec<Candidate>, PipelineError> {
    let mut entries = tokio::fs::read_dir(folder)
        .await
        .map_err(|source| PipelineError::FolderUnreadable {
            path: folder.to_path_buf(),
            source,
        })?;

    let mut candidates = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Ignoring non UTF-8 entry {:?}", entry.file_name());
            continue;
        };

        if !config.accepts(&filename) {
            debug!("Ignoring {}", filename);
            continue;
        }

        candidates.push(Candidate {
            filename,
            path: entry.path(),
        });
    }

    candidates.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(candidates)
}

/// What a preview found in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Text was extracted
    Extracted {
        /// Classification of the matches
        result: ExtractionResult,
        /// Every match, in text order
        candidates: Vec<Cin>,
    },

    /// The file could not be read or parsed
    Unreadable(String),
}

/// Preview result for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Entry name
    pub filename: String,

    /// What was found
    pub outcome: ScanOutcome,
}

/// Extract identifiers from every accepted file without protecting, storing
/// or mailing anything
pub async fn scan_folder<X>(
    folder: &Path,
    text_extractor: &X,
    config: &PipelineConfig,
) -> Result<Vec<ScanEntry>, PipelineError>
where
    X: TextExtractor,
    X::Error: Display,
{
    let extractor = IdentifierExtractor::new();

    let mut entries = Vec::new();
    for candidate in list_candidates(folder, config).await? {
        let text = tokio::fs::read(&candidate.path)
            .await
            .map_err(|e| e.to_string())
            .and_then(|bytes| text_extractor.extract_text(&bytes).map_err(|e| e.to_string()));

        let outcome = match text {
            Ok(text) => ScanOutcome::Extracted {
                result: extractor.extract(&text),
                candidates: extractor.candidates(&text),
            },
            Err(reason) => ScanOutcome::Unreadable(reason),
        };

        entries.push(ScanEntry {
            filename: candidate.filename,
            outcome,
        });
    }

    Ok(entries)
}
