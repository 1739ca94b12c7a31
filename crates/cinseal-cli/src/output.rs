//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use cinseal_domain::ExtractionResult;
use cinseal_pipeline::{BatchOutcome, BatchReport, ScanEntry, ScanOutcome};
use cinseal_store::RecordSummary;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a run.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(Self::format_report_quiet(report)),
        }
    }

    fn format_report_json(&self, report: &BatchReport) -> Result<String> {
        let files: Vec<serde_json::Value> = report
            .outcomes
            .iter()
            .map(|o| match &o.outcome {
                BatchOutcome::Succeeded { identifier } => serde_json::json!({
                    "filename": o.filename,
                    "status": "succeeded",
                    "cin": identifier.as_str(),
                }),
                BatchOutcome::Skipped(reason) => serde_json::json!({
                    "filename": o.filename,
                    "status": "skipped",
                    "reason": reason.to_string(),
                }),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "batch_id": report.batch_id.to_string(),
            "succeeded": report.succeeded(),
            "skipped": report.skipped(),
            "elapsed_ms": report.elapsed.as_millis() as u64,
            "files": files,
        }))?)
    }

    fn format_report_table(&self, report: &BatchReport) -> String {
        if report.outcomes.is_empty() {
            return self.colorize("No PDF files found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Status", "Detail"]);

        for outcome in &report.outcomes {
            let (status, detail) = match &outcome.outcome {
                BatchOutcome::Succeeded { identifier } => {
                    (self.colorize("sent", "green"), identifier.to_string())
                }
                BatchOutcome::Skipped(reason) => {
                    (self.colorize("skipped", "yellow"), reason.to_string())
                }
            };
            builder.push_record([outcome.filename.clone(), status, detail]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let totals = format!(
            "{} sent, {} skipped ({} ms)",
            report.succeeded(),
            report.skipped(),
            report.elapsed.as_millis()
        );
        format!("{}\n{}", table, self.info(&totals))
    }

    /// Quiet mode lists only the files that were sent.
    fn format_report_quiet(report: &BatchReport) -> String {
        report
            .outcomes
            .iter()
            .filter(|o| o.outcome.is_success())
            .map(|o| o.filename.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format an extraction preview.
    pub fn format_scan(&self, entries: &[ScanEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|e| match &e.outcome {
                        ScanOutcome::Extracted { result, candidates } => serde_json::json!({
                            "filename": e.filename,
                            "result": describe_result(result),
                            "candidates": candidates.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                        }),
                        ScanOutcome::Unreadable(reason) => serde_json::json!({
                            "filename": e.filename,
                            "result": "unreadable",
                            "error": reason,
                        }),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("No PDF files found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["File", "Result", "Candidates"]);
                for entry in entries {
                    let (result, candidates) = match &entry.outcome {
                        ScanOutcome::Extracted { result, candidates } => {
                            let color = if result.is_found() { "green" } else { "yellow" };
                            (
                                self.colorize(&describe_result(result), color),
                                candidates
                                    .iter()
                                    .map(|c| c.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", "),
                            )
                        }
                        ScanOutcome::Unreadable(reason) => {
                            (self.colorize("unreadable", "red"), reason.clone())
                        }
                    };
                    builder.push_record([entry.filename.clone(), result, candidates]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(entries
                .iter()
                .filter_map(|e| match &e.outcome {
                    ScanOutcome::Extracted {
                        result: ExtractionResult::Found(cin),
                        ..
                    } => Some(format!("{}\t{}", e.filename, cin)),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format stored records.
    pub fn format_records(&self, records: &[RecordSummary]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = records
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.id.value(),
                            "filename": r.filename,
                            "cin": r.cin,
                            "size_bytes": r.size_bytes,
                            "batch_id": r.batch_id.map(|b| b.to_string()),
                            "created_at": r.created_at,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No records found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "File", "CIN", "Size", "Batch"]);
                for record in records {
                    let batch = record
                        .batch_id
                        .map(|b| b.to_string().chars().take(8).collect::<String>())
                        .unwrap_or_else(|| "-".to_string());
                    builder.push_record([
                        record.id.to_string(),
                        record.filename.clone(),
                        record.cin.clone(),
                        format!("{} B", record.size_bytes),
                        batch,
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Short label for an extraction result.
fn describe_result(result: &ExtractionResult) -> String {
    match result {
        ExtractionResult::Found(cin) => format!("found {}", cin),
        ExtractionResult::NotFound => "no CIN".to_string(),
        ExtractionResult::Ambiguous(count) => format!("ambiguous ({} matches)", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinseal_domain::{BatchId, Cin, RecordId};
    use cinseal_pipeline::FileError;

    fn cin(value: &str) -> Cin {
        Cin::parse(value).unwrap()
    }

    fn create_test_report() -> BatchReport {
        let mut report = BatchReport::new(BatchId::new());
        report.record("A123456.pdf", BatchOutcome::Succeeded { identifier: cin("A123456") });
        report.record(
            "bad.pdf",
            BatchOutcome::Skipped(FileError::NotFoundIdentifier {
                filename: "bad.pdf".to_string(),
            }),
        );
        report
    }

    fn create_test_record() -> RecordSummary {
        RecordSummary {
            id: RecordId::from_value(7),
            filename: "A123456.pdf".to_string(),
            cin: "A123456".to_string(),
            size_bytes: 2048,
            batch_id: Some(BatchId::new()),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_report_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert!(output.contains("A123456.pdf"));
        assert!(output.contains("No CIN found in bad.pdf"));
        assert!(output.contains("1 sent, 1 skipped"));
    }

    #[test]
    fn test_report_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["succeeded"], 1);
        assert_eq!(value["files"][0]["cin"], "A123456");
        assert_eq!(value["files"][1]["status"], "skipped");
    }

    #[test]
    fn test_report_quiet_lists_sent_files() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert_eq!(output, "A123456.pdf");
    }

    #[test]
    fn test_empty_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&BatchReport::new(BatchId::new())).unwrap();
        assert!(output.contains("No PDF files found"));
    }

    #[test]
    fn test_scan_formats() {
        let entries = vec![
            ScanEntry {
                filename: "dup.pdf".to_string(),
                outcome: ScanOutcome::Extracted {
                    result: ExtractionResult::Ambiguous(2),
                    candidates: vec![cin("AB12345"), cin("C654321")],
                },
            },
            ScanEntry {
                filename: "ok.pdf".to_string(),
                outcome: ScanOutcome::Extracted {
                    result: ExtractionResult::Found(cin("A123456")),
                    candidates: vec![cin("A123456")],
                },
            },
            ScanEntry {
                filename: "junk.pdf".to_string(),
                outcome: ScanOutcome::Unreadable("not a pdf".to_string()),
            },
        ];

        let table = Formatter::new(OutputFormat::Table, false).format_scan(&entries).unwrap();
        assert!(table.contains("ambiguous (2 matches)"));
        assert!(table.contains("AB12345, C654321"));
        assert!(table.contains("unreadable"));

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_scan(&entries).unwrap();
        assert_eq!(quiet, "ok.pdf\tA123456");

        let json = Formatter::new(OutputFormat::Json, false).format_scan(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[2]["result"], "unreadable");
    }

    #[test]
    fn test_records_formats() {
        let records = vec![create_test_record()];

        let table = Formatter::new(OutputFormat::Table, false).format_records(&records).unwrap();
        assert!(table.contains("CIN"));
        assert!(table.contains("2048 B"));

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_records(&records).unwrap();
        assert_eq!(quiet, "7");

        let empty = Formatter::new(OutputFormat::Table, false).format_records(&[]).unwrap();
        assert!(empty.contains("No records found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
