//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cinseal_pdf::PdfTextExtractor;
use cinseal_pipeline::scan_folder;

/// Execute the scan command.
pub async fn execute_scan(args: ScanArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    config.pipeline.validate()?;

    let entries = scan_folder(&args.folder, &PdfTextExtractor::new(), &config.pipeline).await?;
    println!("{}", formatter.format_scan(&entries)?);

    Ok(())
}
