//! Records command implementation.

use crate::cli::RecordsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cinseal_store::SqliteStore;

/// Execute the records command.
pub fn execute_records(args: RecordsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = config.database(args.database.as_deref());

    // Listing must not create an empty database as a side effect
    if !path.exists() {
        return Err(CliError::InvalidInput(format!(
            "Database {} does not exist",
            path.display()
        )));
    }

    let store = SqliteStore::new(path)?;
    println!("{}", formatter.format_records(&store.list_records()?)?);

    Ok(())
}
