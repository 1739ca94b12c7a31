//! Command implementations.

pub mod config;
pub mod records;
pub mod run;
pub mod scan;

pub use self::config::execute_config;
pub use self::records::execute_records;
pub use self::run::execute_run;
pub use self::scan::execute_scan;
