//! Export of the collected splash details.

mod csv;

pub use self::csv::{export_csv, report_file_name, report_path, write_report};
