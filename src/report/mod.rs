//! Structured reports about problems found while loading settings and schema data.
//!
//! Reports are collected in a global store and printed all at once, sorted by severity, when
//! the caller is ready for them.

pub use builder::{err, untidy, warn};
pub use error_loc::ErrorLoc;
pub use errorkey::ErrorKey;
pub use errors::{
    disable_ansi_colors, emit_reports, ignore_key, log, set_minimum_severity, set_output_file,
    take_reports,
};
pub use output_style::OutputStyle;
pub use report_struct::{Confidence, LogReport, PointedMessage, Severity};

mod builder;
mod error_loc;
mod errorkey;
mod errors;
mod output_style;
mod report_struct;
mod writer;
mod writer_json;
