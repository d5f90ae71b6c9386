//! Ranked report and debug log output.
//!
//! Writes the two product files of a run into an output directory:
//! the ranked route list and the diagnostic trace.

mod error;
mod writer;

pub use error::ReportError;
pub use writer::{ReportConfig, ReportFiles, ReportWriter};
