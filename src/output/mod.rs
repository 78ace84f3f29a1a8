//! Output module: resume rendering and console reporting

pub mod formatter;
pub mod report;

pub use formatter::{ResumeDocument, ResumeFormatter};
