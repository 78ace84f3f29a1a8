//! Resume text analysis: contact/section extraction and format detection

pub mod parser;
pub mod format;
pub mod experience;

pub use format::FormatAnalysis;
pub use parser::{ContactInfo, ResumeParser, ResumeSections};
