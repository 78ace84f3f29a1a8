//! Formatting conventions detected in the source resume

use serde::{Deserialize, Serialize};

pub const SECTION_SPACING: usize = 2;
pub const INDENT_PATTERN: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingStyle {
    Uppercase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatAnalysis {
    pub bullet_style: char,
    pub section_spacing: usize,
    pub indent_pattern: String,
    pub heading_style: HeadingStyle,
}

impl FormatAnalysis {
    /// Derive the formatting profile of a resume. Only the bullet glyph
    /// depends on the text.
    pub fn analyze(resume_text: &str) -> Self {
        Self {
            bullet_style: detect_bullet_style(resume_text),
            section_spacing: SECTION_SPACING,
            indent_pattern: INDENT_PATTERN.to_string(),
            heading_style: HeadingStyle::Uppercase,
        }
    }
}

pub fn detect_bullet_style(text: &str) -> char {
    if text.contains('●') {
        '●'
    } else if text.contains('•') {
        '•'
    } else {
        '-'
    }
}
