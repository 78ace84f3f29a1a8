//! Console presentation of analysis results and the tailored resume

use crate::error::Result;
use crate::processing::{ContactInfo, ResumeSections};
use crate::session::{AnalysisSession, TailoredResume};
use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::Path;
use std::time::Duration;

pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    pub fn format_analysis(&self, session: &AnalysisSession) -> String {
        let analysis = &session.analysis;
        let format = &analysis.format_analysis;

        let mut out = String::new();
        out.push_str(&self.format_header("Analysis Results"));
        out.push_str(analysis.analysis.trim());
        out.push('\n');

        out.push_str(&self.format_header("Experience Profile"));
        out.push_str(analysis.experience_info.trim());
        out.push('\n');

        out.push_str(&self.format_header("Detected Formatting"));
        out.push_str(&format!("  • Bullet style: {}\n", format.bullet_style));
        out.push_str(&format!("  • Section spacing: {}\n", format.section_spacing));
        out.push_str(&format!("  • Indent: {:?}\n", format.indent_pattern));
        out.push_str(&format!("  • Heading style: {:?}\n", format.heading_style));
        out
    }

    pub fn format_extraction(&self, contact: &ContactInfo, sections: &ResumeSections) -> String {
        let mut out = String::new();
        out.push_str(&self.format_header("Contact Details"));
        for (field, value) in contact.fields() {
            let value = match value {
                Some(v) => v.to_string(),
                None => self.colorize("(not found)", Color::Yellow),
            };
            out.push_str(&format!("  • {}: {}\n", field, value));
        }

        out.push_str(&self.format_header("Sections"));
        if sections.is_empty() {
            out.push_str(&self.colorize("  No uppercase section headings found\n", Color::Yellow));
        }
        for (heading, content) in sections {
            out.push_str(&format!("  • {}: {} characters\n", heading, content.len()));
        }
        out
    }

    pub fn format_tailored(&self, resume: &TailoredResume) -> String {
        let mut out = self.format_header("Enhanced Resume");
        out.push_str(&resume.text);
        out.push('\n');
        out
    }

    pub fn success(&self, message: &str) -> String {
        format!("{} {}", self.colorize("✅", Color::Green), message)
    }
}

/// Spinner shown while waiting on the model
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
