//! Rendering of the tailored resume as text, markdown or JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::ContactInfo;
use crate::session::TailoredResume;
use askama::Template;
use serde::{Deserialize, Serialize};

#[derive(Template)]
#[template(
    source = "{{ name }}\n{{ location }}\nMobile: {{ phone }} | Email: {{ email }}\nLinkedIn: {{ linkedin }}\nWebsite: {{ website }}",
    ext = "txt"
)]
struct HeaderTemplate<'a> {
    name: &'a str,
    location: &'a str,
    phone: &'a str,
    email: &'a str,
    linkedin: &'a str,
    website: &'a str,
}

#[derive(Template)]
#[template(source = "{{ heading }}\n{{ content }}", ext = "txt")]
struct SectionTemplate<'a> {
    heading: &'a str,
    content: &'a str,
}

/// One headed block of the output resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeBlock {
    pub heading: String,
    pub content: String,
    /// Copied from the source resume rather than generated
    pub original: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub contact: ContactInfo,
    pub blocks: Vec<ResumeBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingMarkup {
    Plain,
    Markdown,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResumeFormatter;

impl ResumeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Contact header; missing fields render as empty strings
    pub fn render_header(&self, contact: &ContactInfo) -> Result<String> {
        let header = HeaderTemplate {
            name: contact.name.as_deref().unwrap_or(""),
            location: contact.location.as_deref().unwrap_or(""),
            phone: contact.phone.as_deref().unwrap_or(""),
            email: contact.email.as_deref().unwrap_or(""),
            linkedin: contact.linkedin.as_deref().unwrap_or(""),
            website: contact.website.as_deref().unwrap_or(""),
        };
        Ok(header.render()?)
    }

    pub fn format_section(&self, heading: &str, content: &str) -> Result<String> {
        Ok(SectionTemplate { heading, content }.render()?)
    }

    /// Plain-text resume: header then blocks, a blank line apart. Block
    /// content goes in as-is; only the finished document is trimmed.
    pub fn render_text(&self, document: &ResumeDocument) -> Result<String> {
        self.render_with(document, HeadingMarkup::Plain)
    }

    pub fn render_markdown(&self, document: &ResumeDocument) -> Result<String> {
        self.render_with(document, HeadingMarkup::Markdown)
    }

    pub fn render(&self, resume: &TailoredResume, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(resume.text.clone()),
            OutputFormat::Markdown => self.render_markdown(&resume.document),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(resume)?),
        }
    }

    fn render_with(&self, document: &ResumeDocument, markup: HeadingMarkup) -> Result<String> {
        let mut parts = Vec::with_capacity(document.blocks.len() + 1);
        parts.push(self.render_header(&document.contact)?);

        for block in &document.blocks {
            let heading = match markup {
                HeadingMarkup::Plain => block.heading.clone(),
                HeadingMarkup::Markdown => format!("## {}", block.heading),
            };
            parts.push(self.format_section(&heading, &block.content)?);
        }

        Ok(parts.join("\n\n").trim().to_string())
    }
}
