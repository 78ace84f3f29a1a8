//! Contact and section extraction over plain resume text

use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").expect("valid heading pattern"));

/// Contact fields pulled from the top of a resume.
///
/// Every field is `None` when its pattern did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    pub fn fields(&self) -> [(ContactField, Option<&str>); 6] {
        [
            (ContactField::Name, self.name.as_deref()),
            (ContactField::Location, self.location.as_deref()),
            (ContactField::Phone, self.phone.as_deref()),
            (ContactField::Email, self.email.as_deref()),
            (ContactField::LinkedIn, self.linkedin.as_deref()),
            (ContactField::Website, self.website.as_deref()),
        ]
    }

    fn set(&mut self, field: ContactField, value: Option<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Location => &mut self.location,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::LinkedIn => &mut self.linkedin,
            ContactField::Website => &mut self.website,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Location,
    Phone,
    Email,
    LinkedIn,
    Website,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ContactField::Name => "Name",
            ContactField::Location => "Location",
            ContactField::Phone => "Mobile",
            ContactField::Email => "Email",
            ContactField::LinkedIn => "LinkedIn",
            ContactField::Website => "Website",
        };
        write!(f, "{}", label)
    }
}

/// Uppercase heading -> raw block, in document order
pub type ResumeSections = IndexMap<String, String>;

pub struct ResumeParser {
    contact_patterns: Vec<(ContactField, Regex)>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        // Name and location stay on one line; `\s` would let them run across
        // the header block. `$` only sees `\n`, so a CRLF line end is skipped
        // outside the capture.
        let patterns = [
            (ContactField::Name, r"(?m)^([A-Za-z \t]+)\r?$"),
            (
                ContactField::Location,
                r"([A-Za-z \t]+,[ \t]*[A-Za-z \t]+,[ \t]*[A-Za-z \t]+)",
            ),
            (ContactField::Phone, r"Mobile:\s*([+\d-]+)"),
            (ContactField::Email, r"Email:\s*([\w.-]+@[\w.-]+)"),
            (ContactField::LinkedIn, r"LinkedIn:\s*(https?://[\w./]+)"),
            (ContactField::Website, r"Website:\s*(https?://[\w./]+)"),
        ];

        let contact_patterns = patterns
            .into_iter()
            .map(|(field, pattern)| {
                (field, Regex::new(pattern).expect("valid contact pattern"))
            })
            .collect();

        Self { contact_patterns }
    }

    /// Extract contact information using the first match of each pattern
    pub fn extract_contact_info(&self, text: &str) -> ContactInfo {
        let mut contact = ContactInfo::default();

        for (field, pattern) in &self.contact_patterns {
            let value = pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());

            if value.is_none() {
                debug!("No match for contact field: {}", field);
            }
            contact.set(*field, value);
        }

        contact
    }

    /// Bucket lines under the most recent all-uppercase heading.
    ///
    /// Text before the first heading is dropped. A repeated heading replaces
    /// the earlier block but keeps its original position.
    pub fn extract_sections(&self, text: &str) -> ResumeSections {
        let mut sections = ResumeSections::new();
        let mut current_section: Option<String> = None;
        let mut current_content: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            let trimmed = line.trim();

            if is_section_heading(trimmed) {
                if let Some(heading) = current_section.take() {
                    sections.insert(heading, current_content.join("\n"));
                }
                current_section = Some(trimmed.to_string());
                current_content.clear();
            } else if current_section.is_some() {
                current_content.push(line);
            }
        }

        if let Some(heading) = current_section {
            sections.insert(heading, current_content.join("\n"));
        }

        debug!("Detected {} sections", sections.len());
        sections
    }
}

fn is_section_heading(trimmed: &str) -> bool {
    trimmed.chars().count() > 2 && SECTION_HEADING.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe\nNew York, NY, USA\nMobile: 123-456-7890\nEmail: j@d.com\nWORK EXPERIENCE\nDid stuff\nEDUCATION\nBA";

    #[test]
    fn test_email_extraction() {
        let parser = ResumeParser::new();
        let contact = parser.extract_contact_info("Jane Smith\nEmail: a@b.com\n");
        assert_eq!(contact.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_sample_contact_fields() {
        let parser = ResumeParser::new();
        let contact = parser.extract_contact_info(SAMPLE);

        assert_eq!(contact.name.as_deref(), Some("John Doe"));
        assert_eq!(contact.location.as_deref(), Some("New York, NY, USA"));
        assert_eq!(contact.phone.as_deref(), Some("123-456-7890"));
        assert_eq!(contact.email.as_deref(), Some("j@d.com"));
        assert_eq!(contact.linkedin, None);
        assert_eq!(contact.website, None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parser = ResumeParser::new();
        let contact =
            parser.extract_contact_info("John Doe\r\nNew York, NY, USA\r\nEmail: j@d.com\r\n");

        assert_eq!(contact.name.as_deref(), Some("John Doe"));
        assert_eq!(contact.location.as_deref(), Some("New York, NY, USA"));
        assert_eq!(contact.email.as_deref(), Some("j@d.com"));
    }

    #[test]
    fn test_links_extraction() {
        let parser = ResumeParser::new();
        let contact = parser.extract_contact_info(
            "LinkedIn: https://linkedin.com/in/jdoe\nWebsite: http://jdoe.dev/about",
        );

        assert_eq!(contact.linkedin.as_deref(), Some("https://linkedin.com/in/jdoe"));
        assert_eq!(contact.website.as_deref(), Some("http://jdoe.dev/about"));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let parser = ResumeParser::new();
        let contact = parser.extract_contact_info("12345\n!!!");
        assert!(contact.is_empty());
    }

    #[test]
    fn test_sample_sections() {
        let parser = ResumeParser::new();
        let sections = parser.extract_sections(SAMPLE);

        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["WORK EXPERIENCE", "EDUCATION"]);
        assert_eq!(sections["WORK EXPERIENCE"], "Did stuff");
        assert_eq!(sections["EDUCATION"], "BA");
    }

    #[test]
    fn test_no_headings_yields_empty_map() {
        let parser = ResumeParser::new();
        assert!(parser.extract_sections("Plain text\nwith Mixed Case\nBA\nIT").is_empty());
        assert!(parser.extract_sections("").is_empty());
    }

    #[test]
    fn test_repeated_heading_last_wins() {
        let parser = ResumeParser::new();
        let sections = parser.extract_sections("SKILLS\nfirst\nEDUCATION\nBA\nSKILLS\nsecond");

        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SKILLS", "EDUCATION"]);
        assert_eq!(sections["SKILLS"], "second");
    }

    #[test]
    fn test_section_lines_are_kept_verbatim() {
        let parser = ResumeParser::new();
        let sections = parser.extract_sections("  PROJECTS  \n  ● Built a thing\n\nmore");
        assert_eq!(sections["PROJECTS"], "  ● Built a thing\n\nmore");
    }
}
