//! Integration tests for resume and job description input handling

use resume_tailor::input::text_extractor::PdfExtractor;
use resume_tailor::input::InputManager;
use resume_tailor::processing::ResumeParser;
use resume_tailor::ResumeTailorError;
use std::path::Path;

/// Single-page PDF with one Helvetica text line per entry, 14pt apart
fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 12 Tf\n14 TL\n72 720 Td\n");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            content.push_str("T*\n");
        }
        content.push_str(&format!("({}) Tj\n", line));
    }
    content.push_str("ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_start = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    ));
    pdf.into_bytes()
}

const SAMPLE_LINES: [&str; 8] = [
    "John Doe",
    "New York, NY, USA",
    "Mobile: 123-456-7890",
    "Email: j@d.com",
    "WORK EXPERIENCE",
    "Did stuff",
    "EDUCATION",
    "BA",
];

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("WORK EXPERIENCE"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeTailorError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeTailorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_corrupt_pdf_reports_extraction_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, b"this is not a pdf document").unwrap();

    let manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeTailorError::PdfExtraction(_))));
}

#[test]
fn test_pdf_text_extraction_from_bytes() {
    let text = PdfExtractor.extract_bytes(&single_page_pdf(&SAMPLE_LINES)).unwrap();

    assert_eq!(
        text,
        "\n\nJohn Doe\nNew York, NY, USA\nMobile: 123-456-7890\nEmail: j@d.com\n\
         WORK EXPERIENCE\nDid stuff\nEDUCATION\nBA"
    );
}

#[tokio::test]
async fn test_pdf_resume_contact_and_sections() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, single_page_pdf(&SAMPLE_LINES)).unwrap();

    let text = InputManager::new().extract_text(&path).await.unwrap();

    let parser = ResumeParser::new();
    let contact = parser.extract_contact_info(&text);
    assert_eq!(contact.name.as_deref(), Some("John Doe"));
    assert_eq!(contact.location.as_deref(), Some("New York, NY, USA"));
    assert_eq!(contact.phone.as_deref(), Some("123-456-7890"));
    assert_eq!(contact.email.as_deref(), Some("j@d.com"));

    let sections = parser.extract_sections(&text);
    let entries: Vec<(&str, &str)> = sections
        .iter()
        .map(|(heading, block)| (heading.as_str(), block.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![("WORK EXPERIENCE", "Did stuff"), ("EDUCATION", "BA")]
    );
}

#[tokio::test]
async fn test_job_description_sources() {
    let manager = InputManager::new();

    let from_file = manager
        .job_description(Some(Path::new("tests/fixtures/job_description.md")), None)
        .await
        .unwrap();
    assert!(from_file.contains("Senior Backend Engineer"));
    assert!(from_file.contains("Rust & PostgreSQL"));

    let inline = manager
        .job_description(None, Some("Platform engineer, Go and Kafka"))
        .await
        .unwrap();
    assert_eq!(inline, "Platform engineer, Go and Kafka");
}

#[tokio::test]
async fn test_job_description_must_not_be_empty() {
    let manager = InputManager::new();

    let empty_file = manager
        .job_description(Some(Path::new("tests/fixtures/empty_job.txt")), None)
        .await;
    assert!(matches!(empty_file, Err(ResumeTailorError::InvalidInput(_))));

    let missing = manager.job_description(None, None).await;
    assert!(matches!(missing, Err(ResumeTailorError::InvalidInput(_))));
}
