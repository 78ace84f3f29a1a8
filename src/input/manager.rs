//! Input manager for handling different file types

use crate::error::{Result, ResumeTailorError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// Dispatches a resume or job description file to the extractor for its type
#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeTailorError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            ResumeTailorError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeTailorError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text)
    }

    /// Resolve the job description from a file or inline text; exactly one
    /// source must be given and it must not be blank.
    pub async fn job_description(
        &self,
        file: Option<&Path>,
        inline: Option<&str>,
    ) -> Result<String> {
        let text = match (file, inline) {
            (Some(path), None) => {
                if FileType::from_path(path) == Some(FileType::Pdf) {
                    return Err(ResumeTailorError::UnsupportedFormat(
                        "Job description must be a .txt or .md file".to_string(),
                    ));
                }
                self.extract_text(path).await?
            }
            (None, Some(text)) => text.to_string(),
            (Some(_), Some(_)) => {
                return Err(ResumeTailorError::InvalidInput(
                    "Pass either a job description file or inline text, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(ResumeTailorError::InvalidInput(
                    "A job description is required".to_string(),
                ))
            }
        };

        if text.trim().is_empty() {
            return Err(ResumeTailorError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        Ok(text)
    }
}
