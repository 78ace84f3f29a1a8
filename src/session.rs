//! Values handed from one pipeline step to the next

use crate::error::{Result, ResumeTailorError};
use crate::output::formatter::ResumeDocument;
use crate::processing::FormatAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the user submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl AnalysisRequest {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Result<Self> {
        let request = Self {
            resume_text: resume_text.into(),
            job_description: job_description.into(),
        };

        if request.resume_text.trim().is_empty() {
            return Err(ResumeTailorError::InvalidInput(
                "Resume contains no extractable text".to_string(),
            ));
        }
        if request.job_description.trim().is_empty() {
            return Err(ResumeTailorError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        Ok(request)
    }
}

/// Model output of the analysis step plus the detected formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub analysis: String,
    pub experience_info: String,
    pub format_analysis: FormatAnalysis,
}

/// Everything the generation step needs; persisted between commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub request: AnalysisRequest,
    pub analysis: ResumeAnalysis,
    pub created_at: DateTime<Utc>,
}

impl AnalysisSession {
    pub fn new(request: AnalysisRequest, analysis: ResumeAnalysis) -> Self {
        Self {
            request,
            analysis,
            created_at: Utc::now(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeTailorError::InvalidInput(format!(
                "Session file does not exist: {}",
                path.display()
            )));
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Final assembled resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub text: String,
    pub experience_level: String,
    pub document: ResumeDocument,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_session() -> AnalysisSession {
        AnalysisSession::new(
            AnalysisRequest::new("John Doe\nEDUCATION\nBA", "Rust developer").unwrap(),
            ResumeAnalysis {
                analysis: "1. SKILLS ALIGNMENT ...".to_string(),
                experience_info: "3 years".to_string(),
                format_analysis: FormatAnalysis::analyze("• item"),
            },
        )
    }

    #[test]
    fn test_request_rejects_blank_inputs() {
        assert!(AnalysisRequest::new("   ", "job").is_err());
        assert!(AnalysisRequest::new("resume", "\n").is_err());
        assert!(AnalysisRequest::new("resume", "job").is_ok());
    }

    #[test]
    fn test_session_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let session = sample_session();
        session.save(&path).unwrap();

        let loaded = AnalysisSession::load(&path).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.analysis.format_analysis.bullet_style, '•');
    }

    #[test]
    fn test_missing_session_file() {
        let result = AnalysisSession::load(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ResumeTailorError::InvalidInput(_))));
    }
}
