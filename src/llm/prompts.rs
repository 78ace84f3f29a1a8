//! Prompt templates for resume analysis and tailored section generation

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid placeholder pattern"));

/// Sections of the tailored resume that are written by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedSection {
    ProfileSummary,
    TechnicalSkills,
    Projects,
}

impl GeneratedSection {
    /// Generation order
    pub const ALL: [GeneratedSection; 3] = [
        GeneratedSection::ProfileSummary,
        GeneratedSection::TechnicalSkills,
        GeneratedSection::Projects,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GeneratedSection::ProfileSummary => "profile_summary",
            GeneratedSection::TechnicalSkills => "technical_skills",
            GeneratedSection::Projects => "projects",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            GeneratedSection::ProfileSummary => "PROFILE SUMMARY",
            GeneratedSection::TechnicalSkills => "TECHNICAL SKILLS",
            GeneratedSection::Projects => "PROJECTS",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub experience: String,
    pub analysis: String,
    pub profile_summary: String,
    pub technical_skills: String,
    pub projects: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            experience: EXPERIENCE_TEMPLATE.to_string(),
            analysis: ANALYSIS_TEMPLATE.to_string(),
            profile_summary: PROFILE_SUMMARY_TEMPLATE.to_string(),
            technical_skills: TECHNICAL_SKILLS_TEMPLATE.to_string(),
            projects: PROJECTS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for the section generation templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionParams {
    pub job_description: String,
    pub experience_level: String,
    pub bullet_style: char,
}

impl PromptTemplates {
    pub fn render_experience(&self, resume_text: &str) -> String {
        fill(&self.experience, &[("resume_text", resume_text)])
    }

    pub fn render_analysis(&self, resume_text: &str, job_description: &str) -> String {
        fill(
            &self.analysis,
            &[("resume_text", resume_text), ("job_description", job_description)],
        )
    }

    pub fn render_section(&self, section: GeneratedSection, params: &SectionParams) -> String {
        let template = match section {
            GeneratedSection::ProfileSummary => &self.profile_summary,
            GeneratedSection::TechnicalSkills => &self.technical_skills,
            GeneratedSection::Projects => &self.projects,
        };

        let bullet = params.bullet_style.to_string();
        fill(
            template,
            &[
                ("experience_level", params.experience_level.as_str()),
                ("job_description", params.job_description.as_str()),
                ("bullet_style", bullet.as_str()),
            ],
        )
    }
}

/// Substitute `{name}` placeholders in a single pass, so braces inside the
/// substituted text are never expanded again. Unknown names are left as is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

const EXPERIENCE_TEMPLATE: &str = r#"
Analyze this resume and extract:
1. Total years of experience
2. Current seniority level
3. Primary technical domain

RESUME:
{resume_text}

Provide only these three data points in a concise format.
"#;

const ANALYSIS_TEMPLATE: &str = r#"
You are an expert resume consultant. Provide a comprehensive analysis:

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Provide:
1. SKILLS ALIGNMENT
   - Matching skills
   - Missing critical skills
   - Suggested skill additions

2. EXPERIENCE ANALYSIS
   - Relevant experience
   - Areas needing enhancement
   - Suggested focus points

3. PROJECT RECOMMENDATIONS
   - Which existing projects to keep (if any)
   - Types of projects needed
   - Suggested project complexities
"#;

const PROFILE_SUMMARY_TEMPLATE: &str = r#"
Create a professional profile summary for a {experience_level}-year experienced professional.
Format using bullet points with '{bullet_style}'.

JOB DESCRIPTION:
{job_description}

Focus on key achievements and skills relevant to the job.
"#;

const TECHNICAL_SKILLS_TEMPLATE: &str = r#"
List technical skills relevant to this job description, grouped by category.
Use bullet point style '{bullet_style}'.

JOB DESCRIPTION:
{job_description}

EXPERIENCE LEVEL: {experience_level} years
"#;

const PROJECTS_TEMPLATE: &str = r#"
Create 3-4 relevant projects matching these job requirements.
Format each project as:

Project Name | Technologies link
o Key achievement/feature
o Technical implementation detail
o Impact or result

JOB DESCRIPTION:
{job_description}

Use appropriate complexity for {experience_level} years of experience.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SectionParams {
        SectionParams {
            job_description: "Senior Rust engineer for payments platform".to_string(),
            experience_level: "7".to_string(),
            bullet_style: '●',
        }
    }

    #[test]
    fn test_analysis_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_analysis("Backend developer at Acme", "Needs Kubernetes");

        assert!(prompt.contains("RESUME:\nBackend developer at Acme"));
        assert!(prompt.contains("JOB DESCRIPTION:\nNeeds Kubernetes"));
        assert!(prompt.contains("1. SKILLS ALIGNMENT"));
        assert!(prompt.contains("3. PROJECT RECOMMENDATIONS"));
    }

    #[test]
    fn test_experience_prompt_has_no_job_description() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_experience("Resume body");

        assert!(prompt.contains("Resume body"));
        assert!(prompt.contains("Total years of experience"));
        assert!(!prompt.contains("JOB DESCRIPTION"));
    }

    #[test]
    fn test_section_prompts() {
        let templates = PromptTemplates::default();

        let summary = templates.render_section(GeneratedSection::ProfileSummary, &params());
        assert!(summary.contains("7-year experienced professional"));
        assert!(summary.contains("bullet points with '●'"));

        let skills = templates.render_section(GeneratedSection::TechnicalSkills, &params());
        assert!(skills.contains("EXPERIENCE LEVEL: 7 years"));
        assert!(skills.contains("Senior Rust engineer for payments platform"));

        let projects = templates.render_section(GeneratedSection::Projects, &params());
        assert!(projects.contains("complexity for 7 years"));
        assert!(!projects.contains('{'));
    }

    #[test]
    fn test_substituted_text_is_not_expanded() {
        let prompt = fill("{a} and {b} and {c}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(prompt, "{b} and B and {c}");
    }
}
