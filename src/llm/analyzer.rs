//! Model-backed resume analysis and section generation

use crate::error::Result;
use crate::llm::client::LanguageModel;
use crate::llm::prompts::{GeneratedSection, PromptTemplates, SectionParams};
use crate::processing::FormatAnalysis;
use crate::session::{AnalysisRequest, ResumeAnalysis};
use log::info;
use std::collections::HashMap;

pub struct ResumeAnalyzer<M> {
    model: M,
    prompt_templates: PromptTemplates,
}

impl<M: LanguageModel> ResumeAnalyzer<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            prompt_templates: PromptTemplates::default(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Experience extraction over the resume alone, then the comprehensive
    /// resume-vs-job analysis. Both outputs are kept verbatim.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<ResumeAnalysis> {
        info!("Extracting experience profile");
        let experience_prompt = self.prompt_templates.render_experience(&request.resume_text);
        let experience_info = self.model.generate(&experience_prompt).await?;

        let format_analysis = FormatAnalysis::analyze(&request.resume_text);

        info!("Running resume analysis against job description");
        let analysis_prompt = self
            .prompt_templates
            .render_analysis(&request.resume_text, &request.job_description);
        let analysis = self.model.generate(&analysis_prompt).await?;

        Ok(ResumeAnalysis {
            analysis,
            experience_info,
            format_analysis,
        })
    }

    pub async fn generate_section(
        &self,
        section: GeneratedSection,
        params: &SectionParams,
    ) -> Result<String> {
        info!("Generating section: {}", section.key());
        let prompt = self.prompt_templates.render_section(section, params);
        self.model.generate(&prompt).await
    }

    /// Generate every model-written section in order
    pub async fn generate_sections(
        &self,
        params: &SectionParams,
    ) -> Result<HashMap<GeneratedSection, String>> {
        let mut sections = HashMap::new();
        for section in GeneratedSection::ALL {
            let content = self.generate_section(section, params).await?;
            sections.insert(section, content);
        }
        Ok(sections)
    }
}
