//! End-to-end tailoring flow: analyze, then generate and assemble

use crate::error::Result;
use crate::llm::analyzer::ResumeAnalyzer;
use crate::llm::client::LanguageModel;
use crate::llm::prompts::{GeneratedSection, SectionParams};
use crate::output::formatter::{ResumeBlock, ResumeDocument, ResumeFormatter};
use crate::processing::experience::experience_level_or_default;
use crate::processing::{ContactInfo, ResumeParser, ResumeSections};
use crate::session::{AnalysisRequest, AnalysisSession, TailoredResume};
use log::{info, warn};
use std::collections::HashMap;

/// Original sections carried over unmodified, by heading
pub const WORK_EXPERIENCE: &str = "WORK EXPERIENCE";
pub const EDUCATION: &str = "EDUCATION";

/// Position of each block in the tailored resume
enum Slot {
    Generated(GeneratedSection),
    Original(&'static str),
}

const LAYOUT: [Slot; 5] = [
    Slot::Generated(GeneratedSection::ProfileSummary),
    Slot::Generated(GeneratedSection::TechnicalSkills),
    Slot::Original(WORK_EXPERIENCE),
    Slot::Generated(GeneratedSection::Projects),
    Slot::Original(EDUCATION),
];

pub struct TailorPipeline<M> {
    analyzer: ResumeAnalyzer<M>,
    parser: ResumeParser,
    formatter: ResumeFormatter,
}

impl<M: LanguageModel> TailorPipeline<M> {
    pub fn new(model: M) -> Self {
        Self {
            analyzer: ResumeAnalyzer::new(model),
            parser: ResumeParser::new(),
            formatter: ResumeFormatter::new(),
        }
    }

    /// Step one: model analysis of the submitted resume and job
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisSession> {
        let analysis = self.analyzer.analyze(&request).await?;
        Ok(AnalysisSession::new(request, analysis))
    }

    /// Step two: generate the tailored sections and assemble the resume
    pub async fn generate(&self, session: &AnalysisSession) -> Result<TailoredResume> {
        let resume_text = &session.request.resume_text;
        let contact = self.parser.extract_contact_info(resume_text);
        let sections = self.parser.extract_sections(resume_text);

        let experience_level = experience_level_or_default(&session.analysis.experience_info);
        info!("Using experience level: {} years", experience_level);

        let params = SectionParams {
            job_description: session.request.job_description.clone(),
            experience_level: experience_level.clone(),
            bullet_style: session.analysis.format_analysis.bullet_style,
        };
        let generated = self.analyzer.generate_sections(&params).await?;

        let document = self.assemble(contact, &sections, &generated);
        let text = self.formatter.render_text(&document)?;

        Ok(TailoredResume {
            text,
            experience_level,
            document,
        })
    }
}

impl<M> TailorPipeline<M> {
    pub fn parser(&self) -> &ResumeParser {
        &self.parser
    }

    pub fn formatter(&self) -> &ResumeFormatter {
        &self.formatter
    }

    /// Combine generated content with the original sections in the fixed
    /// layout. Original sections absent from the source are skipped.
    pub fn assemble(
        &self,
        contact: ContactInfo,
        sections: &ResumeSections,
        generated: &HashMap<GeneratedSection, String>,
    ) -> ResumeDocument {
        let mut blocks = Vec::with_capacity(LAYOUT.len());

        for slot in &LAYOUT {
            match slot {
                Slot::Generated(section) => blocks.push(ResumeBlock {
                    heading: section.heading().to_string(),
                    content: generated.get(section).cloned().unwrap_or_default(),
                    original: false,
                }),
                Slot::Original(heading) => match sections.get(*heading) {
                    Some(content) => blocks.push(ResumeBlock {
                        heading: heading.to_string(),
                        content: content.clone(),
                        original: true,
                    }),
                    None => warn!("Source resume has no {} section", heading),
                },
            }
        }

        ResumeDocument { contact, blocks }
    }
}
