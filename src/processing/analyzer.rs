//! Resume parsing pipeline: decoding followed by every extractor, merged
//! into one profile

use crate::config::{Config, ParsingConfig};
use crate::error::Result;
use crate::input::manager::{DecodedDocument, InputManager};
use crate::processing::profile::{ParseOutcome, ParsedProfile};
use crate::processing::sections::{FieldThresholds, SectionSegmenter};
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::summary::SummaryExtractor;
use crate::processing::text_processor::{normalize_lines, TextProcessor};
use log::info;
use std::time::Instant;

/// Holds the compiled extractors. Immutable after construction, so one
/// parser can serve any number of threads.
pub struct ResumeParser {
    text_processor: TextProcessor,
    skill_matcher: SkillMatcher,
    segmenter: SectionSegmenter,
    summary_extractor: SummaryExtractor,
}

impl ResumeParser {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        let parsing: &ParsingConfig = &config.parsing;

        Ok(Self {
            text_processor: TextProcessor::with_name_scan_lines(parsing.name_scan_lines),
            skill_matcher: SkillMatcher::with_custom_skills(parsing.extra_skills.clone())?,
            segmenter: SectionSegmenter::new(FieldThresholds::from(parsing)),
            summary_extractor: SummaryExtractor::new(
                parsing.summary_max_lines,
                parsing.summary_min_chars,
            ),
        })
    }

    /// Decode a document and extract its profile.
    pub fn parse(&self, bytes: &[u8], declared_mime: &str, file_name: &str) -> Result<ParseOutcome> {
        let start = Instant::now();

        let outcome = match InputManager::decode(bytes, declared_mime, file_name)? {
            DecodedDocument::Text(text) => ParseOutcome::parsed(self.extract_profile(&text)),
            DecodedDocument::RequiresOcr => ParseOutcome::requires_ocr(),
        };

        info!(
            "Parsed '{}' ({} bytes) in {} ms",
            file_name,
            bytes.len(),
            start.elapsed().as_millis()
        );
        Ok(outcome)
    }

    /// Run every extractor over already decoded text. Never fails: fields
    /// without a match stay absent or empty.
    pub fn extract_profile(&self, text: &str) -> ParsedProfile {
        let lines = normalize_lines(text);

        let contact = self.text_processor.extract_contact(text, &lines);
        let skills = self.skill_matcher.find_skills(text);
        let sections = self.segmenter.assemble(&lines);
        let summary = self.summary_extractor.extract(&lines);

        ParsedProfile {
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
            linked_in: contact.linked_in,
            summary,
            skills,
            work_experience: sections.work_experience,
            education: sections.education,
        }
    }

    pub fn skill_matcher(&self) -> &SkillMatcher {
        &self.skill_matcher
    }
}

/// Parse one uploaded resume with the default configuration.
pub fn parse_resume(bytes: &[u8], declared_mime: &str, file_name: &str) -> Result<ParseOutcome> {
    ResumeParser::new()?.parse(bytes, declared_mime, file_name)
}
