//! Section segmentation and experience/education block assembly
//!
//! Lines are classified in a single forward pass. A heading switches the
//! current section; inside a section, a date line opens a new block and the
//! following lines fill that block's fields in a fixed order. Assignment is
//! greedy and never backtracks: a resume listing the employer before the job
//! title gets the two swapped.

use crate::config::ParsingConfig;
use crate::processing::profile::{EducationEntry, ExperienceEntry};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static EXPERIENCE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[^\p{L}]*(?:exp[ée]riences?(?:\s+professionnelles?)?|professional\s+experience|work\s+experience|work\s+history|employment(?:\s+history)?|parcours(?:\s+professionnel)?|career(?:\s+history)?)(?:\s*(?:&|/|\b(?:et|and)\b)\s*\p{L}[^:]*?)?\s*:?\s*$",
    )
    .expect("Invalid experience heading regex")
});

static EDUCATION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[^\p{L}]*(?:formations?(?:\s+acad[ée]miques?)?|[ée]ducation|[ée]tudes|dipl[ôo]mes?(?:\s+et\s+formations?)?|academic\s+background)(?:\s*(?:&|/|\b(?:et|and)\b)\s*\p{L}[^:]*?)?\s*:?\s*$",
    )
    .expect("Invalid education heading regex")
});

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{4})\s*[-–—]\s*(\d{4}\b|pr[ée]sent\b|actuel(?:lement)?\b|aujourd['’]hui)")
        .expect("Invalid date range regex")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("Invalid year regex"));

static DEGREE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.+?\s(?:en|in)\s+(.+)$").expect("Invalid degree field regex")
});

/// Longest line, in words, still read as a heading.
const MAX_HEADING_WORDS: usize = 6;

/// Written in place of an end year for positions still held.
pub const ONGOING_END_DATE: &str = "Présent";

/// Which block kind the segmenter is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Experience,
    Education,
}

/// Minimum lengths, in graphemes, a line must exceed to fill a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldThresholds {
    pub position: usize,
    pub company: usize,
    pub description: usize,
    pub degree: usize,
    pub institution: usize,
}

impl Default for FieldThresholds {
    fn default() -> Self {
        Self::from(&ParsingConfig::default())
    }
}

impl From<&ParsingConfig> for FieldThresholds {
    fn from(config: &ParsingConfig) -> Self {
        Self {
            position: config.position_min_chars,
            company: config.company_min_chars,
            description: config.description_min_chars,
            degree: config.degree_min_chars,
            institution: config.institution_min_chars,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExperienceAccumulator {
    start_date: String,
    end_date: String,
    position: Option<String>,
    company: Option<String>,
    description: Option<String>,
}

impl ExperienceAccumulator {
    fn open(start_date: &str, end_token: &str) -> Self {
        let end_date = if end_token.chars().all(|c| c.is_ascii_digit()) {
            end_token.to_string()
        } else {
            ONGOING_END_DATE.to_string()
        };

        Self {
            start_date: start_date.to_string(),
            end_date,
            ..Default::default()
        }
    }

    /// Fill the first empty field whose length gate the line passes.
    fn fill(&mut self, line: &str, thresholds: &FieldThresholds) {
        let len = grapheme_len(line);
        if self.position.is_none() && len > thresholds.position {
            self.position = Some(line.to_string());
        } else if self.company.is_none() && len > thresholds.company {
            self.company = Some(line.to_string());
        } else if self.description.is_none() && len > thresholds.description {
            self.description = Some(line.to_string());
        }
    }

    /// A block that never got a position is discarded.
    fn into_entry(self) -> Option<ExperienceEntry> {
        let position = self.position?;
        Some(ExperienceEntry {
            company: self.company.unwrap_or_default(),
            position,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EducationAccumulator {
    graduation_year: String,
    degree: Option<String>,
    institution: Option<String>,
}

impl EducationAccumulator {
    fn open(graduation_year: &str) -> Self {
        Self {
            graduation_year: graduation_year.to_string(),
            ..Default::default()
        }
    }

    fn fill(&mut self, line: &str, thresholds: &FieldThresholds) {
        let len = grapheme_len(line);
        if self.degree.is_none() && len > thresholds.degree {
            self.degree = Some(line.to_string());
        } else if self.institution.is_none() && len > thresholds.institution {
            self.institution = Some(line.to_string());
        }
    }

    fn into_entry(self) -> Option<EducationEntry> {
        let degree = self.degree?;
        let field = DEGREE_FIELD
            .captures(&degree)
            .map(|caps| caps[1].trim().to_string());
        Some(EducationEntry {
            institution: self.institution.unwrap_or_default(),
            degree,
            field,
            graduation_year: self.graduation_year,
        })
    }
}

/// Work history and education assembled from a resume's lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledSections {
    pub work_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

/// State carried across lines: the current section plus at most one open
/// block of each kind.
#[derive(Debug, Default)]
struct Assembly {
    section: Section,
    experience: Option<ExperienceAccumulator>,
    education: Option<EducationAccumulator>,
    output: AssembledSections,
}

impl Assembly {
    fn feed(&mut self, line: &str, thresholds: &FieldThresholds) {
        if let Some(section) = SectionSegmenter::heading_of(line) {
            self.section = section;
            return;
        }

        match self.section {
            Section::Experience => {
                if let Some(caps) = DATE_RANGE.captures(line) {
                    self.flush_experience();
                    self.experience = Some(ExperienceAccumulator::open(&caps[1], &caps[2]));
                } else if let Some(block) = self.experience.as_mut() {
                    block.fill(line, thresholds);
                }
            }
            Section::Education => {
                // A range is a study period, not a graduation year.
                if DATE_RANGE.is_match(line) {
                    debug!("Skipping date range in education: {}", line);
                } else if let Some(caps) = YEAR.captures(line) {
                    self.flush_education();
                    self.education = Some(EducationAccumulator::open(&caps[1]));
                } else if let Some(block) = self.education.as_mut() {
                    block.fill(line, thresholds);
                }
            }
            Section::None => {}
        }
    }

    fn flush_experience(&mut self) {
        if let Some(block) = self.experience.take() {
            match block.into_entry() {
                Some(entry) => self.output.work_experience.push(entry),
                None => debug!("Discarding experience block without a position"),
            }
        }
    }

    fn flush_education(&mut self) {
        if let Some(block) = self.education.take() {
            match block.into_entry() {
                Some(entry) => self.output.education.push(entry),
                None => debug!("Discarding education block without a degree"),
            }
        }
    }

    fn finish(mut self) -> AssembledSections {
        self.flush_experience();
        self.flush_education();
        self.output
    }
}

pub struct SectionSegmenter {
    thresholds: FieldThresholds,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(FieldThresholds::default())
    }
}

impl SectionSegmenter {
    pub fn new(thresholds: FieldThresholds) -> Self {
        Self { thresholds }
    }

    pub fn assemble(&self, lines: &[String]) -> AssembledSections {
        let mut assembly = Assembly::default();
        for line in lines {
            assembly.feed(line, &self.thresholds);
        }
        let sections = assembly.finish();

        debug!(
            "Assembled {} experience and {} education entries",
            sections.work_experience.len(),
            sections.education.len()
        );
        sections
    }

    /// Section a line would switch to, if it is a heading.
    pub fn heading_of(line: &str) -> Option<Section> {
        if line.split_whitespace().count() > MAX_HEADING_WORDS {
            None
        } else if EXPERIENCE_HEADING.is_match(line) {
            Some(Section::Experience)
        } else if EDUCATION_HEADING.is_match(line) {
            Some(Section::Education)
        } else {
            None
        }
    }
}

fn grapheme_len(line: &str) -> usize {
    line.graphemes(true).count()
}
