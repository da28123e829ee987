//! Structured candidate profile produced by the parser

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub work_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub graduation_year: String,
}

/// Successful result of a parse. Image uploads produce an empty profile
/// flagged for manual entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub profile: ParsedProfile,
    #[serde(rename = "requiresOCR")]
    pub requires_ocr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub const MANUAL_ENTRY_MESSAGE: &str = "Image resumes cannot be read automatically yet. \
Please fill in your profile manually or upload a PDF, DOCX, ODT, RTF or text version.";

impl ParseOutcome {
    pub fn parsed(profile: ParsedProfile) -> Self {
        Self {
            profile,
            requires_ocr: false,
            message: None,
        }
    }

    pub fn requires_ocr() -> Self {
        Self {
            profile: ParsedProfile::default(),
            requires_ocr: true,
            message: Some(MANUAL_ENTRY_MESSAGE.to_string()),
        }
    }
}

impl ParsedProfile {
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ParsedProfile::default()
    }
}
