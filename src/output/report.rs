//! Per-file parse reports handed to the formatters

use crate::error::ResumeProfilerError;
use crate::processing::profile::ParseOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub file_name: String,
    #[serde(flatten)]
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ReportStatus {
    Parsed { result: ParseOutcome },
    Failed { error: String },
}

impl ProfileReport {
    pub fn parsed(file_name: impl Into<String>, outcome: ParseOutcome) -> Self {
        Self {
            file_name: file_name.into(),
            status: ReportStatus::Parsed { result: outcome },
        }
    }

    pub fn failed(file_name: impl Into<String>, error: &ResumeProfilerError) -> Self {
        Self {
            file_name: file_name.into(),
            status: ReportStatus::Failed {
                error: error.to_string(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, ReportStatus::Failed { .. })
    }
}
