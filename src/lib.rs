//! Resume profiler library
//!
//! Decodes an uploaded resume (PDF, DOCX, ODT, RTF, plain text or Markdown)
//! and extracts a best-effort [`ParsedProfile`]: contact details, skills,
//! work history, education and summary. Image uploads are accepted but
//! flagged as needing manual entry.
//!
//! ```no_run
//! let bytes = std::fs::read("cv.pdf")?;
//! let outcome = resume_profiler::parse_resume(&bytes, "application/pdf", "cv.pdf")?;
//! println!("{:?}", outcome.profile.email);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeProfilerError};
pub use input::{FileFormat, InputManager};
pub use processing::analyzer::{parse_resume, ResumeParser};
pub use processing::profile::{EducationEntry, ExperienceEntry, ParseOutcome, ParsedProfile};
