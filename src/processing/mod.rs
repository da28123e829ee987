//! Text processing and profile extraction module

pub mod profile;
pub mod text_processor;
pub mod skill_matcher;
pub mod sections;
pub mod summary;
pub mod analyzer;
