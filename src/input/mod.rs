//! Input processing module
//! Handles format detection, text extraction, and document loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::FileFormat;
pub use manager::{DecodedDocument, InputManager, LoadedDocument};
