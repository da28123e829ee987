//! Input manager: format dispatch for uploaded documents

use crate::error::{Result, ResumeProfilerError};
use crate::input::file_detector::{guess_mime_type, FileFormat, SUPPORTED_EXTENSIONS};
use crate::input::text_extractor::{
    DocxExtractor, OdtExtractor, PdfExtractor, PlainTextExtractor, RtfExtractor, TextExtractor,
};
use log::{debug, info, warn};
use std::path::Path;
use tokio::fs;

/// What the decoder produced for one document.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedDocument {
    Text(String),
    /// Image upload: text extraction would need OCR, which is not performed.
    RequiresOcr,
}

/// A document read from disk, ready to be handed to the parser.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

pub struct InputManager;

impl InputManager {
    /// Turn raw bytes into text according to the declared type.
    pub fn decode(bytes: &[u8], declared_mime: &str, file_name: &str) -> Result<DecodedDocument> {
        let format = FileFormat::detect(declared_mime, file_name);
        debug!(
            "Detected {} for '{}' (declared '{}')",
            format, file_name, declared_mime
        );

        let text = match format {
            FileFormat::Pdf => PdfExtractor.extract(bytes)?,
            FileFormat::Docx => DocxExtractor.extract(bytes)?,
            FileFormat::Odt => OdtExtractor.extract(bytes)?,
            FileFormat::PlainText => PlainTextExtractor.extract(bytes)?,
            FileFormat::Rtf => RtfExtractor.extract(bytes)?,
            FileFormat::Image => {
                info!("Image upload '{}' needs OCR, skipping extraction", file_name);
                return Ok(DecodedDocument::RequiresOcr);
            }
            FileFormat::Unsupported => {
                warn!("Rejected '{}' with type '{}'", file_name, declared_mime);
                return Err(ResumeProfilerError::UnsupportedFormat(format!(
                    "'{}' ({}) cannot be parsed. Supported formats: {}",
                    file_name,
                    if declared_mime.is_empty() { "no type" } else { declared_mime },
                    SUPPORTED_EXTENSIONS.join(", ")
                )));
            }
        };

        Ok(DecodedDocument::Text(text))
    }

    /// Read a file from disk, guessing its MIME type from the extension
    /// unless one is supplied.
    pub async fn load(path: &Path, mime_override: Option<&str>) -> Result<LoadedDocument> {
        if !path.exists() {
            return Err(ResumeProfilerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let mime_type = match mime_override {
            Some(mime) => mime.to_string(),
            None => guess_mime_type(path),
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        info!(
            "Loaded {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            mime_type
        );

        Ok(LoadedDocument {
            bytes,
            mime_type,
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_lists_extensions() {
        let err = InputManager::decode(b"PK..", "application/zip", "archive.zip").unwrap_err();
        match err {
            ResumeProfilerError::UnsupportedFormat(message) => {
                for ext in ["pdf", "docx", "txt", "md", "rtf", "odt"] {
                    assert!(message.contains(ext), "missing {ext} in {message}");
                }
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_image_short_circuits() {
        let decoded = InputManager::decode(&[0x89, b'P', b'N', b'G'], "image/png", "me.png").unwrap();
        assert_eq!(decoded, DecodedDocument::RequiresOcr);
    }

    #[test]
    fn test_text_by_extension() {
        let decoded = InputManager::decode(b"hello", "application/octet-stream", "cv.txt").unwrap();
        assert_eq!(decoded, DecodedDocument::Text("hello".to_string()));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = InputManager::load(Path::new("does/not/exist.pdf"), None).await;
        assert!(matches!(result, Err(ResumeProfilerError::InvalidInput(_))));
    }
}
