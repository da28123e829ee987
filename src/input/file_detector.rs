//! File type detection

use std::fmt;
use std::path::Path;

/// Every document format the decoder dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    PlainText,
    Rtf,
    Odt,
    Image,
    Unsupported,
}

/// Extensions accepted for upload, in the order they are advertised.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "txt", "md", "rtf", "odt", "webp", "jpg", "jpeg", "png", "gif", "bmp",
];

impl FileFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileFormat::Pdf,
            "docx" => FileFormat::Docx,
            "txt" | "md" => FileFormat::PlainText,
            "rtf" => FileFormat::Rtf,
            "odt" => FileFormat::Odt,
            "webp" | "jpg" | "jpeg" | "png" | "gif" | "bmp" => FileFormat::Image,
            _ => FileFormat::Unsupported,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        // Parameters such as "; charset=utf-8" do not change the format.
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_lowercase().as_str() {
            "application/pdf" => FileFormat::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                FileFormat::Docx
            }
            "text/plain" | "text/markdown" | "text/x-markdown" => FileFormat::PlainText,
            "application/rtf" | "text/rtf" => FileFormat::Rtf,
            "application/vnd.oasis.opendocument.text" => FileFormat::Odt,
            "image/webp" | "image/jpeg" | "image/jpg" | "image/png" | "image/gif"
            | "image/bmp" | "image/x-ms-bmp" => FileFormat::Image,
            _ => FileFormat::Unsupported,
        }
    }

    /// Resolve the format from the declared MIME type, falling back to the
    /// file name's extension when the type is generic or unknown.
    pub fn detect(declared_mime: &str, file_name: &str) -> Self {
        let format = Self::from_mime(declared_mime);
        if format.is_supported() {
            return format;
        }
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileFormat::Unsupported)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FileFormat::Unsupported)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Pdf => "PDF",
            FileFormat::Docx => "DOCX",
            FileFormat::PlainText => "plain text",
            FileFormat::Rtf => "RTF",
            FileFormat::Odt => "ODT",
            FileFormat::Image => "image",
            FileFormat::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Best guess of a MIME type for a path, used when the caller has none.
pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
