//! Integration tests for the resume profiler

use resume_profiler::{
    parse_resume, Config, InputManager, ParseOutcome, ResumeParser, ResumeProfilerError,
};
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;

async fn parse_fixture(name: &str) -> ParseOutcome {
    let path = Path::new("tests/fixtures").join(name);
    let document = InputManager::load(&path, None).await.unwrap();
    parse_resume(&document.bytes, &document.mime_type, &document.file_name).unwrap()
}

#[tokio::test]
async fn test_plain_text_resume() {
    let outcome = parse_fixture("sample_resume.txt").await;
    assert!(!outcome.requires_ocr);
    let profile = outcome.profile;

    assert_eq!(profile.first_name.as_deref(), Some("Camille"));
    assert_eq!(profile.last_name.as_deref(), Some("Lefèvre"));
    assert_eq!(profile.email.as_deref(), Some("camille.lefevre@example.fr"));
    assert_eq!(profile.phone.as_deref(), Some("+33698765432"));
    assert_eq!(
        profile.linked_in.as_deref(),
        Some("LinkedIn.com/IN/camille-lefevre")
    );
    assert!(profile
        .summary
        .as_deref()
        .unwrap()
        .starts_with("Ingénieure logiciel spécialisée"));
    assert_eq!(
        profile.skills,
        vec!["Python", "Rust", "PostgreSQL", "Redis", "Docker", "Kubernetes", "Git", "Scrum"]
    );

    assert_eq!(profile.work_experience.len(), 2);
    assert_eq!(profile.work_experience[0].position, "Staff Software Engineer");
    assert_eq!(profile.work_experience[0].company, "Datadrift SAS");
    assert_eq!(profile.work_experience[0].end_date, "Présent");
    assert_eq!(profile.work_experience[1].start_date, "2015");
    assert_eq!(profile.work_experience[1].company, "Banque Horizon");

    assert_eq!(profile.education.len(), 1);
    assert_eq!(profile.education[0].institution, "INSA Lyon");
    assert_eq!(profile.education[0].field.as_deref(), Some("Informatique"));
}

#[tokio::test]
async fn test_markdown_resume() {
    let profile = parse_fixture("sample_resume.md").await.profile;

    assert_eq!(profile.email.as_deref(), Some("thomas.bernard@mail.com"));
    assert_eq!(profile.phone.as_deref(), Some("0711223344"));
    assert!(profile
        .summary
        .as_deref()
        .unwrap()
        .starts_with("Mobile developer focused on Flutter"));
    assert_eq!(
        profile.skills,
        vec!["React", "React Native", "Flutter", "Android", "iOS"]
    );
    assert_eq!(profile.work_experience.len(), 1);
    assert_eq!(profile.work_experience[0].company, "Shopwise");
    assert_eq!(profile.work_experience[0].end_date, "Présent");
    assert_eq!(profile.education[0].degree, "Master in Computer Science");
    assert_eq!(profile.education[0].graduation_year, "2017");
}

#[tokio::test]
async fn test_rtf_resume() {
    let profile = parse_fixture("sample_resume.rtf").await.profile;

    assert_eq!(profile.first_name.as_deref(), Some("Sophie"));
    assert_eq!(profile.last_name.as_deref(), Some("Moreau"));
    assert_eq!(profile.email.as_deref(), Some("sophie.moreau@example.org"));
    assert_eq!(profile.skills, vec!["TensorFlow", "Pandas"]);
    assert_eq!(profile.work_experience.len(), 1);
    assert_eq!(profile.work_experience[0].position, "Data Scientist");
    assert_eq!(profile.work_experience[0].company, "Insight Labs");
    assert_eq!(
        profile.work_experience[0].description.as_deref(),
        Some("Modèles de prévision avec TensorFlow et Pandas.")
    );
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let path = Path::new("tests/fixtures/unsupported.xyz");
    let document = InputManager::load(path, None).await.unwrap();

    let result = parse_resume(&document.bytes, &document.mime_type, &document.file_name);
    assert!(matches!(result, Err(ResumeProfilerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = InputManager::load(Path::new("tests/fixtures/nonexistent.txt"), None).await;
    assert!(result.is_err());
}

#[test]
fn test_zip_mime_is_unsupported() {
    let result = parse_resume(b"PK\x03\x04", "application/zip", "resume.zip");
    match result {
        Err(ResumeProfilerError::UnsupportedFormat(message)) => {
            assert!(message.contains("pdf"));
            assert!(message.contains("odt"));
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_png_requires_ocr() {
    let outcome = parse_resume(b"\x89PNG\r\n\x1a\n", "image/png", "photo.png").unwrap();
    assert!(outcome.requires_ocr);
    assert!(outcome.profile.skills.is_empty());
    assert!(outcome.profile.work_experience.is_empty());
    assert!(outcome.profile.education.is_empty());
    assert!(outcome.profile.email.is_none());
    assert!(!outcome.message.unwrap().is_empty());
}

#[test]
fn test_corrupt_pdf_is_decode_failure() {
    let result = parse_resume(b"%PDF-1.7\nthis is not really a pdf", "application/pdf", "cv.pdf");
    assert!(matches!(result, Err(ResumeProfilerError::DecodeFailure(_))));
}

#[test]
fn test_docx_resume() {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for line in [
        "Lucas Petit",
        "lucas.petit@example.com",
        "Expérience professionnelle",
        "2020 - 2023",
        "Lead Developer",
        "Acme Corp",
        "Built distributed systems.",
    ] {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();

    let outcome = parse_resume(
        buffer.get_ref(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "cv.docx",
    )
    .unwrap();
    let profile = outcome.profile;

    assert_eq!(profile.first_name.as_deref(), Some("Lucas"));
    assert_eq!(profile.email.as_deref(), Some("lucas.petit@example.com"));
    assert_eq!(profile.work_experience.len(), 1);
    assert_eq!(profile.work_experience[0].position, "Lead Developer");
    assert_eq!(
        profile.work_experience[0].description.as_deref(),
        Some("Built distributed systems.")
    );
}

#[test]
fn test_odt_resume_detected_by_extension() {
    let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
  <office:body>
    <office:text>
      <text:p>Inès Garnier</text:p>
      <text:p>ines.garnier@example.fr</text:p>
      <text:h>Formation</text:h>
      <text:p>2019</text:p>
      <text:p>Master en Design d'interaction</text:p>
      <text:p>École de Design Nantes</text:p>
      <text:p>Outils : Figma, Adobe XD</text:p>
    </office:text>
  </office:body>
</office:document-content>"#;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("content.xml", options).unwrap();
    writer.write_all(content.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let profile = parse_resume(&bytes, "application/octet-stream", "cv.odt")
        .unwrap()
        .profile;

    assert_eq!(profile.first_name.as_deref(), Some("Inès"));
    assert_eq!(profile.last_name.as_deref(), Some("Garnier"));
    assert_eq!(profile.skills, vec!["Figma", "Adobe XD"]);
    assert_eq!(profile.education.len(), 1);
    assert_eq!(profile.education[0].degree, "Master en Design d'interaction");
    assert_eq!(profile.education[0].institution, "École de Design Nantes");
    assert_eq!(profile.education[0].graduation_year, "2019");
}

#[test]
fn test_identical_input_gives_identical_output() {
    let bytes = std::fs::read("tests/fixtures/sample_resume.txt").unwrap();
    let first = parse_resume(&bytes, "text/plain", "cv.txt").unwrap();
    let second = parse_resume(&bytes, "text/plain", "cv.txt").unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_shared_parser_across_threads() {
    let parser = Arc::new(ResumeParser::with_config(&Config::default()).unwrap());
    let bytes = Arc::new(std::fs::read("tests/fixtures/sample_resume.txt").unwrap());
    let expected = parser.parse(&bytes, "text/plain", "cv.txt").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = Arc::clone(&parser);
            let bytes = Arc::clone(&bytes);
            std::thread::spawn(move || parser.parse(&bytes, "text/plain", "cv.txt").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
