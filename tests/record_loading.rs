//! Loading records from files and checking them at the boundary

use std::fs;
use std::path::PathBuf;

use cv_renderer::{Archetype, Language, RecordError, Resume, TemplateId, TemplateRef};
use tempfile::{tempdir, TempDir};

/// Write `content` to `name` inside a test-owned directory
fn scratch(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = scratch(
        &dir,
        "record.json",
        r#"{"fullName": "Sara", "templateId": "EN_MEDICAL", "language": "en"}"#,
    );
    let resume = Resume::from_file(&path).unwrap();
    assert_eq!(resume.full_name, "Sara");
    assert_eq!(resume.template.known(), Some(TemplateId::EnMedical));
}

#[test]
fn test_load_toml_file() {
    let dir = tempdir().unwrap();
    let path = scratch(
        &dir,
        "record.toml",
        r#"
fullName = "فاطمة"
templateId = "AR_MEDICAL"
language = "arabic"

[[experience]]
id = "1"
title = "ممرضة"
description = """
سطر أول
سطر ثان"""
"#,
    );
    let resume = Resume::from_file(&path).unwrap();
    assert_eq!(resume.language, Language::Arabic);
    assert_eq!(resume.experience[0].description, "سطر أول\nسطر ثان");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cv-renderer-does-not-exist.json");
    let err = Resume::from_file(&path).unwrap_err();
    assert!(matches!(err, RecordError::Io { .. }));
    assert!(err.to_string().contains("cv-renderer-does-not-exist.json"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = scratch(&dir, "broken.json", r#"{"fullName": "#);
    assert!(matches!(
        Resume::from_file(&path),
        Err(RecordError::Json(_))
    ));
}

#[test]
fn test_template_id_tolerates_any_scalar() {
    for raw in [r#"9999"#, r#""AR_NOPE""#, r#"true"#, r#"null"#, r#"1.5"#] {
        let json = format!(r#"{{"language": "en", "templateId": {}}}"#, raw);
        let resume = Resume::from_json_str(&json).unwrap();
        assert_eq!(resume.template.known(), None, "{}", raw);
        assert!(resume.validate().is_ok(), "{}", raw);
    }
}

#[test]
fn test_template_id_must_match_exactly() {
    for raw in ["en_tech", " EN_TECH "] {
        let json = format!(r#"{{"language": "en", "templateId": {:?}}}"#, raw);
        let resume = Resume::from_json_str(&json).unwrap();
        assert_eq!(resume.template, TemplateRef::Unrecognized(raw.to_string()));
        assert_eq!(resume.template.known(), None);

        let document = cv_renderer::render(&resume);
        assert_eq!(document.archetype, Archetype::Linear, "{:?}", raw);

        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["templateId"], raw);
    }
}

#[test]
fn test_mismatch_is_rejected_at_the_boundary() {
    let resume =
        Resume::from_json_str(r#"{"language": "en", "templateId": "AR_DESIGNER"}"#).unwrap();
    let err = resume.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "template AR_DESIGNER is for ar records, but the record is en"
    );

    // Rendering stays total even when the caller skips validation
    let document = cv_renderer::render(&resume);
    assert_eq!(document.direction, cv_renderer::Direction::Ltr);
}

#[test]
fn test_record_round_trips_through_json() {
    let resume = Resume::from_json_str(
        r#"{"fullName": "Ali", "skills": ["Go"], "templateId": "EN_PRODUCT", "language": "en"}"#,
    )
    .unwrap();
    let json = serde_json::to_value(&resume).unwrap();
    assert_eq!(json["templateId"], "EN_PRODUCT");
    assert_eq!(json["language"], "en");
    assert_eq!(json["fullName"], "Ali");
}
