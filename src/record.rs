//! Résumé record: the immutable input of the renderer
//!
//! The wire shape is the camelCase JSON object the form persists. The same
//! structure also loads from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::template::TemplateRef;

pub use crate::locale::Language;

/// Placeholder the form stores when no target company was picked
const NO_TARGET_COMPANY: &str = "غير محدد";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    /// Rendered in this order, duplicates included
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub target_company: String,
    #[serde(default, rename = "templateId")]
    pub template: TemplateRef,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Assigned at creation, never reused
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// Free-form, e.g. "2021" or "present"
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// May span several lines
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub year: String,
}

impl Resume {
    /// Parse a record from the form's JSON
    pub fn from_json_str(content: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a record from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, RecordError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a record file; `.toml` files are TOML, anything else JSON
    pub fn from_file(path: &Path) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Check that a known template belongs to the record's language.
    ///
    /// Unrecognized templates pass: they render through the fallback.
    pub fn validate(&self) -> Result<(), RecordError> {
        match self.template.known() {
            Some(template) if template.language() != self.language => {
                Err(RecordError::LanguageMismatch {
                    template,
                    language: self.language,
                })
            }
            _ => Ok(()),
        }
    }

    /// Target company, if one was picked
    pub fn target(&self) -> Option<&str> {
        let company = self.target_company.trim();
        if company.is_empty() || company == NO_TARGET_COMPANY {
            None
        } else {
            Some(company)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateId;

    #[test]
    fn test_minimal_json_defaults() {
        let resume = Resume::from_json_str(r#"{"language": "en"}"#).unwrap();
        assert_eq!(resume.language, Language::English);
        assert!(resume.skills.is_empty());
        assert_eq!(resume.template, TemplateRef::Known(TemplateId::ArAts));
    }

    #[test]
    fn test_language_is_required() {
        assert!(Resume::from_json_str(r#"{"fullName": "x"}"#).is_err());
        assert!(Resume::from_json_str(r#"{"language": "de"}"#).is_err());
    }

    #[test]
    fn test_camel_case_fields() {
        let resume = Resume::from_json_str(
            r#"{
                "fullName": "Sara",
                "jobTitle": "Nurse",
                "templateId": "EN_MEDICAL",
                "language": "en",
                "experience": [
                    {"id": "1", "title": "Nurse", "company": "KFSH", "startDate": "2020", "endDate": "present", "description": "a\nb"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(resume.full_name, "Sara");
        assert_eq!(resume.template.known(), Some(TemplateId::EnMedical));
        assert_eq!(resume.experience[0].end_date, "present");
        assert_eq!(resume.experience[0].company, "KFSH");
    }

    #[test]
    fn test_toml_record() {
        let resume = Resume::from_toml_str(
            r#"
fullName = "Ahmed Ali"
skills = ["Excel", "SQL"]
templateId = "AR_TECH"
language = "ar"

[[education]]
id = "e1"
degree = "BSc"
school = "KSU"
year = "2019"
"#,
        )
        .unwrap();
        assert_eq!(resume.skills, vec!["Excel", "SQL"]);
        assert_eq!(resume.education[0].school, "KSU");
        assert_eq!(resume.language, Language::Arabic);
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let resume = Resume {
            template: TemplateId::ArClassic.into(),
            language: Language::English,
            ..Resume::default()
        };
        assert!(matches!(
            resume.validate(),
            Err(RecordError::LanguageMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_unrecognized_template() {
        let resume = Resume {
            template: TemplateRef::parse("9999"),
            language: Language::English,
            ..Resume::default()
        };
        assert!(resume.validate().is_ok());
    }

    #[test]
    fn test_target_company_placeholder_is_none() {
        let mut resume = Resume::default();
        assert_eq!(resume.target(), None);
        resume.target_company = "غير محدد".to_string();
        assert_eq!(resume.target(), None);
        resume.target_company = "Aramco".to_string();
        assert_eq!(resume.target(), Some("Aramco"));
    }
}
