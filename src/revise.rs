//! Boundary to an external text-revision service
//!
//! The service rewrites free text (the summary, an experience description)
//! given the job context. It is optional: any failure or empty answer leaves
//! the original text in place, and the record is never changed in place.
//!
//! The same service can score a record against its target role. A failed
//! analysis degrades to a fixed placeholder result instead of an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::locale::Language;
use crate::record::Resume;

pub use crate::error::ReviseError;

/// Which field a revision is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionKind {
    /// Professional summary, a few sentences
    Summary,
    /// Experience description, rewritten as bullet points
    Experience,
}

/// One piece of text to revise, with its job context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRequest {
    pub kind: RevisionKind,
    pub text: String,
    /// Job title the text is about
    pub role: String,
    pub company: Option<String>,
    /// Language the answer must be written in
    pub language: Language,
}

impl RevisionRequest {
    /// Request for the record's summary
    pub fn summary(resume: &Resume) -> Self {
        Self {
            kind: RevisionKind::Summary,
            text: resume.summary.clone(),
            role: resume.job_title.clone(),
            company: resume.target().map(str::to_string),
            language: resume.language,
        }
    }
}

/// An external service that rewrites text
pub trait TextReviser {
    fn revise(&self, request: &RevisionRequest) -> Result<String, ReviseError>;
}

impl<F> TextReviser for F
where
    F: Fn(&RevisionRequest) -> Result<String, ReviseError>,
{
    fn revise(&self, request: &RevisionRequest) -> Result<String, ReviseError> {
        self(request)
    }
}

/// Revised text, or the original when the service fails or answers blank
pub fn revise_or_keep(reviser: &dyn TextReviser, request: &RevisionRequest) -> String {
    match reviser.revise(request) {
        Ok(text) if !text.trim().is_empty() => {
            debug!(kind = ?request.kind, "text revised");
            text
        }
        Ok(_) => {
            warn!(kind = ?request.kind, "text service returned nothing, keeping original");
            request.text.clone()
        }
        Err(err) => {
            warn!(kind = ?request.kind, error = %err, "text revision failed, keeping original");
            request.text.clone()
        }
    }
}

/// Copy of `resume` with a revised summary
pub fn revise_summary(resume: &Resume, reviser: &dyn TextReviser) -> Resume {
    let summary = revise_or_keep(reviser, &RevisionRequest::summary(resume));
    Resume {
        summary,
        ..resume.clone()
    }
}

/// Copy of `resume` with one experience description revised.
///
/// An unknown `entry_id` returns an unchanged copy without calling the
/// service.
pub fn revise_experience(resume: &Resume, entry_id: &str, reviser: &dyn TextReviser) -> Resume {
    let Some(index) = resume.experience.iter().position(|e| e.id == entry_id) else {
        debug!(entry = entry_id, "no experience entry with this id");
        return resume.clone();
    };

    let entry = &resume.experience[index];
    let request = RevisionRequest {
        kind: RevisionKind::Experience,
        text: entry.description.clone(),
        role: entry.title.clone(),
        company: Some(entry.company.clone()).filter(|c| !c.trim().is_empty()),
        language: resume.language,
    };
    let description = revise_or_keep(reviser, &request);

    let mut revised = resume.clone();
    revised.experience[index].description = description;
    revised
}

/// Keyword and fit analysis of a record for its target role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    /// 0 to 100
    pub score: u8,
    /// Skills the role usually asks for that the record lacks
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub feedback: String,
    /// Advice specific to the target company
    #[serde(default)]
    pub company_fit: String,
}

impl AtsAnalysis {
    /// Placeholder shown when no analysis could be made
    pub fn fallback() -> Self {
        Self {
            score: 75,
            missing_keywords: vec![
                "Leadership".to_string(),
                "Communication".to_string(),
                "English".to_string(),
            ],
            feedback: "Could not complete analysis at this time.".to_string(),
            company_fit: "Check company values.".to_string(),
        }
    }

    /// Parse a JSON answer from the service; scores above 100 are clamped
    pub fn from_json_str(answer: &str) -> Result<Self, ReviseError> {
        if answer.trim().is_empty() {
            return Err(ReviseError::Malformed("empty answer".to_string()));
        }
        let mut analysis: AtsAnalysis =
            serde_json::from_str(answer).map_err(|e| ReviseError::Malformed(e.to_string()))?;
        analysis.score = analysis.score.min(100);
        Ok(analysis)
    }
}

/// An external service that scores a record
pub trait CvAnalyzer {
    fn analyze(&self, resume: &Resume) -> Result<AtsAnalysis, ReviseError>;
}

impl<F> CvAnalyzer for F
where
    F: Fn(&Resume) -> Result<AtsAnalysis, ReviseError>,
{
    fn analyze(&self, resume: &Resume) -> Result<AtsAnalysis, ReviseError> {
        self(resume)
    }
}

/// Analysis from the service, or [`AtsAnalysis::fallback`] when it fails
pub fn analyze_or_default(analyzer: &dyn CvAnalyzer, resume: &Resume) -> AtsAnalysis {
    match analyzer.analyze(resume) {
        Ok(analysis) => {
            debug!(score = analysis.score, "record analyzed");
            AtsAnalysis {
                score: analysis.score.min(100),
                ..analysis
            }
        }
        Err(err) => {
            warn!(error = %err, "analysis failed, using placeholder result");
            AtsAnalysis::fallback()
        }
    }
}
