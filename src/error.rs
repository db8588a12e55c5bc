//! Errors raised at the crate's boundaries
//!
//! Rendering itself cannot fail; only loading and validating records can,
//! plus the calls out to an external text reviser.

use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Language;
use crate::template::TemplateId;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to read record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML record: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record's language differs from its template's language partition
    #[error("template {template} is for {} records, but the record is {}", template.language().code(), language.code())]
    LanguageMismatch {
        template: TemplateId,
        language: Language,
    },
}

/// Failure reported by a text reviser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviseError {
    /// The service could not be reached or timed out
    #[error("text service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but refused the request
    #[error("text service rejected the request: {0}")]
    Rejected(String),

    /// The service answered with something that is not the expected shape
    #[error("text service answer is malformed: {0}")]
    Malformed(String),
}
