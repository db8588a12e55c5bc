//! Template catalog and registry
//!
//! A template is a named pairing of one layout archetype with a fixed
//! configuration. Twenty templates share three archetypes; what tells them
//! apart is configuration only.
//!
//! # Example
//!
//! ```rust
//! use cv_renderer::layout::Archetype;
//! use cv_renderer::template::{config_for, TemplateId, TemplateRef};
//!
//! let config = config_for(&TemplateRef::Known(TemplateId::EnModernPro));
//! assert_eq!(config.archetype(), Archetype::Sidebar);
//!
//! // Identifiers this build does not know use the linear fallback
//! let config = config_for(&TemplateRef::parse("EN_FROM_THE_FUTURE"));
//! assert_eq!(config.archetype(), Archetype::Linear);
//! ```

mod catalog;
mod registry;

pub use catalog::{Category, TemplateId, TemplateRef};
pub use registry::{config_for, entry, TemplateRegistry, FALLBACK};

use thiserror::Error;

/// Errors that can occur during template lookups
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Identifier not in the catalog
    #[error("unknown template: {id}")]
    Unknown { id: String },
}
