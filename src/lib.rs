//! CV Renderer - bilingual résumé rendering engine
//!
//! This library turns a résumé record into a visual tree laid out by one of
//! twenty templates, in Arabic (right-to-left) or English (left-to-right),
//! and serializes that tree to print-ready HTML.
//!
//! # Example
//!
//! ```rust
//! use cv_renderer::{render, Resume};
//!
//! let resume = Resume::from_json_str(r#"{
//!     "fullName": "Ahmed Ali",
//!     "language": "ar",
//!     "templateId": "AR_ATS"
//! }"#).unwrap();
//!
//! let document = render(&resume);
//! assert!(document.direction.is_rtl());
//! assert!(document.outline().contains("\"Ahmed Ali\""));
//! ```

pub mod error;
pub mod layout;
pub mod locale;
pub mod record;
pub mod renderer;
pub mod revise;
pub mod stylesheet;
pub mod template;

pub use error::{RecordError, ReviseError};
pub use layout::{Archetype, Document, LayoutConfig, Node};
pub use locale::{Direction, Language, Localized};
pub use record::{EducationEntry, ExperienceEntry, Resume};
pub use renderer::HtmlConfig;
pub use template::{TemplateId, TemplateRef, TemplateRegistry};

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

use tracing::debug;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Neutral palette for non-accent colors
    pub stylesheet: Stylesheet,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Debug mode: print the tree outline to stderr
    pub debug: bool,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a record with the default palette
///
/// Total: unrecognized templates fall back to the minimal single-column
/// layout, and empty fields simply produce fewer nodes.
pub fn render(resume: &Resume) -> Document {
    render_with_config(resume, &RenderConfig::default())
}

/// Render a record with custom configuration
///
/// # Example
///
/// ```rust
/// use cv_renderer::{render_with_config, RenderConfig, Resume, Stylesheet, TemplateId};
///
/// let palette = Stylesheet::from_str(r##"
/// [colors]
/// text-1 = "#222222"
/// "##).unwrap();
///
/// let resume = Resume {
///     template: TemplateId::EnExecutive.into(),
///     language: cv_renderer::Language::English,
///     ..Resume::default()
/// };
/// let config = RenderConfig::new().with_stylesheet(palette);
///
/// let document = render_with_config(&resume, &config);
/// assert_eq!(document.archetype, cv_renderer::Archetype::HeaderAccent);
/// ```
pub fn render_with_config(resume: &Resume, config: &RenderConfig) -> Document {
    // Direction and labels come from the record's language alone
    let locale = locale::resolve(resume.language);

    let layout = template::config_for(&resume.template);
    debug!(
        template = %resume.template,
        archetype = layout.archetype().as_str(),
        language = resume.language.code(),
        "rendering record"
    );

    let root = layout::compose(resume, &layout, &locale, &config.stylesheet);
    let document = Document {
        language: locale.language,
        direction: locale.direction,
        archetype: layout.archetype(),
        root,
    };

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprint!("{}", document.outline());
        eprintln!("====================");
    }

    document
}

/// Render a record straight to a standalone HTML page
pub fn render_html(resume: &Resume) -> String {
    let config = RenderConfig::default();
    let document = render_with_config(resume, &config);
    renderer::render_html(&document, &config.html, &config.stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Role;
    use crate::locale::SectionKey;

    fn english(template: TemplateRef) -> Resume {
        Resume {
            full_name: "Jane Doe".to_string(),
            job_title: "Engineer".to_string(),
            language: Language::English,
            template,
            ..Resume::default()
        }
    }

    #[test]
    fn test_render_known_template() {
        let document = render(&english(TemplateId::EnModernPro.into()));
        assert_eq!(document.archetype, Archetype::Sidebar);
        assert_eq!(document.direction, Direction::Ltr);
        assert!(document.root.find(Role::Sidebar).is_some());
    }

    #[test]
    fn test_render_unrecognized_template_falls_back() {
        let document = render(&english(TemplateRef::parse("NOPE")));
        assert_eq!(document.archetype, Archetype::Linear);
        let name = document.root.find(Role::Name).unwrap();
        assert_eq!(name.text.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_direction_follows_language_not_template() {
        let resume = Resume {
            template: TemplateId::EnTech.into(),
            language: Language::Arabic,
            ..Resume::default()
        };
        let document = render(&resume);
        assert_eq!(document.direction, Direction::Rtl);
        let title = document
            .root
            .find(Role::Section(SectionKey::Skills))
            .and_then(|s| s.find(Role::SectionTitle))
            .and_then(|t| t.text.clone());
        assert_eq!(title.as_deref(), Some("المهارات"));
    }

    #[test]
    fn test_outline_header_line() {
        let document = render(&Resume::default());
        let first = document.outline().lines().next().map(str::to_string);
        assert_eq!(
            first.as_deref(),
            Some("document lang=ar dir=rtl archetype=linear")
        );
    }

    #[test]
    fn test_render_html_is_standalone() {
        let html = render_html(&english(TemplateId::EnCreative.into()));
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("cv-sidebar"));
        assert!(html.contains("Jane Doe"));
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new()
            .with_html(HtmlConfig::new().with_standalone(false))
            .with_debug(true);
        assert!(!config.html.standalone);
        assert!(config.debug);
        assert_eq!(config.stylesheet, Stylesheet::default());
    }
}
