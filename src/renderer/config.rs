//! Configuration for HTML rendering

/// Physical page size in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Wrap the body in a full document with `<head>` and an `@page` rule
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cv-" for "cv-sidebar")
    pub class_prefix: Option<String>,

    pub page: PageSize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("cv-".to_string()),
            page: PageSize::A4,
        }
    }
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is a full document or a fragment
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_page(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }
}
