//! HTML renderer for rendered résumé documents
//!
//! This module takes a `Document` and produces print-ready HTML with
//! prefixed CSS classes and the palette as custom properties.

pub mod config;
pub mod html;

pub use config::{HtmlConfig, PageSize};
pub use html::{render_html, HtmlBuilder};
