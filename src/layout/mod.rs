//! Layout archetypes and the visual tree they produce
//!
//! This module takes a résumé record, a localization context and a layout
//! configuration, and composes a `Node` tree. The archetype decides the
//! arrangement; the configuration only supplies colors and small switches.

pub mod config;
pub mod header_accent;
pub mod linear;
pub mod parts;
pub mod sidebar;
pub mod types;

pub use config::{
    Contrast, HeaderAccentConfig, HeaderStyle, LayoutConfig, LinearConfig, SidebarConfig,
    SkillsPlacement, Typeface,
};
pub use sidebar::sidebar_side;
pub use types::*;

use serde::Serialize;

use crate::locale::Localized;
use crate::record::Resume;
use crate::stylesheet::Stylesheet;

/// Arrangement family of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Main column plus a colored identity sidebar
    Sidebar,
    /// Single column, reading order top to bottom
    Linear,
    /// Accent banner over an 8/4 grid
    HeaderAccent,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::Sidebar,
        Archetype::Linear,
        Archetype::HeaderAccent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Sidebar => "sidebar",
            Archetype::Linear => "linear",
            Archetype::HeaderAccent => "header_accent",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the root node for `resume` with the archetype `config` names
pub fn compose(
    resume: &Resume,
    config: &LayoutConfig,
    locale: &Localized,
    palette: &Stylesheet,
) -> Node {
    match config {
        LayoutConfig::Sidebar(c) => sidebar::compose(resume, c, locale, palette),
        LayoutConfig::Linear(c) => linear::compose(resume, c, locale, palette),
        LayoutConfig::HeaderAccent(c) => header_accent::compose(resume, c, locale, palette),
    }
}
