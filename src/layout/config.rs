//! Per-archetype presentation configuration
//!
//! Each archetype gets its own configuration shape so that a knob can only
//! be set on the archetype that reads it. Values are fixed per template and
//! owned by the registry.

use serde::Serialize;

use super::Archetype;

/// Sidebar background contrast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Contrast {
    /// Dark background, light text
    Dark,
    /// Light background, dark text
    Light,
}

/// Header treatment of the linear layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    #[default]
    Plain,
    /// Heavy rule under the header block
    Bordered,
}

/// Typeface choice of the linear layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Typeface {
    /// Keep the language's base family
    #[default]
    Base,
    /// Serif, for Latin-script records only
    Serif,
}

/// Where the linear layout puts the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsPlacement {
    /// Right after the summary
    Top,
    /// After education
    #[default]
    Bottom,
}

/// Two-column layout with an identity sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarConfig {
    pub contrast: Contrast,
    pub sidebar_color: &'static str,
    pub accent: &'static str,
}

/// Single-column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinearConfig {
    pub accent: &'static str,
    pub header: HeaderStyle,
    pub typeface: Typeface,
    pub skills: SkillsPlacement,
}

impl LinearConfig {
    pub const fn new(accent: &'static str) -> Self {
        Self {
            accent,
            header: HeaderStyle::Plain,
            typeface: Typeface::Base,
            skills: SkillsPlacement::Bottom,
        }
    }

    pub const fn with_header(mut self, header: HeaderStyle) -> Self {
        self.header = header;
        self
    }

    pub const fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }

    pub const fn with_skills(mut self, skills: SkillsPlacement) -> Self {
        self.skills = skills;
        self
    }
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self::new("#000")
    }
}

/// Colored banner over a two-column body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderAccentConfig {
    pub accent: &'static str,
}

/// An archetype together with its configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "archetype", rename_all = "snake_case")]
pub enum LayoutConfig {
    Sidebar(SidebarConfig),
    Linear(LinearConfig),
    HeaderAccent(HeaderAccentConfig),
}

impl LayoutConfig {
    pub fn archetype(&self) -> Archetype {
        match self {
            LayoutConfig::Sidebar(_) => Archetype::Sidebar,
            LayoutConfig::Linear(_) => Archetype::Linear,
            LayoutConfig::HeaderAccent(_) => Archetype::HeaderAccent,
        }
    }

    /// Accent color injected into headings and highlights
    pub fn accent(&self) -> &'static str {
        match self {
            LayoutConfig::Sidebar(c) => c.accent,
            LayoutConfig::Linear(c) => c.accent,
            LayoutConfig::HeaderAccent(c) => c.accent,
        }
    }
}
