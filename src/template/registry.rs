//! Template registry: identifier -> archetype and configuration
//!
//! The table is compiled in and exhaustive over [`TemplateId`]. Adding an
//! identifier without a row here is a compile error. Rows are part of the
//! persisted contract: once shipped, a row's archetype and colors stay.

use tracing::debug;

use crate::layout::config::{
    Contrast, HeaderAccentConfig, HeaderStyle, LayoutConfig, LinearConfig, SidebarConfig,
    SkillsPlacement, Typeface,
};

use super::{TemplateId, TemplateRef};

/// Configuration used for identifiers outside the table
pub const FALLBACK: LayoutConfig = LayoutConfig::Linear(LinearConfig::new("#000"));

const fn sidebar(
    contrast: Contrast,
    sidebar_color: &'static str,
    accent: &'static str,
) -> LayoutConfig {
    LayoutConfig::Sidebar(SidebarConfig {
        contrast,
        sidebar_color,
        accent,
    })
}

const fn header_accent(accent: &'static str) -> LayoutConfig {
    LayoutConfig::HeaderAccent(HeaderAccentConfig { accent })
}

const fn linear(config: LinearConfig) -> LayoutConfig {
    LayoutConfig::Linear(config)
}

/// The registry row of a known template
pub const fn entry(id: TemplateId) -> LayoutConfig {
    use Contrast::{Dark, Light};

    match id {
        TemplateId::ArAts => linear(LinearConfig::new("#000")),
        TemplateId::ArClassic => linear(
            LinearConfig::new("#1F2937")
                .with_typeface(Typeface::Serif)
                .with_header(HeaderStyle::Bordered),
        ),
        TemplateId::ArCorporate => header_accent("#1e3a8a"),
        TemplateId::ArTech => sidebar(Dark, "#111827", "#10B981"),
        TemplateId::ArDesigner => sidebar(Light, "#FDF2F8", "#DB2777"),
        TemplateId::ArBusiness => header_accent("#7C2D12"),
        TemplateId::ArFunctional => {
            linear(LinearConfig::new("#4B5563").with_skills(SkillsPlacement::Top))
        }
        TemplateId::ArModernPurple => sidebar(Light, "#F3E8FF", "#7C3AED"),
        TemplateId::ArMinimalClean => {
            linear(LinearConfig::new("#000").with_header(HeaderStyle::Plain))
        }
        TemplateId::ArMedical => header_accent("#0F766E"),

        TemplateId::EnModernPro => sidebar(Dark, "#1e293b", "#3b82f6"),
        TemplateId::EnMinimalAts => linear(LinearConfig::new("#000").with_typeface(Typeface::Serif)),
        TemplateId::EnExecutive => header_accent("#0f172a"),
        TemplateId::EnTech => sidebar(Dark, "#000", "#22c55e"),
        TemplateId::EnProduct => {
            linear(LinearConfig::new("#2563eb").with_header(HeaderStyle::Bordered))
        }
        TemplateId::EnCreative => sidebar(Light, "#fff1f2", "#e11d48"),
        TemplateId::EnBusiness => header_accent("#1d4ed8"),
        TemplateId::EnMedical => header_accent("#0891b2"),
        TemplateId::EnTwoColumn => sidebar(Light, "#f3f4f6", "#374151"),
        TemplateId::EnSidebarColor => sidebar(Dark, "#4f46e5", "#4f46e5"),
    }
}

/// Resolve any template reference. Unrecognized values get [`FALLBACK`].
pub fn config_for(template: &TemplateRef) -> LayoutConfig {
    match template {
        TemplateRef::Known(id) => {
            let config = entry(*id);
            debug!(template = %id, archetype = config.archetype().as_str(), "resolved template");
            config
        }
        TemplateRef::Unrecognized(raw) => {
            debug!(template = %raw, "unrecognized template, using linear fallback");
            FALLBACK
        }
    }
}

/// Read-only view over the registry table, for listings
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Every (identifier, configuration) row in picker order
    pub fn entries(&self) -> impl Iterator<Item = (TemplateId, LayoutConfig)> {
        TemplateId::ALL.into_iter().map(|id| (id, entry(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Archetype;

    #[test]
    fn test_every_id_has_a_row() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.entries().count(), TemplateId::ALL.len());
    }

    #[test]
    fn test_archetype_assignments() {
        assert_eq!(entry(TemplateId::ArAts).archetype(), Archetype::Linear);
        assert_eq!(entry(TemplateId::ArTech).archetype(), Archetype::Sidebar);
        assert_eq!(entry(TemplateId::ArCorporate).archetype(), Archetype::HeaderAccent);
        assert_eq!(entry(TemplateId::EnSidebarColor).archetype(), Archetype::Sidebar);
        assert_eq!(entry(TemplateId::EnProduct).archetype(), Archetype::Linear);
    }

    #[test]
    fn test_functional_puts_skills_on_top() {
        match entry(TemplateId::ArFunctional) {
            LayoutConfig::Linear(c) => assert_eq!(c.skills, SkillsPlacement::Top),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_sidebar_contrast_modes() {
        match entry(TemplateId::EnTech) {
            LayoutConfig::Sidebar(c) => {
                assert_eq!(c.contrast, Contrast::Dark);
                assert_eq!(c.accent, "#22c55e");
            }
            other => panic!("unexpected {other:?}"),
        }
        match entry(TemplateId::ArDesigner) {
            LayoutConfig::Sidebar(c) => assert_eq!(c.contrast, Contrast::Light),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_falls_back_to_black_linear() {
        let config = config_for(&TemplateRef::parse("9999"));
        assert_eq!(config, FALLBACK);
        match config {
            LayoutConfig::Linear(c) => {
                assert_eq!(c.accent, "#000");
                assert_eq!(c.header, HeaderStyle::Plain);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_known_lookup_is_stable() {
        for id in TemplateId::ALL {
            assert_eq!(config_for(&id.into()), entry(id));
        }
    }
}
