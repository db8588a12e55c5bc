//! Neutral palette for rendered documents
//!
//! Accent colors come from the template registry. Everything else a layout
//! paints (body text grays, rules, chip and card backgrounds) is looked up
//! here by token, so a host can re-skin the neutrals from a TOML file
//! without touching any template.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping palette tokens to concrete colors
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default neutrals: gray text scale, light rules, white cards
const DEFAULT_PALETTE: &[(&str, &str)] = &[
    // Text on light surfaces
    ("text-1", "#1f2937"),
    ("text-2", "#4b5563"),
    ("text-3", "#9ca3af"),
    ("text-strong", "#111827"),
    // Text on dark surfaces
    ("text-light", "#ffffff"),
    ("text-light-2", "#d1d5db"),
    ("text-light-3", "#9ca3af"),
    // Surfaces
    ("background-1", "#ffffff"),
    ("background-2", "#f3f4f6"),
    ("background-3", "#f9fafb"),
    // Rules and borders
    ("rule-1", "#9ca3af"),
    ("rule-2", "#e5e7eb"),
    ("rule-3", "#f3f4f6"),
    ("rule-strong", "#1f2937"),
    ("rule-inverse", "rgba(255, 255, 255, 0.2)"),
    // Skill chips
    ("chip-light", "#ffffff"),
    ("chip-dark", "rgba(255, 255, 255, 0.1)"),
];

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a palette token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a palette token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (text → #1f2937, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        if let Some((_, color)) = DEFAULT_PALETTE.iter().find(|(t, _)| *t == token) {
            return color.to_string();
        }

        if token.starts_with("text") {
            return "#1f2937".to_string();
        }
        if token.starts_with("background") || token.starts_with("chip") {
            return "#ffffff".to_string();
        }
        if token.starts_with("rule") {
            return "#d1d5db".to_string();
        }

        // Unknown category - return dark gray
        "#333333".to_string()
    }

    /// Every token this stylesheet resolves, defaults included, sorted
    pub fn merged(&self) -> BTreeMap<String, String> {
        let mut all: BTreeMap<String, String> = DEFAULT_PALETTE
            .iter()
            .map(|(t, c)| (t.to_string(), c.to_string()))
            .collect();
        all.extend(self.colors.clone());
        all
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: Some("default".to_string()),
            description: None,
            colors: DEFAULT_PALETTE
                .iter()
                .map(|(t, c)| (t.to_string(), c.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: BTreeMap::new(),
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert!(stylesheet.colors.contains_key("text-1"));
        assert!(stylesheet.colors.contains_key("background-1"));
        assert!(stylesheet.colors.contains_key("rule-1"));
        assert!(stylesheet.colors.contains_key("chip-dark"));
    }

    #[test]
    fn test_resolve_existing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("text-2"), Some("#4b5563"));
        assert_eq!(stylesheet.resolve("text-light"), Some("#ffffff"));
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        assert_eq!(empty().resolve_or_default("text-2"), "#4b5563");
    }

    #[test]
    fn test_resolve_or_default_category_fallback() {
        let empty = empty();
        assert_eq!(empty.resolve_or_default("text-99"), "#1f2937");
        assert_eq!(empty.resolve_or_default("background-custom"), "#ffffff");
        assert_eq!(empty.resolve_or_default("rule-custom"), "#d1d5db");
        assert_eq!(empty.resolve_or_default("whatever"), "#333333");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Warm"
description = "Warm grays"

[colors]
text-1 = "#292524"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Warm".to_string()));
        assert_eq!(stylesheet.description, Some("Warm grays".to_string()));
        assert_eq!(stylesheet.resolve("text-1"), Some("#292524"));
        assert_eq!(stylesheet.resolve_or_default("text-2"), "#4b5563");
    }

    #[test]
    fn test_merged_overrides_defaults() {
        let stylesheet = Stylesheet::from_str("[colors]\nrule-1 = \"#000000\"\n").unwrap();
        let merged = stylesheet.merged();
        assert_eq!(merged.get("rule-1").map(String::as_str), Some("#000000"));
        assert_eq!(merged.get("text-1").map(String::as_str), Some("#1f2937"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
