//! Template identifiers and their picker metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::locale::Language;

use super::TemplateError;

/// One visual template. Arabic and English identifiers are disjoint.
///
/// The serialized names are persisted by clients and must stay stable:
/// new identifiers may be added, existing ones never renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateId {
    ArAts,
    ArClassic,
    ArCorporate,
    ArTech,
    ArModernPurple,
    ArDesigner,
    ArBusiness,
    ArFunctional,
    ArMedical,
    ArMinimalClean,
    EnMinimalAts,
    EnModernPro,
    EnExecutive,
    EnTech,
    EnProduct,
    EnCreative,
    EnBusiness,
    EnMedical,
    EnTwoColumn,
    EnSidebarColor,
}

/// Picker grouping for a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Standard,
    Classic,
    Corporate,
    Tech,
    Modern,
    Creative,
    Business,
    Functional,
    Medical,
    Minimal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "Standard",
            Category::Classic => "Classic",
            Category::Corporate => "Corporate",
            Category::Tech => "Tech",
            Category::Modern => "Modern",
            Category::Creative => "Creative",
            Category::Business => "Business",
            Category::Functional => "Functional",
            Category::Medical => "Medical",
            Category::Minimal => "Minimal",
        }
    }
}

impl TemplateId {
    /// Every identifier, in picker order
    pub const ALL: [TemplateId; 20] = [
        TemplateId::ArAts,
        TemplateId::ArClassic,
        TemplateId::ArCorporate,
        TemplateId::ArTech,
        TemplateId::ArModernPurple,
        TemplateId::ArDesigner,
        TemplateId::ArBusiness,
        TemplateId::ArFunctional,
        TemplateId::ArMedical,
        TemplateId::ArMinimalClean,
        TemplateId::EnMinimalAts,
        TemplateId::EnModernPro,
        TemplateId::EnExecutive,
        TemplateId::EnTech,
        TemplateId::EnProduct,
        TemplateId::EnCreative,
        TemplateId::EnBusiness,
        TemplateId::EnMedical,
        TemplateId::EnTwoColumn,
        TemplateId::EnSidebarColor,
    ];

    /// Wire name of the identifier
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ArAts => "AR_ATS",
            TemplateId::ArClassic => "AR_CLASSIC",
            TemplateId::ArCorporate => "AR_CORPORATE",
            TemplateId::ArTech => "AR_TECH",
            TemplateId::ArModernPurple => "AR_MODERN_PURPLE",
            TemplateId::ArDesigner => "AR_DESIGNER",
            TemplateId::ArBusiness => "AR_BUSINESS",
            TemplateId::ArFunctional => "AR_FUNCTIONAL",
            TemplateId::ArMedical => "AR_MEDICAL",
            TemplateId::ArMinimalClean => "AR_MINIMAL_CLEAN",
            TemplateId::EnMinimalAts => "EN_MINIMAL_ATS",
            TemplateId::EnModernPro => "EN_MODERN_PRO",
            TemplateId::EnExecutive => "EN_EXECUTIVE",
            TemplateId::EnTech => "EN_TECH",
            TemplateId::EnProduct => "EN_PRODUCT",
            TemplateId::EnCreative => "EN_CREATIVE",
            TemplateId::EnBusiness => "EN_BUSINESS",
            TemplateId::EnMedical => "EN_MEDICAL",
            TemplateId::EnTwoColumn => "EN_TWO_COLUMN",
            TemplateId::EnSidebarColor => "EN_SIDEBAR_COLOR",
        }
    }

    /// Language partition this template belongs to
    pub fn language(self) -> Language {
        match self {
            TemplateId::ArAts
            | TemplateId::ArClassic
            | TemplateId::ArCorporate
            | TemplateId::ArTech
            | TemplateId::ArModernPurple
            | TemplateId::ArDesigner
            | TemplateId::ArBusiness
            | TemplateId::ArFunctional
            | TemplateId::ArMedical
            | TemplateId::ArMinimalClean => Language::Arabic,
            _ => Language::English,
        }
    }

    /// Name shown in the template picker, in the template's own language
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::ArAts => "ATS قياسي",
            TemplateId::ArClassic => "كلاسيكي رسمي",
            TemplateId::ArCorporate => "شركات كبرى",
            TemplateId::ArTech => "تقني/مبرمج",
            TemplateId::ArModernPurple => "سكور الحديث",
            TemplateId::ArDesigner => "مصمم مبدع",
            TemplateId::ArBusiness => "إداري/أعمال",
            TemplateId::ArFunctional => "وظيفي (مهارات)",
            TemplateId::ArMedical => "طبي/صحي",
            TemplateId::ArMinimalClean => "بسيط ونظيف",
            TemplateId::EnMinimalAts => "Minimal ATS",
            TemplateId::EnModernPro => "Modern Pro",
            TemplateId::EnExecutive => "Executive",
            TemplateId::EnTech => "Tech Lead",
            TemplateId::EnProduct => "Product Manager",
            TemplateId::EnCreative => "Creative Rose",
            TemplateId::EnBusiness => "Business Consultant",
            TemplateId::EnMedical => "Medical Pro",
            TemplateId::EnTwoColumn => "Classic Split",
            TemplateId::EnSidebarColor => "Bold Sidebar",
        }
    }

    pub fn category(self) -> Category {
        match self {
            TemplateId::ArAts | TemplateId::EnMinimalAts => Category::Standard,
            TemplateId::ArClassic | TemplateId::EnTwoColumn => Category::Classic,
            TemplateId::ArCorporate | TemplateId::EnExecutive => Category::Corporate,
            TemplateId::ArTech | TemplateId::EnTech => Category::Tech,
            TemplateId::ArModernPurple | TemplateId::EnModernPro | TemplateId::EnSidebarColor => {
                Category::Modern
            }
            TemplateId::ArDesigner | TemplateId::EnCreative => Category::Creative,
            TemplateId::ArBusiness | TemplateId::EnProduct | TemplateId::EnBusiness => {
                Category::Business
            }
            TemplateId::ArFunctional => Category::Functional,
            TemplateId::ArMedical | TemplateId::EnMedical => Category::Medical,
            TemplateId::ArMinimalClean => Category::Minimal,
        }
    }

    /// Identifiers of one language partition, in picker order
    pub fn for_language(language: Language) -> impl Iterator<Item = TemplateId> {
        Self::ALL
            .into_iter()
            .filter(move |id| id.language() == language)
    }

    /// Template preselected when a record switches to `language`
    pub fn default_for(language: Language) -> TemplateId {
        match language {
            Language::Arabic => TemplateId::ArAts,
            Language::English => TemplateId::EnMinimalAts,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = TemplateError;

    /// Exact wire name only; `ar_tech` or ` AR_TECH ` are not identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TemplateError::Unknown { id: s.to_string() })
    }
}

/// The template a record asks for.
///
/// Records persisted by newer clients, or corrupted ones, can name a
/// template this build does not know. Such values are kept verbatim and
/// rendered through the registry fallback instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateRef {
    Known(TemplateId),
    Unrecognized(String),
}

impl TemplateRef {
    /// Parse a wire value; never fails
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<TemplateId>() {
            Ok(id) => TemplateRef::Known(id),
            Err(_) => TemplateRef::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<TemplateId> {
        match self {
            TemplateRef::Known(id) => Some(*id),
            TemplateRef::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemplateRef::Known(id) => id.as_str(),
            TemplateRef::Unrecognized(raw) => raw,
        }
    }
}

impl Default for TemplateRef {
    fn default() -> Self {
        TemplateRef::Known(TemplateId::ArAts)
    }
}

impl From<TemplateId> for TemplateRef {
    fn from(id: TemplateId) -> Self {
        TemplateRef::Known(id)
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Any scalar a client may have persisted as a template id
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemplateRef {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Null(()),
}

impl<'de> Deserialize<'de> for TemplateRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match RawTemplateRef::deserialize(deserializer)? {
            RawTemplateRef::Text(s) => s,
            RawTemplateRef::Integer(n) => n.to_string(),
            RawTemplateRef::Float(n) => n.to_string(),
            RawTemplateRef::Flag(b) => b.to_string(),
            RawTemplateRef::Null(()) => String::new(),
        };
        Ok(TemplateRef::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for id in TemplateId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("AR_TECH".parse::<TemplateId>().unwrap(), TemplateId::ArTech);
        for raw in ["ar_tech", " AR_TECH ", "Ar_Tech", "EN_NOPE"] {
            assert!(
                matches!(raw.parse::<TemplateId>(), Err(TemplateError::Unknown { .. })),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_near_miss_wire_value_is_kept_verbatim() {
        let r: TemplateRef = serde_json::from_str(r#"" EN_TECH ""#).unwrap();
        assert_eq!(r, TemplateRef::Unrecognized(" EN_TECH ".to_string()));
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"" EN_TECH ""#);
    }

    #[test]
    fn test_partitions_are_disjoint_and_complete() {
        let arabic: Vec<_> = TemplateId::for_language(Language::Arabic).collect();
        let english: Vec<_> = TemplateId::for_language(Language::English).collect();
        assert_eq!(arabic.len(), 10);
        assert_eq!(english.len(), 10);
        assert!(arabic.iter().all(|id| !english.contains(id)));
        assert!(arabic.iter().all(|id| id.as_str().starts_with("AR_")));
        assert!(english.iter().all(|id| id.as_str().starts_with("EN_")));
    }

    #[test]
    fn test_default_templates_match_language() {
        for lang in [Language::Arabic, Language::English] {
            assert_eq!(TemplateId::default_for(lang).language(), lang);
        }
    }

    #[test]
    fn test_template_ref_keeps_unknown_values() {
        let r: TemplateRef = serde_json::from_str("9999").unwrap();
        assert_eq!(r, TemplateRef::Unrecognized("9999".to_string()));
        assert_eq!(r.known(), None);

        let r: TemplateRef = serde_json::from_str(r#""EN_FUTURE_LAYOUT""#).unwrap();
        assert_eq!(r.as_str(), "EN_FUTURE_LAYOUT");

        let r: TemplateRef = serde_json::from_str("null").unwrap();
        assert_eq!(r, TemplateRef::Unrecognized(String::new()));
    }

    #[test]
    fn test_template_ref_known_round_trip() {
        let r: TemplateRef = serde_json::from_str(r#""AR_MEDICAL""#).unwrap();
        assert_eq!(r.known(), Some(TemplateId::ArMedical));
        assert_eq!(serde_json::to_string(&r).unwrap(), r#""AR_MEDICAL""#);
    }
}
