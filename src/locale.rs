//! Localization resolver
//!
//! Maps a record language to the writing direction, base font family and
//! section labels every layout needs. Labels are static data: one full set
//! per language, no interpolation.

use serde::{Deserialize, Serialize};

/// Language of a résumé record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar", alias = "arabic", alias = "Arabic")]
    Arabic,
    #[serde(rename = "en", alias = "english", alias = "English")]
    English,
}

impl Language {
    /// BCP 47 primary language subtag
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}

/// Writing direction of a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Font family class applied to a whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Base family for Arabic records
    Arabic,
    /// Base family for English records
    English,
    /// Serif substitution for Latin-script templates
    Serif,
}

impl FontFamily {
    /// CSS `font-family` stack for this class
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Arabic => "'Tajawal', 'Noto Sans Arabic', sans-serif",
            FontFamily::English => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Serif => "'Merriweather', Georgia, 'Times New Roman', serif",
        }
    }
}

/// Section of a résumé that carries a localized title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Contact,
}

/// Section titles for one language
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub contact: &'static str,
}

impl Labels {
    pub fn get(&self, key: SectionKey) -> &'static str {
        match key {
            SectionKey::Summary => self.summary,
            SectionKey::Experience => self.experience,
            SectionKey::Education => self.education,
            SectionKey::Skills => self.skills,
            SectionKey::Contact => self.contact,
        }
    }
}

static ARABIC_LABELS: Labels = Labels {
    summary: "الملخص المهني",
    experience: "الخبرات العملية",
    education: "التعليم والمؤهلات",
    skills: "المهارات",
    contact: "معلومات التواصل",
};

static ENGLISH_LABELS: Labels = Labels {
    summary: "Professional Summary",
    experience: "Work Experience",
    education: "Education",
    skills: "Skills",
    contact: "Contact Info",
};

/// Everything a layout needs to know about the record's language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub language: Language,
    pub direction: Direction,
    pub font: FontFamily,
    pub labels: &'static Labels,
}

impl Localized {
    pub fn label(&self, key: SectionKey) -> &'static str {
        self.labels.get(key)
    }
}

/// Resolve direction, font and labels for a language
pub fn resolve(language: Language) -> Localized {
    match language {
        Language::Arabic => Localized {
            language,
            direction: Direction::Rtl,
            font: FontFamily::Arabic,
            labels: &ARABIC_LABELS,
        },
        Language::English => Localized {
            language,
            direction: Direction::Ltr,
            font: FontFamily::English,
            labels: &ENGLISH_LABELS,
        },
    }
}
