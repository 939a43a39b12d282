//! i18n - Internationalization Module
//!
//! Supported languages, the closed set of message keys, and the message
//! catalogs loaded once from the embedded `locales/` directory.
//!
//! Lookup policy: a key missing from the requested language's catalog falls
//! back to the English catalog. English is checked at load time to define
//! every [`MessageKey`], so typed lookups always produce text. Free-form keys
//! coming from page content fall back to English and then to the key itself.

mod resolve;
mod store;

pub use resolve::*;
pub use store::*;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::{self, LocaleFiles};
use crate::error::{Error, Result};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    /// English
    #[default]
    En,
    /// Portuguese
    Pt,
    /// Spanish
    Es,
}

impl SupportedLanguage {
    /// All supported languages, in the order the language switcher shows them
    pub const ALL: [SupportedLanguage; 3] = [
        SupportedLanguage::En,
        SupportedLanguage::Pt,
        SupportedLanguage::Es,
    ];

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            SupportedLanguage::En => "en",
            SupportedLanguage::Pt => "pt",
            SupportedLanguage::Es => "es",
        }
    }

    /// Name of the language in that language
    pub fn display_name(self) -> &'static str {
        match self {
            SupportedLanguage::En => "English",
            SupportedLanguage::Pt => "Português",
            SupportedLanguage::Es => "Español",
        }
    }

    /// Match a code exactly (`"pt"`), returning `None` for anything else
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage {
            value: s.to_string(),
        })
    }
}

/// Every message the page displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    AppSubtitle,
    ProfileTitle,
    FeaturesTitle,
    FeaturesTheme,
    FeaturesAccessibility,
    FeaturesTypescript,
    FeaturesTesting,
    FeaturesI18n,
    SectionsProjects,
    SectionsSocial,
    ThemeToggle,
    ThemeLight,
    ThemeDark,
    LanguageLabel,
    FooterCopyright,
}

impl MessageKey {
    pub const ALL: [MessageKey; 16] = [
        MessageKey::AppTitle,
        MessageKey::AppSubtitle,
        MessageKey::ProfileTitle,
        MessageKey::FeaturesTitle,
        MessageKey::FeaturesTheme,
        MessageKey::FeaturesAccessibility,
        MessageKey::FeaturesTypescript,
        MessageKey::FeaturesTesting,
        MessageKey::FeaturesI18n,
        MessageKey::SectionsProjects,
        MessageKey::SectionsSocial,
        MessageKey::ThemeToggle,
        MessageKey::ThemeLight,
        MessageKey::ThemeDark,
        MessageKey::LanguageLabel,
        MessageKey::FooterCopyright,
    ];

    /// Dotted catalog key
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app.title",
            MessageKey::AppSubtitle => "app.subtitle",
            MessageKey::ProfileTitle => "profile.title",
            MessageKey::FeaturesTitle => "features.title",
            MessageKey::FeaturesTheme => "features.theme",
            MessageKey::FeaturesAccessibility => "features.accessibility",
            MessageKey::FeaturesTypescript => "features.typescript",
            MessageKey::FeaturesTesting => "features.testing",
            MessageKey::FeaturesI18n => "features.i18n",
            MessageKey::SectionsProjects => "sections.projects",
            MessageKey::SectionsSocial => "sections.social",
            MessageKey::ThemeToggle => "theme.toggle",
            MessageKey::ThemeLight => "theme.light",
            MessageKey::ThemeDark => "theme.dark",
            MessageKey::LanguageLabel => "language.label",
            MessageKey::FooterCopyright => "footer.copyright",
        }
    }
}

/// A flat key -> text table for one language
pub type TranslationTable = HashMap<String, String>;

/// Message catalogs for all supported languages
#[derive(Debug, Clone)]
pub struct Catalogs {
    tables: HashMap<SupportedLanguage, TranslationTable>,
}

impl Catalogs {
    /// Load the catalogs bundled into the binary
    pub fn embedded() -> Result<Self> {
        let mut tables = Vec::with_capacity(SupportedLanguage::ALL.len());
        for lang in SupportedLanguage::ALL {
            let data = assets::load::<LocaleFiles>(&format!("{lang}.json"))?;
            tables.push((lang, Self::parse(lang, &data)?));
        }
        Self::from_tables(tables)
    }

    /// Build catalogs from already-parsed tables.
    ///
    /// Fails when English is absent or does not define every [`MessageKey`].
    pub fn from_tables(
        tables: impl IntoIterator<Item = (SupportedLanguage, TranslationTable)>,
    ) -> Result<Self> {
        let tables: HashMap<_, _> = tables.into_iter().collect();

        let Some(english) = tables.get(&SupportedLanguage::En) else {
            return Err(Error::Catalog {
                message: "English catalog is missing".to_string(),
            });
        };

        let missing: Vec<&str> = MessageKey::ALL
            .iter()
            .map(|key| key.as_str())
            .filter(|key| !english.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Catalog {
                message: format!("English catalog lacks keys: {}", missing.join(", ")),
            });
        }

        for (lang, table) in &tables {
            debug!(lang = %lang, keys = table.len(), "Catalog loaded");
        }

        Ok(Self { tables })
    }

    /// Parse one catalog file: a flat JSON object of string values
    pub fn parse(lang: SupportedLanguage, data: &[u8]) -> Result<TranslationTable> {
        serde_json::from_slice(data).map_err(|e| Error::Catalog {
            message: format!("{lang}.json: {e}"),
        })
    }

    /// Translate a typed key, falling back to English
    pub fn translate(&self, key: MessageKey, lang: SupportedLanguage) -> &str {
        self.lookup(key.as_str(), lang)
    }

    /// Translate a free-form key: requested language, then English, then the key itself
    pub fn lookup<'a>(&'a self, key: &'a str, lang: SupportedLanguage) -> &'a str {
        self.get(key, lang)
            .or_else(|| self.get(key, SupportedLanguage::En))
            .unwrap_or(key)
    }

    /// Key set defined by one language's catalog
    pub fn keys(&self, lang: SupportedLanguage) -> BTreeSet<&str> {
        self.tables
            .get(&lang)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn get(&self, key: &str, lang: SupportedLanguage) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> TranslationTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete_english() -> TranslationTable {
        MessageKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), format!("en:{}", key.as_str())))
            .collect()
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in SupportedLanguage::ALL {
            assert_eq!(lang.code().parse::<SupportedLanguage>().ok(), Some(lang));
        }
    }

    #[test]
    fn test_unsupported_language_rejected() {
        for value in ["fr", "EN", "pt-BR", ""] {
            let err = value.parse::<SupportedLanguage>().expect_err(value);
            assert!(matches!(err, Error::UnsupportedLanguage { .. }));
        }
    }

    #[test]
    fn test_embedded_catalogs_share_key_set() {
        let catalogs = Catalogs::embedded().expect("embedded catalogs load");
        let english = catalogs.keys(SupportedLanguage::En);
        assert!(!english.is_empty());
        for lang in [SupportedLanguage::Pt, SupportedLanguage::Es] {
            assert_eq!(catalogs.keys(lang), english, "key set differs for {lang}");
        }
    }

    #[test]
    fn test_embedded_english_defines_every_message_key() {
        let catalogs = Catalogs::embedded().expect("embedded catalogs load");
        let english = catalogs.keys(SupportedLanguage::En);
        for key in MessageKey::ALL {
            assert!(english.contains(key.as_str()), "missing {}", key.as_str());
        }
    }

    #[test]
    fn test_translate_each_language() {
        let catalogs = Catalogs::embedded().expect("embedded catalogs load");
        assert_eq!(
            catalogs.translate(MessageKey::ProfileTitle, SupportedLanguage::En),
            "Software Engineering"
        );
        assert_eq!(
            catalogs.translate(MessageKey::ProfileTitle, SupportedLanguage::Pt),
            "Engenharia de Software"
        );
        assert_eq!(
            catalogs.translate(MessageKey::ProfileTitle, SupportedLanguage::Es),
            "Ingeniería de Software"
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        let catalogs = Catalogs::from_tables([
            (SupportedLanguage::En, complete_english()),
            (SupportedLanguage::Pt, table(&[("app.title", "Título")])),
        ])
        .expect("valid catalogs");

        assert_eq!(
            catalogs.translate(MessageKey::AppTitle, SupportedLanguage::Pt),
            "Título"
        );
        assert_eq!(
            catalogs.translate(MessageKey::FooterCopyright, SupportedLanguage::Pt),
            "en:footer.copyright"
        );
        // Spanish has no table at all
        assert_eq!(
            catalogs.translate(MessageKey::AppTitle, SupportedLanguage::Es),
            "en:app.title"
        );
    }

    #[test]
    fn test_unknown_free_form_key_returns_key() {
        let catalogs = Catalogs::embedded().expect("embedded catalogs load");
        assert_eq!(
            catalogs.lookup("Open Source", SupportedLanguage::Pt),
            "Open Source"
        );
    }

    #[test]
    fn test_incomplete_english_is_rejected() {
        let err = Catalogs::from_tables([(SupportedLanguage::En, table(&[("app.title", "x")]))])
            .expect_err("english incomplete");
        assert!(err.to_string().contains("footer.copyright"));

        let err = Catalogs::from_tables([(SupportedLanguage::Pt, complete_english())])
            .expect_err("english missing");
        assert!(matches!(err, Error::Catalog { .. }));
    }

    #[test]
    fn test_nested_catalog_is_rejected() {
        let err = Catalogs::parse(SupportedLanguage::Es, br#"{"app": {"title": "x"}}"#)
            .expect_err("nested objects are not flat");
        assert!(err.to_string().starts_with("Catalog error: es.json"));
    }
}
