//! Initial locale resolution
//!
//! Precedence: stored preference, then the client's reported language, then English.

use locale_config::Locale;
use tracing::{debug, warn};

use super::SupportedLanguage;
use crate::constants::PREFERRED_LANGUAGE_KEY;
use crate::utils::preferences::PreferenceStorage;

/// Where the page is being opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientContext {
    /// No interactive client (pre-render, static export)
    Headless,
    /// An interactive client, with the language it reports (e.g. `en-US`)
    Interactive { reported_language: Option<String> },
}

impl ClientContext {
    /// Interactive context reporting the operating system's user locale
    pub fn system() -> Self {
        let reported = Locale::current().to_string();
        debug!(locale = %reported, "Detected system locale");
        // locale_config may report several comma-separated ranges
        let first = reported.split(',').next().unwrap_or_default().trim();
        ClientContext::Interactive {
            reported_language: (!first.is_empty()).then(|| first.to_string()),
        }
    }

    /// Interactive context reporting a fixed language tag
    pub fn reporting(tag: impl Into<String>) -> Self {
        ClientContext::Interactive {
            reported_language: Some(tag.into()),
        }
    }
}

/// Primary subtag of a language tag: `en-US` -> `en`, `pt_BR` -> `pt`
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Resolve the language a page opens in
pub fn resolve_initial_language(
    context: &ClientContext,
    storage: &dyn PreferenceStorage,
) -> SupportedLanguage {
    let ClientContext::Interactive { reported_language } = context else {
        return SupportedLanguage::En;
    };

    match storage.get(PREFERRED_LANGUAGE_KEY) {
        Ok(Some(stored)) => match SupportedLanguage::from_code(&stored) {
            Some(lang) => return lang,
            None => debug!(value = %stored, "Ignoring unsupported stored language"),
        },
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Could not read stored language preference"),
    }

    reported_language
        .as_deref()
        .and_then(|tag| SupportedLanguage::from_code(&primary_subtag(tag)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::preferences::{MemoryStorage, UnavailableStorage};

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("en-US"), "en");
        assert_eq!(primary_subtag("pt_BR"), "pt");
        assert_eq!(primary_subtag("ES"), "es");
        assert_eq!(primary_subtag(""), "");
    }

    #[test]
    fn test_headless_is_english() {
        let storage = MemoryStorage::new().with(PREFERRED_LANGUAGE_KEY, "pt");
        assert_eq!(
            resolve_initial_language(&ClientContext::Headless, &storage),
            SupportedLanguage::En
        );
    }

    #[test]
    fn test_stored_preference_wins_over_reported() {
        let storage = MemoryStorage::new().with(PREFERRED_LANGUAGE_KEY, "es");
        assert_eq!(
            resolve_initial_language(&ClientContext::reporting("pt-BR"), &storage),
            SupportedLanguage::Es
        );
    }

    #[test]
    fn test_reported_language_used_without_preference() {
        let storage = MemoryStorage::new();
        assert_eq!(
            resolve_initial_language(&ClientContext::reporting("pt-BR"), &storage),
            SupportedLanguage::Pt
        );
    }

    #[test]
    fn test_unsupported_stored_value_falls_through() {
        let storage = MemoryStorage::new().with(PREFERRED_LANGUAGE_KEY, "fr");
        assert_eq!(
            resolve_initial_language(&ClientContext::reporting("es-MX"), &storage),
            SupportedLanguage::Es
        );
    }

    #[test]
    fn test_default_is_english() {
        let storage = MemoryStorage::new();
        assert_eq!(
            resolve_initial_language(&ClientContext::reporting("de-DE"), &storage),
            SupportedLanguage::En
        );
        let silent = ClientContext::Interactive {
            reported_language: None,
        };
        assert_eq!(
            resolve_initial_language(&silent, &storage),
            SupportedLanguage::En
        );
    }

    #[test]
    fn test_unavailable_storage_uses_reported_language() {
        assert_eq!(
            resolve_initial_language(&ClientContext::reporting("es"), &UnavailableStorage),
            SupportedLanguage::Es
        );
    }
}
