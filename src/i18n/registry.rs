//! Language registry: Single source of truth for language metadata.
//!
//! The set of languages is fixed by the [`Language`] enum; the registry attaches
//! display metadata to each of them. It uses a singleton pattern with `OnceLock`
//! so the table is built once and shared by every caller.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    #[serde(skip)]
    pub language: Language,

    /// ISO 639-1 language code (e.g., "es", "eu")
    pub code: &'static str,

    /// English name of the language (e.g., "Catalan")
    pub name: &'static str,

    /// Native name of the language (e.g., "Català")
    pub native_name: &'static str,

    /// Whether pages in this language are served without a path prefix
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    /// One entry per language, in `Language::ALL` order
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: Language::ALL.into_iter().map(language_config).collect(),
        })
    }

    /// Metadata for a language. Total because every variant has an entry.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language as usize]
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, default first, in switcher order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// The configuration of the unprefixed language.
    pub fn default_language(&self) -> &LanguageConfig {
        self.config(Language::DEFAULT)
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn language_config(language: Language) -> LanguageConfig {
    let (name, native_name) = match language {
        Language::Spanish => ("Spanish", "Español"),
        Language::English => ("English", "English"),
        Language::Portuguese => ("Portuguese", "Português"),
        Language::Catalan => ("Catalan", "Català"),
        Language::French => ("French", "Français"),
        Language::Basque => ("Basque", "Euskara"),
    };

    LanguageConfig {
        language,
        code: language.code(),
        name,
        native_name,
        is_default: language.is_default(),
    }
}
