//! Language type: the closed set of languages the site is published in.
//!
//! Every supported language is a variant of [`Language`], so matches over
//! languages are checked exhaustively. The default language is served without
//! a URL prefix; every other language is addressed as `/<code>/...`.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a code is not one of the supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{code}'")]
pub struct UnknownLanguageError {
    pub code: String,
}

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Spanish,
    English,
    Portuguese,
    Catalan,
    French,
    Basque,
}

impl Language {
    /// All supported languages, in the order the language switcher lists them.
    pub const ALL: [Language; 6] = [
        Language::Spanish,
        Language::English,
        Language::Portuguese,
        Language::Catalan,
        Language::French,
        Language::Basque,
    ];

    /// The language served at unprefixed paths.
    pub const DEFAULT: Language = Language::Spanish;

    /// Create a Language from its ISO 639-1 code.
    ///
    /// # Example
    /// ```
    /// use localized_site::i18n::Language;
    ///
    /// assert_eq!(Language::from_code("fr").unwrap(), Language::French);
    /// assert!(Language::from_code("de").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, UnknownLanguageError> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| UnknownLanguageError {
                code: code.to_string(),
            })
    }

    /// The ISO 639-1 code, which is also the URL prefix segment.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::Catalan => "ca",
            Language::French => "fr",
            Language::Basque => "eu",
        }
    }

    /// Whether this language is served without a path prefix.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Languages that carry a `/<code>` prefix, in enumeration order.
    pub fn non_default() -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(|lang| !lang.is_default())
    }

    /// Full registry metadata for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// English name of the language (e.g., "Basque").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in itself (e.g., "Euskara").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(serde::de::Error::custom)
    }
}
