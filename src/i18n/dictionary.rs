//! Per-language text dictionaries.
//!
//! Each language has one JSON document of (possibly nested) keys. Documents are
//! flattened into dotted keys (`nav.home`) and collected into a
//! [`DictionaryRegistry`] that is built once at startup and shared by reference.

use crate::i18n::Language;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{language}' dictionary: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("The '{0}' dictionary must be a JSON object")]
    NotAnObject(Language),
}

/// Bundled dictionaries, in `Language::ALL` order
const EMBEDDED: [&str; 6] = [
    include_str!("../../dictionaries/es.json"),
    include_str!("../../dictionaries/en.json"),
    include_str!("../../dictionaries/pt.json"),
    include_str!("../../dictionaries/ca.json"),
    include_str!("../../dictionaries/fr.json"),
    include_str!("../../dictionaries/eu.json"),
];

/// Localized text for one language, keyed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    language: Language,
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Parse a JSON object into a flat dictionary.
    ///
    /// Strings are kept as-is, numbers and booleans are rendered as text, array
    /// elements are keyed by index and `null` values are skipped.
    pub fn from_json(language: Language, text: &str) -> Result<Self, DictionaryError> {
        let root: Value = serde_json::from_str(text)
            .map_err(|source| DictionaryError::Parse { language, source })?;

        let Value::Object(map) = root else {
            return Err(DictionaryError::NotAnObject(language));
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            flatten_into(&mut entries, key, value);
        }

        Ok(Self { language, entries })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` and substitute its `{name}` placeholders.
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let template = self.get(key)?;
        Some(
            args.iter()
                .fold(template.to_string(), |text, (name, value)| {
                    text.replace(&format!("{{{}}}", name), value)
                }),
        )
    }
}

fn flatten_into(entries: &mut BTreeMap<String, String>, key: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                flatten_into(entries, format!("{}.{}", key, child), value);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.into_iter().enumerate() {
                flatten_into(entries, format!("{}.{}", key, index), value);
            }
        }
        Value::String(text) => {
            entries.insert(key, text);
        }
        Value::Number(number) => {
            entries.insert(key, number.to_string());
        }
        Value::Bool(flag) => {
            entries.insert(key, flag.to_string());
        }
        Value::Null => {}
    }
}

/// Immutable set of dictionaries, one per supported language.
#[derive(Debug, Clone)]
pub struct DictionaryRegistry {
    /// Indexed by `Language as usize`
    dictionaries: Vec<Dictionary>,
}

impl DictionaryRegistry {
    /// Build a registry from a loader called once per language.
    pub fn try_from_fn<F>(mut load: F) -> Result<Self, DictionaryError>
    where
        F: FnMut(Language) -> Result<Dictionary, DictionaryError>,
    {
        let dictionaries = Language::ALL
            .into_iter()
            .map(&mut load)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dictionaries })
    }

    /// The dictionaries bundled into the binary.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::try_from_fn(|lang| Dictionary::from_json(lang, EMBEDDED[lang as usize]))
    }

    /// Read `<code>.json` for every supported language from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, DictionaryError> {
        Self::try_from_fn(|lang| {
            let path = dir.join(format!("{}.json", lang.code()));
            debug!("Loading '{}' dictionary from {}", lang, path.display());

            let text = std::fs::read_to_string(&path)
                .map_err(|source| DictionaryError::Io { path, source })?;
            Dictionary::from_json(lang, &text)
        })
    }

    /// Load from `dir` when given, otherwise use the bundled dictionaries.
    pub fn load(dir: Option<&Path>) -> Result<Self, DictionaryError> {
        let registry = match dir {
            Some(dir) => {
                info!("Loading dictionaries from {}", dir.display());
                Self::from_dir(dir)?
            }
            None => {
                info!("Using embedded dictionaries");
                Self::embedded()?
            }
        };

        for dictionary in &registry.dictionaries {
            debug!(
                "Dictionary '{}' has {} keys",
                dictionary.language(),
                dictionary.len()
            );
        }

        Ok(registry)
    }

    /// The dictionary for `lang`.
    pub fn get(&self, lang: Language) -> &Dictionary {
        &self.dictionaries[lang as usize]
    }

    /// The dictionary of the default language.
    pub fn default_dictionary(&self) -> &Dictionary {
        self.get(Language::DEFAULT)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        self.dictionaries.iter()
    }

    /// Look up `key` in `lang`, falling back to the default language.
    pub fn translate(&self, lang: Language, key: &str) -> Option<&str> {
        if let Some(text) = self.get(lang).get(key) {
            return Some(text);
        }
        if lang.is_default() {
            return None;
        }

        let fallback = self.default_dictionary().get(key);
        if fallback.is_some() {
            warn!(
                "Key '{}' missing from '{}' dictionary, using '{}'",
                key,
                lang,
                Language::DEFAULT
            );
        }
        fallback
    }
}
