//! Dictionary validation module.
//!
//! Every translated dictionary is compared against the default language's
//! dictionary, which acts as the reference for the set of keys and for the
//! `{placeholders}` each value must keep.

use crate::i18n::{Dictionary, DictionaryRegistry, Language};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that leave a page without text (missing keys)
    pub errors: Vec<String>,

    /// Non-critical issues worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary completeness and consistency.
pub struct DictionaryValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate every dictionary in the registry against the default one.
    ///
    /// This function checks that:
    /// - every reference key exists in each translation (error)
    /// - translations have no keys the reference lacks (warning)
    /// - values keep the reference's placeholders (warning)
    /// - no value is empty (warning)
    pub fn validate(registry: &DictionaryRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = registry.default_dictionary();

        Self::check_empty_values(reference, &mut report);

        for lang in Language::non_default() {
            Self::compare(reference, registry.get(lang), &mut report);
        }

        report
    }

    /// Compare one translation against the reference dictionary.
    pub fn compare(reference: &Dictionary, translation: &Dictionary, report: &mut ValidationReport) {
        let lang = translation.language();

        for key in reference.keys() {
            let Some(translated) = translation.get(key) else {
                report
                    .errors
                    .push(format!("Missing key '{}' in '{}' dictionary", key, lang));
                continue;
            };

            let expected = Self::extract_placeholders(reference.get(key).unwrap_or_default());
            let found = Self::extract_placeholders(translated);
            if expected != found {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}' in '{}': expected {:?}, found {:?}",
                    key, lang, expected, found
                ));
            }
        }

        for key in translation.keys() {
            if reference.get(key).is_none() {
                report.warnings.push(format!(
                    "Extra key '{}' in '{}' dictionary not present in '{}'",
                    key,
                    lang,
                    reference.language()
                ));
            }
        }

        Self::check_empty_values(translation, report);
    }

    fn check_empty_values(dictionary: &Dictionary, report: &mut ValidationReport) {
        for (key, value) in dictionary.entries() {
            if value.trim().is_empty() {
                report.warnings.push(format!(
                    "Empty value for '{}' in '{}' dictionary",
                    key,
                    dictionary.language()
                ));
            }
        }
    }

    /// Extract the set of `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("placeholder regex is valid"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(reference: &'static str, translation: &'static str) -> DictionaryRegistry {
        DictionaryRegistry::try_from_fn(|lang| {
            let json = if lang.is_default() { reference } else { translation };
            Dictionary::from_json(lang, json)
        })
        .unwrap()
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_multiple() {
        let found = DictionaryValidator::extract_placeholders("© {year} {site}.");
        let expected: BTreeSet<String> = ["site", "year"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(DictionaryValidator::extract_placeholders("Contacto").is_empty());
        assert!(DictionaryValidator::extract_placeholders("{ not one }").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_embedded_dictionaries_are_clean() {
        let registry = DictionaryRegistry::embedded().unwrap();
        let report = DictionaryValidator::validate(&registry);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_key_is_error() {
        let registry = registry_with(r#"{"a": "x", "b": "y"}"#, r#"{"a": "x"}"#);
        let report = DictionaryValidator::validate(&registry);

        // One missing key per non-default language
        assert_eq!(report.errors.len(), Language::ALL.len() - 1);
        assert!(report.errors[0].contains("'b'"));
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_extra_key_is_warning() {
        let registry = registry_with(r#"{"a": "x"}"#, r#"{"a": "x", "z": "extra"}"#);
        let report = DictionaryValidator::validate(&registry);

        assert!(!report.has_errors());
        assert!(report.warnings.iter().all(|w| w.contains("Extra key 'z'")));
    }

    #[test]
    fn test_placeholder_mismatch_is_warning() {
        let registry = registry_with(r#"{"a": "{year} ok"}"#, r#"{"a": "{anio} ok"}"#);
        let report = DictionaryValidator::validate(&registry);

        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_empty_value_is_warning() {
        let registry = registry_with(r#"{"a": "x"}"#, r#"{"a": "  "}"#);
        let report = DictionaryValidator::validate(&registry);
        assert!(report.warnings.iter().any(|w| w.contains("Empty value")));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_default_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
