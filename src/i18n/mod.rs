//! Internationalization (i18n) module for the localized site.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum and the default-language rule
//! - `registry`: display metadata for every supported language
//! - `path`: conversion between base paths and language-prefixed paths
//! - `dictionary`: per-language text, loaded once into a `DictionaryRegistry`
//! - `validator`: completeness checks of translations against the default dictionary
//!
//! # Example
//!
//! ```
//! use localized_site::i18n::{language_switch_links, to_localized_path, Language};
//!
//! assert_eq!(to_localized_path("/about", Language::Portuguese).unwrap(), "/pt/about");
//!
//! let links = language_switch_links("/fr/contacto").unwrap();
//! assert_eq!(links[0].href, "/contacto");
//! ```

mod dictionary;
mod language;
mod path;
mod registry;
mod validator;

pub use dictionary::{Dictionary, DictionaryError, DictionaryRegistry};
pub use language::{Language, UnknownLanguageError};
pub use path::{
    language_of, language_switch_links, normalize, split_language_prefix, strip_language_prefix,
    to_localized_path, InvalidPathError, LanguageLink,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{DictionaryValidator, ValidationReport};
