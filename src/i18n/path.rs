//! Localized path resolution.
//!
//! A "base" path is language-agnostic (`/contacto`). Its localized form carries
//! a `/<code>` prefix for every non-default language (`/fr/contacto`) and no
//! prefix for the default language. These functions convert between the two and
//! build the link list for the language switcher.

use crate::i18n::Language;
use serde::Serialize;
use thiserror::Error;

/// Returned when a pathname is not site-relative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid path '{path}': site paths must start with '/'")]
pub struct InvalidPathError {
    pub path: String,
}

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLink {
    pub code: Language,
    pub href: String,
}

/// Strip trailing slashes from everything but the root path.
///
/// # Arguments
/// * `path` - A site-relative path (e.g., "/contacto/")
///
/// # Returns
/// The canonical form of the path: `/` stays `/`, `/foo/` becomes `/foo`.
///
/// # Errors
/// Returns `InvalidPathError` if `path` is empty or does not start with `/`.
///
/// # Example
/// ```
/// use localized_site::i18n::normalize;
///
/// assert_eq!(normalize("/servicios/").unwrap(), "/servicios");
/// assert!(normalize("servicios").is_err());
/// ```
pub fn normalize(path: &str) -> Result<String, InvalidPathError> {
    if !path.starts_with('/') {
        return Err(InvalidPathError {
            path: path.to_string(),
        });
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Split a path into the language it is written in and its base path.
///
/// Unprefixed paths belong to the default language. A `/<default>` segment is
/// not a prefix, and a prefix only matches a whole segment: `/english` stays
/// as it is.
///
/// # Errors
/// Returns `InvalidPathError` if `path` does not start with `/`.
pub fn split_language_prefix(path: &str) -> Result<(Language, String), InvalidPathError> {
    let normalized = normalize(path)?;

    for lang in Language::non_default() {
        let Some(rest) = normalized
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(lang.code()))
        else {
            continue;
        };

        if rest.is_empty() {
            return Ok((lang, "/".to_string()));
        }
        if rest.starts_with('/') {
            return Ok((lang, rest.to_string()));
        }
    }

    Ok((Language::DEFAULT, normalized))
}

/// Remove a non-default language prefix, if any.
///
/// # Returns
/// The normalized base path; `/` when the path was only a language prefix.
///
/// # Errors
/// Returns `InvalidPathError` if `path` does not start with `/`.
///
/// # Example
/// ```
/// use localized_site::i18n::strip_language_prefix;
///
/// assert_eq!(strip_language_prefix("/eu/servicios").unwrap(), "/servicios");
/// assert_eq!(strip_language_prefix("/english-like-path").unwrap(), "/english-like-path");
/// ```
pub fn strip_language_prefix(path: &str) -> Result<String, InvalidPathError> {
    split_language_prefix(path).map(|(_, base)| base)
}

/// The language a path is served in.
///
/// # Errors
/// Returns `InvalidPathError` if `path` does not start with `/`.
pub fn language_of(path: &str) -> Result<Language, InvalidPathError> {
    split_language_prefix(path).map(|(lang, _)| lang)
}

/// Prefix a base path with `lang`, unless `lang` is the default language.
///
/// # Arguments
/// * `path` - The base path; it is normalized, never stripped
/// * `lang` - The target language
///
/// # Returns
/// `/<code>` for the root, `/<code><path>` otherwise, or the normalized path
/// unchanged for the default language.
///
/// # Errors
/// Returns `InvalidPathError` if `path` does not start with `/`.
///
/// # Example
/// ```
/// use localized_site::i18n::{to_localized_path, Language};
///
/// assert_eq!(to_localized_path("/", Language::French).unwrap(), "/fr");
/// assert_eq!(to_localized_path("/about", Language::Spanish).unwrap(), "/about");
/// ```
pub fn to_localized_path(path: &str, lang: Language) -> Result<String, InvalidPathError> {
    let base = normalize(path)?;

    if lang.is_default() {
        return Ok(base);
    }

    if base == "/" {
        Ok(format!("/{}", lang.code()))
    } else {
        Ok(format!("/{}{}", lang.code(), base))
    }
}

/// One link per supported language pointing at the current page.
///
/// # Arguments
/// * `current` - The path of the page being viewed, prefixed or not
///
/// # Returns
/// Exactly one `LanguageLink` per language, in `Language::ALL` order.
///
/// # Errors
/// Returns `InvalidPathError` if `current` does not start with `/`.
pub fn language_switch_links(current: &str) -> Result<Vec<LanguageLink>, InvalidPathError> {
    let base = strip_language_prefix(current)?;

    Language::ALL
        .into_iter()
        .map(|code| -> Result<LanguageLink, InvalidPathError> {
            Ok(LanguageLink {
                code,
                href: to_localized_path(&base, code)?,
            })
        })
        .collect()
}
