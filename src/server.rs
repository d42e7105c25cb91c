//! HTTP surface for the page-rendering layer.
//!
//! Exposes path localization and dictionaries as small JSON endpoints. All
//! state is read-only and shared through an `Arc`.

use crate::i18n::{
    language_switch_links, split_language_prefix, to_localized_path, DictionaryRegistry,
    InvalidPathError, Language, LanguageConfig, LanguageLink, LanguageRegistry,
    UnknownLanguageError,
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dictionaries: Arc<DictionaryRegistry>,
}

impl AppState {
    pub fn new(dictionaries: DictionaryRegistry) -> Self {
        Self {
            dictionaries: Arc::new(dictionaries),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguageError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure is a malformed request
        let status = StatusCode::BAD_REQUEST;
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct LinksQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub language: Language,
    pub base_path: String,
    pub links: Vec<LanguageLink>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizeQuery {
    pub path: String,
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct LocalizeResponse {
    pub href: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/links", get(links))
        .route("/api/localize", get(localize))
        .route("/api/dictionary/:code", get(dictionary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn languages() -> Json<Vec<LanguageConfig>> {
    Json(LanguageRegistry::get().list().to_vec())
}

pub async fn links(
    query: Result<Query<LinksQuery>, QueryRejection>,
) -> Result<Json<LinksResponse>, ApiError> {
    let Query(query) = query?;
    let (language, base_path) = split_language_prefix(&query.path)?;
    let links = language_switch_links(&query.path)?;
    debug!("Resolved {} as '{}' page {}", query.path, language, base_path);

    Ok(Json(LinksResponse {
        language,
        base_path,
        links,
    }))
}

pub async fn localize(
    query: Result<Query<LocalizeQuery>, QueryRejection>,
) -> Result<Json<LocalizeResponse>, ApiError> {
    let Query(query) = query?;
    let lang = Language::from_code(&query.lang)?;
    let href = to_localized_path(&query.path, lang)?;
    Ok(Json(LocalizeResponse { href }))
}

pub async fn dictionary(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let lang = Language::from_code(&code)?;
    Ok(Json(state.dictionaries.get(lang).entries().clone()))
}
