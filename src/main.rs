use anyhow::{bail, Context, Result};
use localized_site::{
    config,
    i18n::{DictionaryRegistry, DictionaryValidator},
    server,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting localized site service");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Build the dictionary registry once; handlers share it read-only
    let dictionaries = DictionaryRegistry::load(config.dictionaries_dir.as_deref())
        .context("Failed to load dictionaries")?;

    let report = DictionaryValidator::validate(&dictionaries);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for error in &report.errors {
        warn!("{}", error);
    }
    if report.has_errors() && config.strict_dictionaries {
        bail!(
            "Dictionary validation failed with {} errors",
            report.errors.len()
        );
    }

    let app = server::router(server::AppState::new(dictionaries));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
