use anyhow::{Context, Result};
use localized_site::i18n::{language_of, language_switch_links};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_links=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: language-links <path>")?;

    let current = language_of(&path)?;
    info!("{} is a '{}' page", path, current);

    for link in language_switch_links(&path)? {
        println!("{}\t{}", link.code, link.href);
    }

    Ok(())
}
