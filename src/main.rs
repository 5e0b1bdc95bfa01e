//! vinted-catalog: a typed client for Vinted's catalog search endpoint
//!
//! This is the main entry point for the application.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use vinted_catalog::{CatalogSearch, SearchParams, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting vinted-catalog v{}", vinted_catalog::VERSION);

    // Load configuration
    let settings = load_settings()?;
    if settings.credentials.is_empty() {
        warn!("No credentials configured, the catalog API will likely refuse the request");
    }

    // Search text from the command line, falling back to the configured default
    let search_text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.search.default_text.clone());

    let params = SearchParams::new(&search_text)
        .with_page(settings.search.page)
        .with_per_page(settings.search.per_page);

    let searcher = CatalogSearch::new(&settings)?;
    info!("Searching the catalog for {:?}", search_text);

    let outcome = searcher.search(&params).await?;
    println!("{}", outcome.summary());

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check for settings file in various locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/vinted-catalog/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("vinted-catalog/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("VINTED_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
