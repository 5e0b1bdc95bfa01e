//! vinted-catalog: a typed client for Vinted's catalog search endpoint
//!
//! Builds one authenticated GET against the catalog search API, sends it,
//! and classifies the JSON response. Request construction, transport
//! execution, and response interpretation are kept separate so each can
//! be exercised on its own.

pub mod catalog;
pub mod config;
pub mod network;

pub use catalog::{
    CatalogError, CatalogPage, CatalogResponse, CatalogSearch, RequestSpec, SearchParams,
};
pub use config::Settings;
pub use network::{HttpClient, HttpResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
