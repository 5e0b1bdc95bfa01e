//! Settings structures for the catalog client configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure backing settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
    pub credentials: Credentials,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            search: SearchSettings::default(),
            outgoing: OutgoingSettings::default(),
            credentials: Credentials::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (VINTED_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("VINTED_CATALOG_ENDPOINT") {
            self.catalog.endpoint = val;
        }
        if let Ok(val) = std::env::var("VINTED_SESSION_COOKIE") {
            self.credentials.session_cookie = val;
        }
        if let Ok(val) = std::env::var("VINTED_ACCESS_TOKEN") {
            self.credentials.access_token = val;
        }
        if let Ok(val) = std::env::var("VINTED_CSRF_TOKEN") {
            self.credentials.csrf_token = val;
        }
        if let Ok(val) = std::env::var("VINTED_ANON_ID") {
            self.credentials.anon_id = val;
        }
    }
}

/// Where the catalog endpoint lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog search endpoint URL
    pub endpoint: String,
    /// Verbatim Referer override; derived from the search when unset
    pub referer: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://www.vinted.fr/api/v2/catalog/items".to_string(),
            referer: None,
        }
    }
}

/// Search defaults used when nothing is given on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search text
    pub default_text: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Results per page
    pub per_page: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_text: "lego".to_string(),
            page: 1,
            per_page: 96,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// User agent presented to the endpoint
    pub user_agent: String,
    /// Accept-Language presented to the endpoint
    pub accept_language: String,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36"
                .to_string(),
            accept_language: "fr".to_string(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Opaque credential material identifying the session to the endpoint.
/// Every value is copied from a captured browser session; nothing here is
/// generated, validated, or refreshed locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Value of the `_vinted_fr_session` cookie
    pub session_cookie: String,
    /// Value of the `access_token_web` cookie
    pub access_token: String,
    /// Value of the `x-csrf-token` header
    pub csrf_token: String,
    /// Value of the `x-anon-id` header
    pub anon_id: String,
}

impl Credentials {
    /// True when no credential material has been provided at all
    pub fn is_empty(&self) -> bool {
        self.session_cookie.is_empty()
            && self.access_token.is_empty()
            && self.csrf_token.is_empty()
            && self.anon_id.is_empty()
    }
}
