//! Catalog search against Vinted's items endpoint
//!
//! `CatalogSearch` owns the endpoint knowledge: which query parameters,
//! headers, and cookies the catalog API expects, and how to read what it
//! sends back. Transport lives in `crate::network`.

mod request;
mod response;

pub use request::{RequestSpec, SearchParams};
pub use response::{interpret, CatalogPage, CatalogResponse, Item};

use crate::config::{Credentials, Settings};
use crate::network::HttpClient;
use request::{derive_referer, join_ids};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Accept header the catalog API expects
const ACCEPT_JSON: &str = "application/json, text/plain, */*";

/// Failures a catalog fetch can produce beyond a non-success status.
/// A non-200 response is not an error; it comes back as
/// `CatalogResponse::Failure`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The network call itself could not complete (DNS, connection
    /// refused, TLS failure, timeout)
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status was 200 but the body was not the expected JSON shape
    #[error("malformed catalog body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Performs catalog searches: builds the request for a set of typed
/// parameters, executes it, and classifies the outcome
pub struct CatalogSearch {
    client: HttpClient,
    endpoint: Url,
    referer: Option<String>,
    user_agent: String,
    accept_language: String,
    credentials: Credentials,
}

impl CatalogSearch {
    /// Build a searcher from settings, constructing its own HTTP client
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Self::with_client(client, settings)
    }

    /// Build a searcher around an existing HTTP client
    pub fn with_client(client: HttpClient, settings: &Settings) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&settings.catalog.endpoint).map_err(|e| {
            anyhow::anyhow!("invalid catalog endpoint {}: {}", settings.catalog.endpoint, e)
        })?;

        Ok(Self {
            client,
            endpoint,
            referer: settings.catalog.referer.clone(),
            user_agent: settings.outgoing.user_agent.clone(),
            accept_language: settings.outgoing.accept_language.clone(),
            credentials: settings.credentials.clone(),
        })
    }

    /// Build the request spec for `params`.
    ///
    /// Pure construction: every query parameter is sent on every call
    /// (unused filters as empty strings), headers and cookies carry the
    /// configured credential material verbatim.
    pub fn request(&self, params: &SearchParams) -> RequestSpec {
        let referer = self
            .referer
            .clone()
            .unwrap_or_else(|| derive_referer(&self.endpoint, params));

        RequestSpec::get(self.endpoint.clone())
            .param("page", params.page.to_string())
            .param("per_page", params.per_page.to_string())
            .param("time", params.time.clone())
            .param("search_text", params.search_text.clone())
            .param("catalog_ids", join_ids(&params.catalog_ids))
            .param("size_ids", join_ids(&params.size_ids))
            .param("brand_ids", join_ids(&params.brand_ids))
            .param("status_ids", join_ids(&params.status_ids))
            .param("color_ids", join_ids(&params.color_ids))
            .param("material_ids", join_ids(&params.material_ids))
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON)
            .header("Accept-Language", &self.accept_language)
            .header("Referer", referer)
            .header("x-anon-id", &self.credentials.anon_id)
            .header("x-csrf-token", &self.credentials.csrf_token)
            .header("x-money-object", "true")
            .cookie("_vinted_fr_session", &self.credentials.session_cookie)
            .cookie("access_token_web", &self.credentials.access_token)
    }

    /// Perform exactly one outbound GET for `spec` and classify the
    /// result. No retries, no redirect policy beyond the client default.
    pub async fn fetch_catalog_page(
        &self,
        spec: &RequestSpec,
    ) -> Result<CatalogResponse, CatalogError> {
        debug!("GET {} with {} query params", spec.url, spec.params.len());
        let response = self.client.execute(spec).await?;
        debug!("{} answered with status {}", response.url, response.status);
        interpret(response)
    }

    /// Build the request for `params` and fetch it
    pub async fn search(&self, params: &SearchParams) -> Result<CatalogResponse, CatalogError> {
        let spec = self.request(params);
        self.fetch_catalog_page(&spec).await
    }
}
