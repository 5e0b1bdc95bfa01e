//! Request construction for the catalog search endpoint

use chrono::Utc;
use url::Url;

/// Typed parameters for one catalog search
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query string
    pub search_text: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Results per page
    pub per_page: u32,
    /// Opaque time token echoed to the server and into the derived referer
    pub time: String,
    /// Filter id lists, sent as empty strings when unused
    pub catalog_ids: Vec<u64>,
    pub size_ids: Vec<u64>,
    pub brand_ids: Vec<u64>,
    pub status_ids: Vec<u64>,
    pub color_ids: Vec<u64>,
    pub material_ids: Vec<u64>,
}

impl SearchParams {
    /// Create parameters with the defaults the catalog page itself uses.
    /// The time token is stamped at construction; `with_time` replays a
    /// captured one verbatim.
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            page: 1,
            per_page: 96,
            time: Utc::now().timestamp().to_string(),
            catalog_ids: Vec::new(),
            size_ids: Vec::new(),
            brand_ids: Vec::new(),
            status_ids: Vec::new(),
            color_ids: Vec::new(),
            material_ids: Vec::new(),
        }
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Replace the time token with a captured one
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Filter by catalog ids
    pub fn with_catalog_ids(mut self, ids: Vec<u64>) -> Self {
        self.catalog_ids = ids;
        self
    }

    /// Filter by size ids
    pub fn with_size_ids(mut self, ids: Vec<u64>) -> Self {
        self.size_ids = ids;
        self
    }

    /// Filter by brand ids
    pub fn with_brand_ids(mut self, ids: Vec<u64>) -> Self {
        self.brand_ids = ids;
        self
    }

    /// Filter by item status ids
    pub fn with_status_ids(mut self, ids: Vec<u64>) -> Self {
        self.status_ids = ids;
        self
    }

    /// Filter by color ids
    pub fn with_color_ids(mut self, ids: Vec<u64>) -> Self {
        self.color_ids = ids;
        self
    }

    /// Filter by material ids
    pub fn with_material_ids(mut self, ids: Vec<u64>) -> Self {
        self.material_ids = ids;
        self
    }
}

/// A fully specified catalog request: where to send it and exactly what
/// goes on the wire. Constructed once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Target URL, well-formed by construction
    pub url: Url,
    /// Query parameters, serialized in insertion order
    pub params: Vec<(String, String)>,
    /// Request headers, attached verbatim
    pub headers: Vec<(String, String)>,
    /// Cookies, serialized into a single Cookie header
    pub cookies: Vec<(String, String)>,
}

impl RequestSpec {
    /// Create a spec for a GET against `url`
    pub fn get(url: Url) -> Self {
        Self {
            url,
            params: Vec::new(),
            headers: Vec::new(),
            cookies: Vec::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a cookie
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((key.into(), value.into()));
        self
    }

    /// Serialize the cookies as a Cookie header value
    /// (`name=value; name2=value2`)
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Join filter ids the way the endpoint expects: comma-separated, or an
/// empty string when the filter is unused
pub(crate) fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the referer the endpoint expects: the catalog page URL on the
/// same origin, carrying the search text and time token of the request
pub(crate) fn derive_referer(endpoint: &Url, params: &SearchParams) -> String {
    format!(
        "{}/catalog?search_text={}&time={}",
        endpoint.origin().ascii_serialization(),
        urlencoding::encode(&params.search_text),
        params.time
    )
}
