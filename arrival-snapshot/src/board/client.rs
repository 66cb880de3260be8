//! Live timetable lookup client.
//!
//! One form-encoded `POST` per stop against the tram operator's search
//! endpoint. The endpoint only answers requests that look like they came
//! from its own mobile page, so the referer and a browser user agent are
//! always sent.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, REFERER};

use super::error::FetchError;
use super::source::BoardSource;

/// Default lookup endpoint.
const DEFAULT_ENDPOINT: &str = "https://location.hiroden.co.jp/sp/search.cgi";

/// Browser user agent sent with every request.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36 Edg/140.0.0.0";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Longest slice of an error body kept in [`FetchError::Api`].
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the board client.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Lookup endpoint URL
    pub endpoint: String,
    /// Referer header value
    pub referer: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds; `None` leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl BoardConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            referer: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint (for testing). The referer is left alone.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set an explicit request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the form body for a stop lookup.
///
/// Identifiers are inserted verbatim. The stop identifier names the
/// `.html` page the endpoint renders.
///
/// ```
/// use arrival_snapshot::board::form_body;
///
/// assert_eq!(form_body("S1", "G1"), "d=G1&b=S1.html");
/// ```
pub fn form_body(stop_id: &str, group_id: &str) -> String {
    format!("d={group_id}&b={stop_id}.html")
}

/// HTTP client for the arrival board endpoint.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BoardClient {
    /// Create a new board client with the given configuration.
    pub fn new(config: BoardConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        let referer = HeaderValue::from_str(&config.referer)
            .map_err(|_| FetchError::InvalidHeader("referer"))?;
        headers.insert(REFERER, referer);

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| FetchError::InvalidHeader("user-agent"))?;

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint,
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw results page for a stop.
    ///
    /// Single attempt. Any non-2xx status is a [`FetchError::Api`].
    pub async fn fetch_board(&self, stop_id: &str, group_id: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form_body(stop_id, group_id))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        Ok(response.text().await?)
    }
}

impl BoardSource for BoardClient {
    async fn fetch(&self, stop_id: &str, group_id: &str) -> Result<String, FetchError> {
        self.fetch_board(stop_id, group_id).await
    }
}
