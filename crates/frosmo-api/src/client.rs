// Graniitti HTTP client
//
// Wraps `reqwest::Client` with region-aware URL construction, bearer-token
// headers, and status-to-error mapping. Requests are plain GETs; there is
// no retry, batching, or pagination.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ErrorResponse, Segment, Site};
use crate::region::Region;
use crate::transport::TransportConfig;

/// Async client for the Frosmo Graniitti API.
///
/// Bound to one region and one bearer token. Every request carries
/// `Authorization: Bearer {token}` and `Content-Type: application/json`.
pub struct GraniittiClient {
    http: reqwest::Client,
    /// Base URL without trailing slash, e.g. `https://graniitti.inpref.com/v0`.
    base_url: String,
    authorization: HeaderValue,
}

impl GraniittiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `region` from a token and transport config.
    pub fn new(
        region: Region,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: region.base_url().to_owned(),
            authorization: bearer(token)?,
        })
    }

    /// Wrap an existing `reqwest::Client` against an explicit base URL.
    ///
    /// Used to point the client at a mock server.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &Url,
        token: &SecretString,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
            authorization: bearer(token)?,
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base}{path_and_query}`; `path_and_query` starts with `/`.
    fn url(&self, path_and_query: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{path_and_query}", self.base_url))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, Error> {
        let url = self.url(path_and_query)?;
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(Error::ConnectionFailed)?;

        Self::handle_response(resp).await
    }

    /// Read the body as JSON regardless of status; non-2xx maps to a typed error.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::ConnectionFailed)?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body: body.clone(),
                }
            });
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message);
        debug!(status = status.as_u16(), ?message, "Graniitti request failed");

        Err(Error::from_status(status.as_u16(), message))
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET {base}/sites/{site_id}`
    pub async fn fetch_site(&self, site_id: u64) -> Result<Site, Error> {
        self.get(&format!("/sites/{site_id}")).await
    }

    /// `GET {base}/sites?fields=id,url`
    pub async fn fetch_sites(&self) -> Result<Vec<Site>, Error> {
        self.get("/sites?fields=id,url").await
    }

    /// `GET {base}/sites/{site_id}/segments?includes=group`
    ///
    /// Only `title`, `segment_name` and `group` are kept from each entry.
    pub async fn fetch_segments(&self, site_id: u64) -> Result<Vec<Segment>, Error> {
        let segments: Vec<Segment> = self
            .get(&format!("/sites/{site_id}/segments?includes=group"))
            .await?;
        debug!(site_id, count = segments.len(), "fetched segments");
        Ok(segments)
    }
}

fn bearer(token: &SecretString) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::InvalidToken(e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
