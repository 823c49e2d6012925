// ── Graniitti connector ──
//
// Screens talk to the API through this trait so a fresh client can be
// built for whatever token/region the operator has entered at call time.

use std::future::Future;

use frosmo_api::{GraniittiClient, Segment, Site, TransportConfig};
use tracing::debug;
use url::Url;

use crate::error::CoreError;
use crate::parameters::InstallationParameters;

/// Read-only Graniitti operations keyed by installation parameters.
pub trait Graniitti {
    /// Site detail for `params.site_id`.
    fn fetch_site(
        &self,
        params: &InstallationParameters,
    ) -> impl Future<Output = Result<Site, CoreError>>;

    /// Sites visible to the token; the site id is not needed.
    fn fetch_sites(
        &self,
        params: &InstallationParameters,
    ) -> impl Future<Output = Result<Vec<Site>, CoreError>>;

    /// Segment catalog of `params.site_id`.
    fn fetch_segments(
        &self,
        params: &InstallationParameters,
    ) -> impl Future<Output = Result<Vec<Segment>, CoreError>>;
}

/// [`Graniitti`] over the real HTTP client.
#[derive(Debug, Clone, Default)]
pub struct GraniittiConnector {
    transport: TransportConfig,
    base_url: Option<Url>,
}

impl GraniittiConnector {
    pub fn new(transport: TransportConfig) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Send every request to `base_url` instead of the region's API host.
    /// The region is still validated.
    pub fn with_base_url(transport: TransportConfig, base_url: Url) -> Self {
        Self {
            transport,
            base_url: Some(base_url),
        }
    }

    fn client(&self, params: &InstallationParameters) -> Result<GraniittiClient, CoreError> {
        let (token, region) = params.credentials()?;
        let client = match self.base_url {
            Some(ref base_url) => {
                debug!(%region, %base_url, "building Graniitti client with base URL override");
                GraniittiClient::with_client(self.transport.build_client()?, base_url, &token)?
            }
            None => {
                debug!(%region, "building Graniitti client");
                GraniittiClient::new(region, &token, &self.transport)?
            }
        };
        Ok(client)
    }
}

impl Graniitti for GraniittiConnector {
    async fn fetch_site(&self, params: &InstallationParameters) -> Result<Site, CoreError> {
        let site_id = params.site()?;
        Ok(self.client(params)?.fetch_site(site_id).await?)
    }

    async fn fetch_sites(&self, params: &InstallationParameters) -> Result<Vec<Site>, CoreError> {
        Ok(self.client(params)?.fetch_sites().await?)
    }

    async fn fetch_segments(
        &self,
        params: &InstallationParameters,
    ) -> Result<Vec<Segment>, CoreError> {
        let site_id = params.site()?;
        Ok(self.client(params)?.fetch_segments(site_id).await?)
    }
}
