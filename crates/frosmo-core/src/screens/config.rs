// ── Configuration screen ──
//
// Headless state machine behind the app's configuration page: connection
// parameters, the site picker, the connection test, and the per-content-type
// field checkboxes. Rendering is left to the embedding layer.

use frosmo_api::{Region, Site};
use serde::Serialize;
use tracing::{debug, warn};

use crate::connector::Graniitti;
use crate::error::{CoreError, Parameter};
use crate::fields::{
    CompatibleFields, SelectedFields, build_target_state, compute_compatible_fields,
    derive_selected_fields, toggle_field,
};
use crate::host::AppHost;
use crate::notice::Notice;
use crate::parameters::InstallationParameters;
use crate::schema::{ContentType, ContentTypeField, TargetState};

/// Shown under the site picker while the site list is empty.
pub const INCOMPLETE_CONNECTION_NOTE: &str = "Token or Frosmo Control Panel domain is not set correctly. Please set the token and select the correct Frosmo Control Panel domain.";

const UNKNOWN_FAILURE: &str = "Connection failed for unknown reason";

/// A site-list fetch in flight. Only the most recently issued request may
/// update the screen.
#[derive(Debug, Clone)]
pub struct SitesRequest {
    generation: u64,
    params: InstallationParameters,
}

impl SitesRequest {
    pub fn params(&self) -> &InstallationParameters {
        &self.params
    }
}

/// Data the host persists when the operator saves the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationPayload {
    pub parameters: InstallationParameters,
    pub target_state: TargetState,
}

/// One content type's checkbox group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSection<'a> {
    pub content_type: &'a ContentType,
    /// Compatible fields with their checked state.
    pub fields: Vec<(&'a ContentTypeField, bool)>,
}

#[derive(Debug, Default)]
pub struct ConfigScreen {
    parameters: InstallationParameters,
    sites: Vec<Site>,
    sites_loading: bool,
    sites_generation: u64,
    content_types: Vec<ContentType>,
    compatible_fields: CompatibleFields,
    selected_fields: SelectedFields,
    fields_loading: bool,
    testing_connection: bool,
}

impl ConfigScreen {
    pub fn new() -> Self {
        Self {
            sites_loading: true,
            fields_loading: true,
            ..Self::default()
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Load parameters and field data from the host, then the site list.
    pub async fn mount<H: AppHost, A: Graniitti>(&mut self, host: &H, api: &A) {
        match host.get_parameters().await {
            Ok(Some(params)) => self.parameters = params,
            Ok(None) => debug!("app not installed yet, using default parameters"),
            Err(e) => warn!(error = %e, "failed to read installation parameters"),
        }

        self.load_fields(host).await;
        host.set_ready();

        self.refresh_sites(api).await;
    }

    async fn load_fields<H: AppHost>(&mut self, host: &H) {
        self.fields_loading = true;

        match Self::fetch_field_data(host).await {
            Ok((content_types, selected)) => {
                self.compatible_fields = compute_compatible_fields(&content_types);
                self.selected_fields = selected;
                self.content_types = content_types;
            }
            Err(e) => warn!(error = %e, "failed to load content types"),
        }

        self.fields_loading = false;
    }

    async fn fetch_field_data<H: AppHost>(
        host: &H,
    ) -> Result<(Vec<ContentType>, SelectedFields), CoreError> {
        let content_types = host.get_content_types().await?;
        let editor_interfaces = host.get_editor_interfaces().await?;
        let selected = derive_selected_fields(&editor_interfaces, host.app_id());
        debug!(
            content_types = content_types.len(),
            selected = selected.len(),
            "loaded field data"
        );
        Ok((content_types, selected))
    }

    /// Save-time export, pulled by the host when the operator installs or
    /// saves.
    pub fn on_configure(&self) -> ConfigurationPayload {
        ConfigurationPayload {
            parameters: self.parameters.clone(),
            target_state: build_target_state(&self.content_types, &self.selected_fields),
        }
    }

    // ── Parameter edits ──────────────────────────────────────────────

    pub fn parameters(&self) -> &InstallationParameters {
        &self.parameters
    }

    /// Update the token and start a site-list refresh for it.
    ///
    /// Any request still in flight is superseded. The returned request (if
    /// any) should be run and handed to [`finish_sites_refresh`](Self::finish_sites_refresh).
    pub fn set_token(&mut self, token: impl Into<String>) -> Option<SitesRequest> {
        self.parameters.token = token.into();
        self.begin_sites_refresh()
    }

    /// Update the region code; same refresh behavior as [`set_token`](Self::set_token).
    pub fn set_region(&mut self, region: impl Into<String>) -> Option<SitesRequest> {
        self.parameters.region = region.into();
        self.begin_sites_refresh()
    }

    /// The site list does not depend on the site id, so no refresh starts.
    pub fn set_site_id(&mut self, site_id: u64) {
        self.parameters.site_id = site_id;
    }

    /// Region selector entries: region and the Control Panel URL it is known by.
    pub fn region_options() -> impl Iterator<Item = (Region, &'static str)> {
        Region::ALL.into_iter().map(|r| (r, r.control_panel_url()))
    }

    // ── Site list ────────────────────────────────────────────────────

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn sites_loading(&self) -> bool {
        self.sites_loading
    }

    /// Guidance shown while no sites are available. Not an error: an
    /// incomplete token/region pair is an expected state while typing.
    pub fn site_list_note(&self) -> Option<&'static str> {
        (!self.sites_loading && self.sites.is_empty()).then_some(INCOMPLETE_CONNECTION_NOTE)
    }

    /// Start a site-list refresh for the current parameters.
    ///
    /// Every call supersedes earlier requests. Returns `None` (and clears
    /// the list) when token or region is empty.
    pub fn begin_sites_refresh(&mut self) -> Option<SitesRequest> {
        self.sites_generation += 1;

        if !self.parameters.can_list_sites() {
            self.sites.clear();
            self.sites_loading = false;
            return None;
        }

        self.sites_loading = true;
        Some(SitesRequest {
            generation: self.sites_generation,
            params: self.parameters.clone(),
        })
    }

    /// Apply the outcome of `request`. Returns `false` when the request was
    /// superseded and its result discarded.
    pub fn finish_sites_refresh(
        &mut self,
        request: &SitesRequest,
        result: Result<Vec<Site>, CoreError>,
    ) -> bool {
        if request.generation != self.sites_generation {
            debug!(
                stale = request.generation,
                latest = self.sites_generation,
                "discarding superseded site list"
            );
            return false;
        }

        self.sites = match result {
            Ok(sites) => sites,
            Err(e) => {
                debug!(error = %e, "site list unavailable");
                Vec::new()
            }
        };
        self.sites_loading = false;
        true
    }

    /// Fetch the site list for the current parameters.
    pub async fn refresh_sites<A: Graniitti>(&mut self, api: &A) {
        if let Some(request) = self.begin_sites_refresh() {
            let result = api.fetch_sites(request.params()).await;
            self.finish_sites_refresh(&request, result);
        }
    }

    // ── Connection test ──────────────────────────────────────────────

    pub fn testing_connection(&self) -> bool {
        self.testing_connection
    }

    /// Validate the parameters locally, then fetch the configured site.
    pub async fn test_connection<A: Graniitti>(&mut self, api: &A) -> Notice {
        if let Err(missing) = self.check_parameters() {
            return Notice::warning(match missing {
                Parameter::Token => "Please set Frosmo Token first!",
                Parameter::Region => "Please select Frosmo Region first!",
                Parameter::SiteId => "Please set Frosmo Site ID first!",
            });
        }

        self.testing_connection = true;
        let result = api.fetch_site(&self.parameters).await;
        self.testing_connection = false;

        match result {
            Ok(site) => Notice::success(format!(
                "Connection to Frosmo was successful. Your site url is: {}",
                site.url
            )),
            Err(e) => {
                warn!(error = %e, "connection test failed");
                Notice::error(e.api_message().unwrap_or_else(|| UNKNOWN_FAILURE.into()))
            }
        }
    }

    fn check_parameters(&self) -> Result<(), Parameter> {
        if self.parameters.token.is_empty() {
            return Err(Parameter::Token);
        }
        if self.parameters.region().is_none() {
            return Err(Parameter::Region);
        }
        if self.parameters.site_id == 0 {
            return Err(Parameter::SiteId);
        }
        Ok(())
    }

    // ── Field selection ──────────────────────────────────────────────

    pub fn fields_loading(&self) -> bool {
        self.fields_loading
    }

    pub fn selected_fields(&self) -> &SelectedFields {
        &self.selected_fields
    }

    pub fn toggle_field(&mut self, ct_id: &str, field_id: &str, checked: bool) {
        toggle_field(&mut self.selected_fields, ct_id, field_id, checked);
    }

    /// Checkbox groups for content types that have compatible fields.
    pub fn field_sections(&self) -> Vec<FieldSection<'_>> {
        self.content_types
            .iter()
            .filter_map(|ct| {
                let fields = self.compatible_fields.get(ct.id())?;
                if fields.is_empty() {
                    return None;
                }
                let selected = self.selected_fields.get(ct.id());
                let fields = fields
                    .iter()
                    .map(|field| {
                        let checked = selected.is_some_and(|ids| ids.contains(&field.id));
                        (field, checked)
                    })
                    .collect();
                Some(FieldSection {
                    content_type: ct,
                    fields,
                })
            })
            .collect()
    }
}
