// ── Field editor ──
//
// Headless state behind the entry field widget: the stored list of segment
// names, the segment catalog of the configured site, and add/remove
// operations that write straight through to the host field value.

use frosmo_api::Segment;
use tracing::{debug, warn};

use crate::connector::Graniitti;
use crate::host::FieldHost;
use crate::notice::Notice;
use crate::parameters::InstallationParameters;

/// Banner shown in place of the editor when the catalog cannot be loaded.
pub const SEGMENTS_UNAVAILABLE: &str =
    "Unable to load Frosmo segments. Please check the application configuration!";

/// Shown while the entry has no segments.
pub const NO_SEGMENTS_LINKED: &str = "No Frosmo segments linked to the content.";

const CONNECTION_FAILED: &str = "Connection to Frosmo failed";

/// A stored segment rendered as a dismissible tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTag {
    /// Stored identifier; pass back to [`FieldEditor::remove_segment`].
    pub segment_name: String,
    pub label: String,
}

/// A catalog entry in the add-selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOption<'a> {
    pub segment: &'a Segment,
    pub label: String,
    /// Already on the entry.
    pub disabled: bool,
}

#[derive(Debug, Default)]
pub struct FieldEditor {
    parameters: InstallationParameters,
    catalog: Vec<Segment>,
    selected: Vec<String>,
    loading: bool,
    error: Option<&'static str>,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read parameters and the stored value, then fetch the catalog when a
    /// token is configured. Returns an error notice if the catalog fetch
    /// failed.
    pub async fn mount<H: FieldHost, A: Graniitti>(&mut self, host: &H, api: &A) -> Option<Notice> {
        if let Some(params) = host.parameters() {
            self.parameters = params;
        }
        self.selected = host.get_value().unwrap_or_default();

        if self.parameters.token.is_empty() {
            debug!("no token configured, skipping segment catalog");
            return None;
        }

        self.loading = true;
        let result = api.fetch_segments(&self.parameters).await;
        self.loading = false;

        match result {
            Ok(catalog) => {
                debug!(count = catalog.len(), "loaded segment catalog");
                self.catalog = catalog;
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to load segment catalog");
                self.error = Some(SEGMENTS_UNAVAILABLE);
                Some(Notice::error(
                    e.api_message().unwrap_or_else(|| CONNECTION_FAILED.into()),
                ))
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append `segment_name` to the stored list and persist it.
    ///
    /// The list itself is not de-duplicated; [`segment_options`](Self::segment_options)
    /// disables segments that are already on the entry.
    pub async fn add_segment<H: FieldHost>(&mut self, host: &H, segment_name: &str) -> Option<Notice> {
        if segment_name.is_empty() {
            return None;
        }

        let mut list = host.get_value().unwrap_or_default();
        list.push(segment_name.to_owned());
        self.persist(host, list).await
    }

    /// Remove the first occurrence of `segment_name` and persist the list.
    /// Unknown names are ignored.
    pub async fn remove_segment<H: FieldHost>(
        &mut self,
        host: &H,
        segment_name: &str,
    ) -> Option<Notice> {
        let mut list = host.get_value().unwrap_or_default();
        let index = list.iter().position(|name| name == segment_name)?;
        list.remove(index);
        self.persist(host, list).await
    }

    /// Write to the host first; the displayed list only follows a
    /// successful write.
    async fn persist<H: FieldHost>(&mut self, host: &H, list: Vec<String>) -> Option<Notice> {
        match host.set_value(list.clone()).await {
            Ok(()) => {
                self.selected = list;
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to save segments");
                Some(Notice::error(e.to_string()))
            }
        }
    }

    // ── View state ───────────────────────────────────────────────────

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn catalog(&self) -> &[Segment] {
        &self.catalog
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Placeholder text while the entry has no segments.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_SEGMENTS_LINKED)
    }

    /// Tags for the stored segments, in stored order.
    ///
    /// Names missing from the catalog (deleted, or catalog not loaded) are
    /// labeled with the raw stored name.
    pub fn tags(&self) -> Vec<SegmentTag> {
        self.selected
            .iter()
            .map(|name| SegmentTag {
                segment_name: name.clone(),
                label: self
                    .catalog
                    .iter()
                    .find(|s| &s.segment_name == name)
                    .map_or_else(|| name.clone(), Segment::label),
            })
            .collect()
    }

    pub fn segment_options(&self) -> Vec<SegmentOption<'_>> {
        self.catalog
            .iter()
            .map(|segment| SegmentOption {
                segment,
                label: segment.label(),
                disabled: self.selected.contains(&segment.segment_name),
            })
            .collect()
    }
}
