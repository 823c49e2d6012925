// In-memory host and API doubles for screen tests.

use std::cell::{Cell, RefCell};

use frosmo_api::{Segment, SegmentGroup, Site};

use crate::connector::Graniitti;
use crate::error::CoreError;
use crate::host::{AppHost, FieldHost};
use crate::parameters::InstallationParameters;
use crate::schema::{ContentType, EditorInterface};

pub(crate) fn params(token: &str, region: &str, site_id: u64) -> InstallationParameters {
    InstallationParameters {
        token: token.into(),
        region: region.into(),
        site_id,
    }
}

pub(crate) fn segment(name: &str, title: &str, group: Option<&str>) -> Segment {
    Segment {
        segment_name: name.into(),
        title: title.into(),
        group: group.map(|g| SegmentGroup { name: g.into() }),
    }
}

// ── API ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    Status(u16),
    Decode,
}

impl Failure {
    fn to_error(self) -> CoreError {
        match self {
            Self::Status(status) => frosmo_api::Error::from_status(status, None).into(),
            Self::Decode => frosmo_api::Error::Deserialization {
                message: "expected object".into(),
                body: "[]".into(),
            }
            .into(),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    pub sites: Vec<Site>,
    pub segments: Vec<Segment>,
    pub failure: Option<Failure>,
    pub calls: Cell<usize>,
}

impl FakeApi {
    fn call(&self, params: &InstallationParameters) -> Result<(), CoreError> {
        self.calls.set(self.calls.get() + 1);
        params.credentials()?;
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

impl Graniitti for FakeApi {
    async fn fetch_site(&self, params: &InstallationParameters) -> Result<Site, CoreError> {
        self.call(params)?;
        let site_id = params.site()?;
        self.sites
            .iter()
            .find(|s| s.id == site_id)
            .cloned()
            .ok_or_else(|| frosmo_api::Error::SiteNotFound.into())
    }

    async fn fetch_sites(&self, params: &InstallationParameters) -> Result<Vec<Site>, CoreError> {
        self.call(params)?;
        Ok(self.sites.clone())
    }

    async fn fetch_segments(
        &self,
        params: &InstallationParameters,
    ) -> Result<Vec<Segment>, CoreError> {
        self.call(params)?;
        params.site()?;
        Ok(self.segments.clone())
    }
}

// ── App host ────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FakeAppHost {
    pub app_id: String,
    pub parameters: Option<InstallationParameters>,
    pub content_types: Vec<ContentType>,
    pub editor_interfaces: Vec<EditorInterface>,
    pub fail_content_types: bool,
    pub ready: Cell<bool>,
}

impl AppHost for FakeAppHost {
    fn app_id(&self) -> &str {
        &self.app_id
    }

    async fn get_parameters(&self) -> Result<Option<InstallationParameters>, CoreError> {
        Ok(self.parameters.clone())
    }

    async fn get_content_types(&self) -> Result<Vec<ContentType>, CoreError> {
        if self.fail_content_types {
            return Err(CoreError::host("content types unavailable"));
        }
        Ok(self.content_types.clone())
    }

    async fn get_editor_interfaces(&self) -> Result<Vec<EditorInterface>, CoreError> {
        Ok(self.editor_interfaces.clone())
    }

    fn set_ready(&self) {
        self.ready.set(true);
    }
}

// ── Field host ──────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FakeFieldHost {
    pub parameters: Option<InstallationParameters>,
    pub value: RefCell<Option<Vec<String>>>,
    pub writes: Cell<usize>,
    pub fail_writes: bool,
}

impl FakeFieldHost {
    pub fn with_value(parameters: InstallationParameters, value: &[&str]) -> Self {
        Self {
            parameters: Some(parameters),
            value: RefCell::new(Some(value.iter().map(|s| (*s).to_owned()).collect())),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<Vec<String>> {
        self.value.borrow().clone()
    }
}

impl FieldHost for FakeFieldHost {
    fn parameters(&self) -> Option<InstallationParameters> {
        self.parameters.clone()
    }

    fn get_value(&self) -> Option<Vec<String>> {
        self.value.borrow().clone()
    }

    async fn set_value(&self, value: Vec<String>) -> Result<(), CoreError> {
        if self.fail_writes {
            return Err(CoreError::host("entry is archived"));
        }
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = Some(value);
        Ok(())
    }
}
