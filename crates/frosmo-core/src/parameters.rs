// ── Installation parameters ──
//
// Operator-entered connection settings. The host platform persists them as
// JSON (`{token, region, siteId}`); core never stores them itself.

use std::fmt;

use frosmo_api::Region;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Parameter};

/// Connection settings stored by the host as installation parameters.
///
/// `region` is kept as the raw stored code: an unknown or empty code is a
/// valid (incomplete) state, not a decode failure.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationParameters {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub site_id: u64,
}

impl Default for InstallationParameters {
    fn default() -> Self {
        Self {
            token: String::new(),
            region: Region::Eu.code().into(),
            site_id: 0,
        }
    }
}

impl fmt::Debug for InstallationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallationParameters")
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .field("region", &self.region)
            .field("site_id", &self.site_id)
            .finish()
    }
}

impl InstallationParameters {
    /// The configured region, if the stored code is one of the known regions.
    pub fn region(&self) -> Option<Region> {
        Region::from_code(&self.region)
    }

    /// Whether the site list can be requested (token and region set).
    pub fn can_list_sites(&self) -> bool {
        !self.token.is_empty() && !self.region.is_empty()
    }

    /// Whether token, region, and site id are all present.
    pub fn is_complete(&self) -> bool {
        self.can_list_sites() && self.site_id != 0
    }

    /// Token and resolved region, or the first missing parameter.
    pub fn credentials(&self) -> Result<(SecretString, Region), CoreError> {
        if self.token.is_empty() {
            return Err(CoreError::MissingParameter(Parameter::Token));
        }
        let region = self
            .region()
            .ok_or(CoreError::MissingParameter(Parameter::Region))?;
        Ok((SecretString::from(self.token.clone()), region))
    }

    /// The site id, or [`Parameter::SiteId`] when unset.
    pub fn site(&self) -> Result<u64, CoreError> {
        if self.site_id == 0 {
            Err(CoreError::MissingParameter(Parameter::SiteId))
        } else {
            Ok(self.site_id)
        }
    }
}
