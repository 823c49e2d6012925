use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Deployment zone of the Graniitti API.
///
/// Closed set: each region maps to exactly one fixed base URL. Unknown
/// region codes are not representable; use [`base_url`] or
/// [`Region::from_code`] to look up raw codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Eu,
    Eu2,
    Fi1,
    Us,
    Asia,
}

impl Region {
    /// All regions in selector order.
    pub const ALL: [Region; 5] = [Self::Eu, Self::Eu2, Self::Fi1, Self::Us, Self::Asia];

    /// Parse a region code (`"eu"`, `"fi1"`, ...). Returns `None` for
    /// anything outside the table.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// The region code as stored in installation parameters.
    pub fn code(self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::Eu2 => "eu2",
            Self::Fi1 => "fi1",
            Self::Us => "us",
            Self::Asia => "asia",
        }
    }

    /// Graniitti API base URL, without a trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Eu => "https://graniitti.inpref.com/v0",
            Self::Eu2 => "https://graniitti.eu2.frosmo.com/v0",
            Self::Fi1 => "https://graniitti.fi1.frosmo.com/v0",
            Self::Us => "https://graniitti.us.frosmo.com/v0",
            Self::Asia => "https://graniitti.asia.frosmo.com/v0",
        }
    }

    /// Control Panel domain operators know the region by.
    pub fn control_panel_url(self) -> &'static str {
        match self {
            Self::Eu => "https://admin.inpref.com",
            Self::Eu2 => "https://admin.eu2.frosmo.com",
            Self::Fi1 => "https://admin.fi1.frosmo.com",
            Self::Us => "https://admin.us.frosmo.com",
            Self::Asia => "https://admin.asia.frosmo.com",
        }
    }
}

/// Base URL for a raw region code, or `None` when the region is not configured.
pub fn base_url(code: &str) -> Option<&'static str> {
    Region::from_code(code).map(Region::base_url)
}
