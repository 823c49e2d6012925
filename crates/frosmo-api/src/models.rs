// Graniitti wire models.
//
// Only the fields the app reads are modeled; serde drops everything else,
// which is how segment payloads are trimmed to title/name/group.

use serde::{Deserialize, Serialize};

/// A Frosmo site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: u64,
    pub url: String,
}

/// Group a segment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGroup {
    pub name: String,
}

/// A segment as listed by `GET /sites/{id}/segments?includes=group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable identifier stored on content entries.
    pub segment_name: String,
    pub title: String,
    #[serde(default)]
    pub group: Option<SegmentGroup>,
}

impl Segment {
    /// Display label: `"{group} - {title}"`, or just the title.
    pub fn label(&self) -> String {
        match &self.group {
            Some(group) => format!("{} - {}", group.name, self.title),
            None => self.title.clone(),
        }
    }
}

/// Error body shape. Every field is optional; unparseable bodies are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
