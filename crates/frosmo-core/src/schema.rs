// ── Host platform schema types ──
//
// The subset of the host's content model the app reads (content types and
// editor interfaces) and writes (target state). Field names follow the
// host's JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Content types ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sys {
    pub id: String,
}

/// Reference to another entity, e.g. `{"sys": {"id": "blogPost"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub sys: Sys,
}

/// Declared type of a content-type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Symbol,
    Text,
    RichText,
    Integer,
    Number,
    Date,
    Boolean,
    Object,
    Location,
    Link,
    /// List of values or references; the only type segments can be stored in.
    Array,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl ContentTypeField {
    pub fn new(id: impl Into<String>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub sys: Sys,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<ContentTypeField>,
}

impl ContentType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fields: Vec<ContentTypeField>) -> Self {
        Self {
            sys: Sys { id: id.into() },
            name: name.into(),
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

// ── Editor interfaces ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInterfaceSys {
    #[serde(default)]
    pub content_type: Option<Link>,
}

/// One widget assignment inside an editor interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(default)]
    pub field_id: Option<String>,
    #[serde(default)]
    pub widget_namespace: Option<String>,
    #[serde(default)]
    pub widget_id: Option<String>,
}

/// The host's per-content-type record of which widget controls which field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInterface {
    #[serde(default)]
    pub sys: EditorInterfaceSys,
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl EditorInterface {
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.content_type.as_ref().map(|link| link.sys.id.as_str())
    }
}

// ── Target state ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlTarget {
    pub field_id: String,
}

/// Desired wiring for one content type. `controls: None` serializes as
/// `{}`, which detaches the app from every field of that content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInterfaceTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<ControlTarget>>,
}

/// Save-time payload describing the controls-to-field wiring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetState {
    #[serde(rename = "EditorInterface")]
    pub editor_interface: IndexMap<String, EditorInterfaceTarget>,
}
