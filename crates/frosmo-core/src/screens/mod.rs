pub mod config;
pub mod field_editor;

pub use config::{ConfigScreen, ConfigurationPayload, FieldSection, SitesRequest};
pub use field_editor::{FieldEditor, SegmentOption, SegmentTag};
