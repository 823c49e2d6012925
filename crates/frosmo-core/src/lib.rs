//! Screen logic for the Frosmo segments app, independent of any UI toolkit.
//!
//! - **[`ConfigScreen`]**: installation parameters, site picker, connection
//!   test, and the per-content-type field selection that becomes the host's
//!   target state on save ([`ConfigScreen::on_configure`]).
//!
//! - **[`FieldEditor`]**: attaches and detaches segment names on an entry
//!   field, writing through to the host on every change.
//!
//! - **[`fields`]**: pure conversions between host editor interfaces and
//!   the local field selection.
//!
//! The host platform and the Graniitti API are reached through the
//! [`AppHost`] / [`FieldHost`] and [`Graniitti`] traits.

pub mod connector;
pub mod error;
pub mod fields;
pub mod host;
pub mod notice;
pub mod parameters;
pub mod schema;
pub mod screens;

#[cfg(test)]
pub(crate) mod test_support;

// ── Primary re-exports ──────────────────────────────────────────────
pub use connector::{Graniitti, GraniittiConnector};
pub use error::{CoreError, Parameter};
pub use fields::{
    CompatibleFields, SelectedFields, build_target_state, compute_compatible_fields,
    derive_selected_fields,
};
pub use host::{AppHost, FieldHost};
pub use notice::{Notice, NoticeLevel};
pub use parameters::InstallationParameters;
pub use schema::{ContentType, ContentTypeField, EditorInterface, FieldType, TargetState};
pub use screens::{ConfigScreen, ConfigurationPayload, FieldEditor, SegmentTag};
