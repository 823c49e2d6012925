// ── Host platform seams ──
//
// The host's extension SDK is a collaborator outside this crate. The
// screens only need the operations below; the embedding layer implements
// them over the real SDK.

use std::future::Future;

use crate::error::CoreError;
use crate::parameters::InstallationParameters;
use crate::schema::{ContentType, EditorInterface};

/// Host operations available to the configuration screen.
pub trait AppHost {
    /// Identifier of this app installation, as used in editor-interface
    /// `widgetId` values.
    fn app_id(&self) -> &str;

    /// Stored installation parameters; `None` before first install.
    fn get_parameters(
        &self,
    ) -> impl Future<Output = Result<Option<InstallationParameters>, CoreError>>;

    fn get_content_types(&self) -> impl Future<Output = Result<Vec<ContentType>, CoreError>>;

    fn get_editor_interfaces(
        &self,
    ) -> impl Future<Output = Result<Vec<EditorInterface>, CoreError>>;

    /// Tell the host the screen finished loading.
    fn set_ready(&self);
}

/// Host operations available to the field editor.
pub trait FieldHost {
    /// Installation parameters as injected into the field location.
    fn parameters(&self) -> Option<InstallationParameters>;

    /// Current field value; `None` when the entry has no value yet.
    fn get_value(&self) -> Option<Vec<String>>;

    /// Persist a new field value on the entry.
    fn set_value(&self, value: Vec<String>) -> impl Future<Output = Result<(), CoreError>>;
}
