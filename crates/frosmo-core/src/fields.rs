// ── Field compatibility mapping ──
//
// Pure conversions between the host's editor-interface model and the
// local field selection. Content-type order is the order the host listed
// them in; field order within a content type is never re-sorted.

use indexmap::IndexMap;

use crate::schema::{
    ContentType, ContentTypeField, ControlTarget, EditorInterface, EditorInterfaceTarget,
    FieldType, TargetState,
};

/// Widget namespace the host uses for app-provided controls.
pub const APP_WIDGET_NAMESPACE: &str = "app";

/// Content-type id → fields that can hold segment names.
pub type CompatibleFields = IndexMap<String, Vec<ContentTypeField>>;

/// Content-type id → ids of the fields wired to this app.
pub type SelectedFields = IndexMap<String, Vec<String>>;

/// Keep only the `Array` fields of each content type.
///
/// Every content type gets an entry, possibly empty; callers hide content
/// types without compatible fields.
pub fn compute_compatible_fields(content_types: &[ContentType]) -> CompatibleFields {
    content_types
        .iter()
        .map(|ct| {
            let fields = ct
                .fields
                .iter()
                .filter(|field| field.field_type == FieldType::Array)
                .cloned()
                .collect();
            (ct.id().to_owned(), fields)
        })
        .collect()
}

/// Collect the field ids each editor interface assigns to the app `app_id`.
///
/// Controls from other namespaces or other apps, and controls without a
/// field id, are ignored. A content type with no qualifying control is
/// absent from the result.
pub fn derive_selected_fields(editor_interfaces: &[EditorInterface], app_id: &str) -> SelectedFields {
    let mut selected = SelectedFields::new();

    for ei in editor_interfaces {
        let Some(ct_id) = ei.content_type_id() else {
            continue;
        };

        let field_ids: Vec<String> = ei
            .controls
            .iter()
            .filter(|control| {
                control.widget_namespace.as_deref() == Some(APP_WIDGET_NAMESPACE)
                    && control.widget_id.as_deref() == Some(app_id)
            })
            .filter_map(|control| control.field_id.clone())
            .filter(|field_id| !field_id.is_empty())
            .collect();

        if !field_ids.is_empty() {
            selected.insert(ct_id.to_owned(), field_ids);
        }
    }

    selected
}

/// Build the save-time target state for every content type.
///
/// Selected fields become `controls` in selection order; content types
/// without a selection get an empty target, detaching the app from them.
pub fn build_target_state(content_types: &[ContentType], selected: &SelectedFields) -> TargetState {
    let editor_interface = content_types
        .iter()
        .map(|ct| {
            let controls = selected
                .get(ct.id())
                .filter(|ids| !ids.is_empty())
                .map(|ids| {
                    ids.iter()
                        .map(|id| ControlTarget {
                            field_id: id.clone(),
                        })
                        .collect()
                });
            (ct.id().to_owned(), EditorInterfaceTarget { controls })
        })
        .collect();

    TargetState { editor_interface }
}

/// Check or uncheck one field of a content type.
///
/// Checking appends; unchecking removes every occurrence of the field id.
pub fn toggle_field(selected: &mut SelectedFields, ct_id: &str, field_id: &str, checked: bool) {
    let fields = selected.entry(ct_id.to_owned()).or_default();
    if checked {
        fields.push(field_id.to_owned());
    } else {
        fields.retain(|current| current != field_id);
    }
}
