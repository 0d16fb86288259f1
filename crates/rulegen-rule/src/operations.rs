use rulegen_core::error::TransformError;
use rulegen_core::ir::{BodyKind, ConsumeEntry, OperationSet};
use rulegen_core::naming::NamingPolicy;

use crate::imports::{ImportRefs, resolve_imports};

/// Media type assumed for operations that declare none.
pub const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// The only media type sent as a form body.
pub const FORM_MEDIA_TYPE: &str = "multipart/form-data";

/// `form` for exactly `multipart/form-data`, `json` for everything else.
///
/// Media types that are neither JSON nor multipart (e.g. `text/plain`) are
/// sent as JSON for compatibility; there is no text body kind.
pub fn classify_body_kind(media_type: &str) -> BodyKind {
    if media_type == FORM_MEDIA_TYPE {
        return BodyKind::Form;
    }
    if !is_json_like(media_type) {
        log::debug!("no body kind for `{media_type}`, falling back to json");
    }
    BodyKind::Json
}

fn is_json_like(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or(media_type).trim();
    essence == DEFAULT_MEDIA_TYPE || essence.ends_with("+json")
}

/// Bring an operation set into canonical form in place and record its
/// import entries in `refs`.
pub fn normalize_operations(
    naming: &NamingPolicy<'_>,
    set: &mut OperationSet,
    refs: &mut ImportRefs,
) -> Result<(), TransformError> {
    set.api_filename = Some(naming.to_api_filename(&set.classname));

    for op in &mut set.operations {
        if op.consumes.is_empty() {
            op.consumes.push(ConsumeEntry::new(DEFAULT_MEDIA_TYPE));
        }
        for consume in &mut op.consumes {
            consume.body_kind = Some(classify_body_kind(&consume.media_type));
        }
    }

    set.import_entries = resolve_imports(&set.imports, naming.model_package()).map_err(
        |source| TransformError::OperationSet {
            classname: set.classname.clone(),
            source,
        },
    )?;
    refs.extend(&set.import_entries);

    log::debug!(
        "normalized `{}`: {} operations, {} imports",
        set.classname,
        set.operations.len(),
        set.import_entries.len()
    );
    Ok(())
}
