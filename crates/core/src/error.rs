use std::collections::BTreeMap;

use crate::types::DbId;

/// Field name to message, as collected by a [`Validator`](crate::validation::Validator).
///
/// Sorted so error bodies serialize deterministically.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Edit conflict: {entity} with id {id} was modified by another writer")]
    EditConflict { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field} {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}
