//! Field-level validation accumulator.
//!
//! A [`Validator`] collects every failed check from one pass instead of
//! stopping at the first, so a client sees all problems with a payload in a
//! single response. Construct one per request; it holds no shared state.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{CoreError, FieldErrors};

/// Collects field-level validation failures.
///
/// Only the first message recorded for a field is kept. Rule sets are
/// written most-specific-first, so a later, vaguer failure on the same field
/// never hides an earlier one.
#[derive(Debug, Default, Clone)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no check has failed.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` under `key` unless the key already has one.
    pub fn add_error(&mut self, key: &str, message: &str) {
        if !self.errors.contains_key(key) {
            self.errors.insert(key.to_string(), message.to_string());
        }
    }

    /// Record `message` under `key` when `ok` is false.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Convert the accumulated failures into a [`CoreError::Validation`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors))
        }
    }
}

/// `true` if every element of `values` is distinct. Order does not matter.
pub fn unique<T>(values: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}

/// `true` if `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}
