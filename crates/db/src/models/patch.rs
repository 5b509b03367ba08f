//! Helpers for partial-update DTOs.
//!
//! A nullable column in a patch has three states: absent (keep), `null`
//! (clear) and a value (set). Model it as `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "patch::nullable")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(inner)`, where `inner` is `None`
/// for an explicit `null`. Absent fields fall back to `None` via `default`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Split a patch field into the `(provided, value)` pair bound to
/// `CASE WHEN $provided THEN $value ELSE col END`.
pub fn bind_pair<T: Clone>(field: &Option<Option<T>>) -> (bool, Option<T>) {
    (field.is_some(), field.clone().flatten())
}
