//! Deserialization helpers for JSON fields that distinguish a missing field
//! from an explicit `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field, including `null`, as `Some`.
///
/// Combine with `#[serde(default)]` on an `Option<Option<T>>` field so that a
/// missing field is `None`, `null` is `Some(None)` and a value is `Some(Some(value))`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Trim `text` and treat blank text as absent.
pub(crate) fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
