//! serde helpers for the Observatory wire format.

use serde::de::{Deserialize, Deserializer, Error};

/// Deserializes a field the feed reports either as a JSON value or as an
/// empty string standing in for "absent". `uvindex` and `warningMessage`
/// both do this outside reporting hours.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum EmptyOr<T> {
        Value(T),
        Text(String),
    }

    match EmptyOr::<T>::deserialize(deserializer)? {
        EmptyOr::Value(value) => Ok(Some(value)),
        EmptyOr::Text(text) if text.is_empty() => Ok(None),
        EmptyOr::Text(text) => Err(Error::custom(format!(
            "unexpected string value {text:?}"
        ))),
    }
}
