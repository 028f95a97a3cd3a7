//! Strict navigation over provider JSON payloads: every missing key and
//! every type mismatch maps to a distinct resolver error, so upstream
//! payload drift is reported precisely instead of as a generic failure.

use serde_json::Value;

use super::error::ResolveError;

pub(crate) fn member<'a>(value: &'a Value, key: &'static str) -> Result<&'a Value, ResolveError> {
    value
        .get(key)
        .ok_or(ResolveError::MissingRequiredKey(key))
}

pub(crate) fn string<'a>(value: &'a Value, key: &'static str) -> Result<&'a str, ResolveError> {
    member(value, key)?
        .as_str()
        .ok_or(ResolveError::NonMatchingType(key))
}

pub(crate) fn integer(value: &Value, key: &'static str) -> Result<i64, ResolveError> {
    member(value, key)?
        .as_i64()
        .ok_or(ResolveError::NonMatchingType(key))
}

pub(crate) fn object<'a>(value: &'a Value, key: &'static str) -> Result<&'a Value, ResolveError> {
    let inner = member(value, key)?;
    if !inner.is_object() {
        return Err(ResolveError::NonMatchingType(key));
    }
    Ok(inner)
}

pub(crate) fn array<'a>(
    value: &'a Value,
    key: &'static str,
) -> Result<&'a Vec<Value>, ResolveError> {
    member(value, key)?
        .as_array()
        .ok_or(ResolveError::NonMatchingType(key))
}
