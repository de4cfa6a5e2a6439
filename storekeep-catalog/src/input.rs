//! Required-field checks shared by the mutation services.
//!
//! Presence rules match the store API's historical behavior: empty strings
//! and zero numbers count as missing. Each entity supplies its own message.

use crate::error::{CatalogError, CatalogResult};

pub(crate) fn require_str<'a>(value: Option<&'a str>, message: &str) -> CatalogResult<&'a str> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(CatalogError::Validation(message.to_owned())),
    }
}

pub(crate) fn require_i64(value: Option<i64>, message: &str) -> CatalogResult<i64> {
    match value {
        Some(n) if n != 0 => Ok(n),
        _ => Err(CatalogError::Validation(message.to_owned())),
    }
}

pub(crate) fn require_f64(value: Option<f64>, message: &str) -> CatalogResult<f64> {
    match value {
        Some(n) if n != 0.0 => Ok(n),
        _ => Err(CatalogError::Validation(message.to_owned())),
    }
}

pub(crate) fn require_bool(value: Option<bool>, message: &str) -> CatalogResult<bool> {
    value.ok_or_else(|| CatalogError::Validation(message.to_owned()))
}

pub(crate) fn require_list(
    value: Option<Vec<String>>,
    message: &str,
) -> CatalogResult<Vec<String>> {
    value.ok_or_else(|| CatalogError::Validation(message.to_owned()))
}

pub(crate) fn non_negative_i64(value: i64, message: &str) -> CatalogResult<i64> {
    if value < 0 {
        return Err(CatalogError::Validation(message.to_owned()));
    }
    Ok(value)
}

pub(crate) fn non_negative_f64(value: f64, message: &str) -> CatalogResult<f64> {
    if value < 0.0 {
        return Err(CatalogError::Validation(message.to_owned()));
    }
    Ok(value)
}
