//! Request-field validation shared by every write endpoint.
//!
//! Handlers never check fields inline; they describe the fields they need and
//! let [`require_non_empty`] produce one consistent [`CoreError::InvalidInput`].

use crate::error::CoreError;
use crate::types::DbId;

/// Client-facing prefix used whenever a required field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// A named field value as received from the client (`None` when absent).
pub type Field<'a> = (&'static str, Option<&'a str>);

/// Ensure every listed field is present and not blank.
///
/// Whitespace-only values count as empty. On failure the error message names
/// all missing fields in the order given, e.g.
/// `All fields are required (missing: name, email)`.
pub fn require_non_empty(fields: &[Field<'_>]) -> Result<(), CoreError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(CoreError::InvalidInput(format!(
        "{REQUIRED_FIELDS_MESSAGE} (missing: {})",
        missing.join(", ")
    )))
}

/// Collapse a blank optional value to `None` and trim the rest.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a path segment into a row identity.
///
/// Only positive decimal integers are accepted; identities start at 1.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidInput(format!("Invalid id: {raw}"))),
    }
}
