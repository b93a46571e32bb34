use crate::error::StoreError;

/// Validate a required string field: non-blank, at most `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), StoreError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max {
        return Err(StoreError::Validation(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    Ok(())
}

/// Validate an optional string field (at most `max` characters when present).
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), StoreError> {
    if let Some(value) = value
        && value.chars().count() > max
    {
        return Err(StoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate every entry of a list field.
pub fn validate_items(field: &str, items: &[String], max: usize) -> Result<(), StoreError> {
    for item in items {
        if item.trim().is_empty() || item.chars().count() > max {
            return Err(StoreError::Validation(format!(
                "Each entry of {field} must be 1-{max} characters"
            )));
        }
    }
    Ok(())
}

pub fn validate_optional_items(
    field: &str,
    items: Option<&[String]>,
    max: usize,
) -> Result<(), StoreError> {
    match items {
        Some(items) => validate_items(field, items, max),
        None => Ok(()),
    }
}

/// Trim a string and turn blank into `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
