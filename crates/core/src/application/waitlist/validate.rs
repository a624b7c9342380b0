// Presence checks for caller-supplied identifiers

use crate::error::{AppError, Result};

/// Reject empty or whitespace-only identifiers
pub(crate) fn require_id(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
