//! Input validation for safe zone collections.
//!
//! Checks structural integrity of zone records before they are loaded into
//! a store. Detects:
//! - Empty IDs
//! - Duplicate IDs
//! - Out-of-range or non-finite coordinates
//!
//! Occupancy above capacity is reported by live data and is not an error.

use crate::models::SafeZone;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A zone has an empty or whitespace-only ID.
    EmptyId,
    /// Two zones share the same ID.
    DuplicateId,
    /// A zone location is outside the valid latitude/longitude range.
    InvalidCoordinate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a zone collection.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_zones(zones: &[SafeZone]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, zone) in zones.iter().enumerate() {
        if zone.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Zone at index {index} has an empty ID"),
            ));
        } else if !ids.insert(zone.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate zone ID: {}", zone.id),
            ));
        }

        if !zone.location.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCoordinate,
                format!(
                    "Zone '{}' has invalid location ({}, {})",
                    zone.id, zone.location.latitude, zone.location.longitude
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
