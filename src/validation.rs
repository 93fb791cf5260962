//! Roster integrity checks.
//!
//! Checks structural integrity of a roster, typically right after it is
//! loaded from disk. Detects:
//! - Duplicate competitor or judge names
//! - Blank names
//! - Blank rooms
//!
//! Names are stored lowercase, so plain equality here is already the
//! case-insensitive comparison the uniqueness rule calls for.

use std::collections::HashSet;

use crate::models::Roster;

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
    /// Two entries share the same name.
    DuplicateName,
    /// An entry has an empty or whitespace-only name.
    BlankName,
    /// A judge has an empty or whitespace-only room.
    BlankRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster's structural integrity.
///
/// Checks:
/// 1. No blank competitor or judge names
/// 2. No duplicate competitor names
/// 3. No duplicate judge names
/// 4. No blank rooms
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut competitor_names = HashSet::new();
    for c in &roster.competitors {
        if c.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "competitor with blank name",
            ));
        } else if !competitor_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate competitor name: {}", c.name),
            ));
        }
    }

    let mut judge_names = HashSet::new();
    for j in &roster.judges {
        if j.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "judge with blank name",
            ));
        } else if !judge_names.insert(j.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate judge name: {}", j.name),
            ));
        }
        if j.room.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankRoom,
                format!("judge '{}' has a blank room", j.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
