//! Input validation for timetable generation.
//!
//! Checks structural integrity of the roster and subject catalog before
//! generating. Detects:
//! - Duplicate teacher and subject IDs
//! - Teachers assigned subject IDs that are not in the catalog
//! - Subjects whose level/grade is not part of the taxonomy
//! - Teachers with no qualification at all
//!
//! None of these stop generation; they explain why a teacher or subject
//! produced no entries.

use std::collections::HashSet;

use crate::models::{LevelTaxonomy, Subject, Teacher};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A teacher is assigned a subject ID that doesn't exist.
    UnknownSubjectReference,
    /// A subject's level/grade is not in the taxonomy.
    UnknownGrade,
    /// A teacher has neither assigned subject ids nor subject names.
    UnqualifiedTeacher,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the reference data used by the generator.
///
/// Checks:
/// 1. No duplicate teacher IDs
/// 2. No duplicate subject IDs
/// 3. Every assigned subject ID points to an existing subject
/// 4. Every subject's (level, grade) exists in the taxonomy
/// 5. Every teacher has at least one qualification
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teachers: &[Teacher],
    subjects: &[Subject],
    taxonomy: &LevelTaxonomy,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        if !taxonomy.contains(&s.level, &s.grade) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGrade,
                format!(
                    "Subject '{}' is in unknown grade '{} / {}'",
                    s.id, s.level, s.grade
                ),
            ));
        }
    }

    for t in teachers {
        if !t.has_qualifications() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnqualifiedTeacher,
                format!("Teacher '{}' has no subjects assigned", t.id),
            ));
        }
        for sid in &t.assigned_subject_ids {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!("Teacher '{}' is assigned unknown subject '{}'", t.id, sid),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
