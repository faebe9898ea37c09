//! Input validation for registration snapshots.
//!
//! Checks structural integrity of the catalog and of student records
//! before eligibility is evaluated. Detects:
//! - Duplicate IDs
//! - Dangling program, subject and prerequisite references
//! - Self and circular prerequisites (DAG validation)
//! - Non-positive credits, over-enrolled offerings, out-of-range GPA
//! - Recorded seats on offerings of another subject
//!
//! All checks run to completion so callers see every problem at once.

use crate::models::{Catalog, Offering, Program, Student, Subject};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Highest GPA on the grading scale.
pub const MAX_GPA: f64 = 4.0;

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
    /// A program requires zero credits.
    InvalidCreditRequirement,
    /// A subject is worth zero credits.
    InvalidCredits,
    /// A subject or student references a program that doesn't exist.
    InvalidProgramReference,
    /// A prerequisite references a subject that doesn't exist.
    InvalidPrerequisite,
    /// A subject is its own prerequisite.
    SelfPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
    /// An offering or student references a subject that doesn't exist.
    InvalidSubjectReference,
    /// An offering has more enrolments than seats.
    CapacityExceeded,
    /// GPA outside `[0.0, 4.0]`.
    GpaOutOfRange,
    /// A recorded seat points at an unknown offering, an offering of another
    /// subject, or a subject the student isn't enrolled in.
    InvalidRegistration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the catalog inputs.
///
/// Checks:
/// 1. No duplicate program, subject or offering IDs
/// 2. Programs require a positive number of credits
/// 3. Subjects are worth a positive number of credits
/// 4. Subjects belong to an existing program
/// 5. Prerequisites reference existing subjects
/// 6. No subject is its own prerequisite
/// 7. No circular prerequisite chains
/// 8. Offerings reference existing subjects
/// 9. No offering is enrolled beyond capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    programs: &[Program],
    subjects: &[Subject],
    offerings: &[Offering],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut program_ids = HashSet::new();
    for p in programs {
        if !program_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate program ID: {}", p.id),
            ));
        }
        if p.total_credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCreditRequirement,
                format!("Program '{}' requires zero credits", p.id),
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
        if s.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredits,
                format!("Subject '{}' is worth zero credits", s.id),
            ));
        }
        if !program_ids.contains(s.program_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProgramReference,
                format!(
                    "Subject '{}' references unknown program '{}'",
                    s.id, s.program_id
                ),
            ));
        }
    }

    // Check prerequisite references
    for s in subjects {
        let Some(prereq) = s.prerequisite.as_deref() else {
            continue;
        };
        if prereq == s.id {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPrerequisite,
                format!("Subject '{}' is its own prerequisite", s.id),
            ));
        } else if !subject_ids.contains(prereq) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPrerequisite,
                format!(
                    "Subject '{}' references unknown prerequisite '{}'",
                    s.id, prereq
                ),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(subjects) {
        errors.push(cycle_err);
    }

    let mut offering_ids = HashSet::new();
    for o in offerings {
        if !offering_ids.insert(o.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate offering ID: {}", o.id),
            ));
        }
        if !subject_ids.contains(o.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectReference,
                format!(
                    "Offering '{}' references unknown subject '{}'",
                    o.id, o.subject_id
                ),
            ));
        }
        if o.enrolled_count > o.capacity {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityExceeded,
                format!(
                    "Offering '{}' has {} enrolled for {} seats",
                    o.id, o.enrolled_count, o.capacity
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

/// Validates a student record against a catalog.
///
/// Checks:
/// 1. The student's program exists
/// 2. Every enrolled and completed subject exists
/// 3. GPA lies in `[0.0, 4.0]`
/// 4. Every recorded registration names an offering of an enrolled subject
pub fn validate_student(student: &Student, catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    if catalog.program(&student.program_id).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProgramReference,
            format!(
                "Student '{}' references unknown program '{}'",
                student.id, student.program_id
            ),
        ));
    }

    let referenced = student
        .enrolled
        .iter()
        .map(|id| ("enrolled", id))
        .chain(student.completed.iter().map(|id| ("completed", id)));
    for (set, subject_id) in referenced {
        if catalog.subject(subject_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectReference,
                format!(
                    "Student '{}' has unknown {set} subject '{subject_id}'",
                    student.id
                ),
            ));
        }
    }

    for (subject_id, offering_id) in &student.registrations {
        let held = catalog
            .offering(offering_id)
            .is_some_and(|o| &o.subject_id == subject_id);
        if !held || !student.is_enrolled_in(subject_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRegistration,
                format!(
                    "Student '{}' has invalid registration '{subject_id}' -> '{offering_id}'",
                    student.id
                ),
            ));
        }
    }

    if !(0.0..=MAX_GPA).contains(&student.gpa) {
        errors.push(ValidationError::new(
            ValidationErrorKind::GpaOutOfRange,
            format!("Student '{}' has GPA {} outside [0, 4]", student.id, student.gpa),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// Edges run from a subject to its prerequisite. Self-loops are reported
/// separately by the caller and skipped here. Dangling prerequisites are
/// treated as leaves.
fn detect_cycles(subjects: &[Subject]) -> Option<ValidationError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_ids: Vec<&str> = Vec::new();

    for s in subjects {
        all_ids.push(&s.id);
        if let Some(prereq) = s.prerequisite.as_deref() {
            if prereq != s.id {
                adj.entry(s.id.as_str()).or_default().push(prereq);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain involving subject '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
