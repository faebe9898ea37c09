//! Error types for eligibility evaluation and registration.
//!
//! Structural problems in input snapshots are reported by
//! [`crate::validation`] as collected `ValidationError`s. Everything the
//! engine itself can fail on at call time is an [`EngineError`].

use std::fmt;

use thiserror::Error;

use crate::eligibility::Verdict;

/// Kind of entity a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Program,
    Subject,
    Offering,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Program => "program",
            EntityKind::Subject => "subject",
            EntityKind::Offering => "offering",
        };
        f.write_str(name)
    }
}

/// Errors returned by engine operations.
///
/// None of these are fatal: callers may skip the offending offering and
/// continue with the rest of the snapshot.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced id is absent from the catalog.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Transitive prerequisite walk came back to a subject already visited.
    #[error("prerequisite cycle detected at subject '{0}'")]
    CyclicPrerequisite(String),

    /// Registration refused because the offering is not open and eligible.
    #[error("registration rejected for offering '{offering_id}': {verdict}")]
    Rejected { offering_id: String, verdict: Verdict },

    /// Enrolment in a subject the student already takes.
    #[error("student '{student_id}' is already enrolled in subject '{subject_id}'")]
    AlreadyEnrolled {
        student_id: String,
        subject_id: String,
    },

    /// Withdrawal through an offering the student holds no seat on.
    #[error("student '{student_id}' holds no seat on offering '{offering_id}' for subject '{subject_id}'")]
    NotEnrolled {
        student_id: String,
        offering_id: String,
        subject_id: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether this is a missing-reference error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = EngineError::not_found(EntityKind::Subject, "cs999");
        assert_eq!(err.to_string(), "subject not found: cs999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rejected_display_includes_verdict() {
        let err = EngineError::Rejected {
            offering_id: "2".into(),
            verdict: Verdict::OpenConflict {
                blocking_code: "L-101".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "registration rejected for offering '2': schedule conflict with L-101"
        );
        assert!(!err.is_not_found());
    }
}
