//! Conflict, prerequisite and capacity checks.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::{EligibilityPolicy, EngineConfig, PrerequisiteBasis, Verdict};
use crate::error::{EngineError, EntityKind, Result};
use crate::models::{Offering, Student, Subject, SubjectIndex};

/// Finds the enrolled offering that clashes with `offering`.
///
/// Returns the first offering in `all_offerings` (iteration order) whose
/// subject the student is enrolled in and which meets on the same day at
/// the same start time. If several qualify, the earliest one wins.
///
/// The candidate itself is not excluded: when the student is already
/// enrolled in its subject, the candidate is reported as its own blocker.
pub fn conflict_for<'a>(
    student: &Student,
    offering: &Offering,
    all_offerings: &'a [Offering],
) -> Option<&'a Offering> {
    if student.enrolled.is_empty() {
        return None;
    }
    all_offerings
        .iter()
        .find(|o| student.is_enrolled_in(&o.subject_id) && o.same_slot(offering))
}

/// Fraction of seats taken, in `[0.0, 1.0]`. Zero capacity yields `1.0`.
#[inline]
pub fn occupancy_ratio(offering: &Offering) -> f64 {
    offering.occupancy_ratio()
}

fn lookup<'a>(subjects: &'a SubjectIndex, id: &str) -> Result<&'a Subject> {
    subjects
        .get(id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Subject, id))
}

/// Evaluates registration verdicts under an [`EligibilityPolicy`].
///
/// Holds no snapshot state; the same engine can be reused across students
/// and catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine {
    policy: EligibilityPolicy,
}

impl EligibilityEngine {
    /// Creates an engine with the given policy.
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    /// Creates an engine from loaded configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.policy)
    }

    /// The active policy.
    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    fn satisfying_set<'s>(&self, student: &'s Student) -> &'s BTreeSet<String> {
        match self.policy.prerequisite_basis {
            PrerequisiteBasis::Enrolled => &student.enrolled,
            PrerequisiteBasis::Completed => &student.completed,
        }
    }

    /// Whether the student satisfies the prerequisite of `subject_id`.
    ///
    /// A subject without a prerequisite is always satisfied. Otherwise the
    /// prerequisite must be in the student's enrolled or completed set,
    /// depending on the policy. With `transitive` set, every subject up the
    /// chain must be in that set.
    ///
    /// # Errors
    /// - `NotFound` if `subject_id` or a prerequisite on the walked chain is
    ///   not in `subjects`
    /// - `CyclicPrerequisite` if the walked chain revisits a subject
    pub fn has_prerequisite(
        &self,
        student: &Student,
        subject_id: &str,
        subjects: &SubjectIndex,
    ) -> Result<bool> {
        let subject = lookup(subjects, subject_id)?;
        let satisfied = self.satisfying_set(student);

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(subject.id.as_str());

        let mut current = subject;
        while let Some(prereq_id) = current.prerequisite.as_deref() {
            if !visited.insert(prereq_id) {
                return Err(EngineError::CyclicPrerequisite(prereq_id.to_string()));
            }
            let prereq = lookup(subjects, prereq_id)?;
            if !satisfied.contains(prereq_id) {
                debug!(
                    student = %student.id,
                    subject = subject_id,
                    missing = prereq_id,
                    "prerequisite not satisfied"
                );
                return Ok(false);
            }
            if !self.policy.transitive {
                break;
            }
            current = prereq;
        }

        Ok(true)
    }

    /// Classifies an offering for a student.
    ///
    /// Capacity is checked first, then conflicts, then prerequisites; the
    /// first failing check decides the verdict.
    ///
    /// # Errors
    /// `NotFound` if the offering's subject or any of the student's enrolled
    /// subjects is missing from `subjects`, plus any error from
    /// [`EligibilityEngine::has_prerequisite`].
    pub fn classify_offering(
        &self,
        student: &Student,
        offering: &Offering,
        all_offerings: &[Offering],
        subjects: &SubjectIndex,
    ) -> Result<Verdict> {
        lookup(subjects, &offering.subject_id)?;
        for enrolled in &student.enrolled {
            lookup(subjects, enrolled)?;
        }

        let verdict = if offering.is_full() {
            Verdict::Closed
        } else if let Some(blocking) = conflict_for(student, offering, all_offerings) {
            Verdict::OpenConflict {
                blocking_code: blocking.code.clone(),
            }
        } else if !self.has_prerequisite(student, &offering.subject_id, subjects)? {
            Verdict::OpenMissingPrerequisite
        } else {
            Verdict::OpenEligible
        };

        debug!(
            student = %student.id,
            offering = %offering.id,
            verdict = verdict.tag(),
            "classified offering"
        );
        Ok(verdict)
    }
}
