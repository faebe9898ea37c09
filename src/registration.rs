//! Registration write path.
//!
//! Commits enrolments and withdrawals against caller-owned snapshots.
//! An enrolment is accepted only when the offering classifies as
//! [`Verdict::OpenEligible`] and the student is not already enrolled in the
//! subject; it then takes one seat, adds the subject to the student's
//! enrolled set and records the offering in `Student::registrations`.
//! Withdrawal gives the seat back, and only on that recorded offering.
//!
//! Both operations check before mutating: a rejected call leaves the
//! catalog and the student untouched.

use serde::Serialize;
use tracing::info;

use crate::eligibility::{EligibilityEngine, Verdict};
use crate::error::{EngineError, Result};
use crate::models::{Catalog, Student};

/// What a committed registration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegistrationAction {
    Enrolled,
    Withdrawn,
}

/// Record of a committed registration change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationReceipt {
    pub action: RegistrationAction,
    pub student_id: String,
    pub offering_id: String,
    pub offering_code: String,
    pub subject_id: String,
    /// Seats left on the offering after the change.
    pub seats_remaining: u32,
}

/// Applies enrolments and withdrawals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registrar {
    engine: EligibilityEngine,
}

impl Registrar {
    /// Creates a registrar that checks eligibility with `engine`.
    pub fn new(engine: EligibilityEngine) -> Self {
        Self { engine }
    }

    /// Enrols the student in an offering.
    ///
    /// # Errors
    /// - `NotFound` if the offering (or a subject it depends on) is unknown
    /// - `AlreadyEnrolled` if the student already takes the offering's subject
    /// - `Rejected` if the verdict is anything but `OpenEligible`
    pub fn enroll(
        &self,
        catalog: &mut Catalog,
        student: &mut Student,
        offering_id: &str,
    ) -> Result<RegistrationReceipt> {
        let offering = catalog.require_offering(offering_id)?;
        if student.is_enrolled_in(&offering.subject_id) {
            return Err(EngineError::AlreadyEnrolled {
                student_id: student.id.clone(),
                subject_id: offering.subject_id.clone(),
            });
        }
        let verdict = self.engine.classify_offering(
            student,
            offering,
            catalog.offerings(),
            catalog.subjects(),
        )?;
        if verdict != Verdict::OpenEligible {
            return Err(EngineError::Rejected {
                offering_id: offering_id.to_string(),
                verdict,
            });
        }

        let offering = catalog.offering_mut(offering_id)?;
        offering.enrolled_count += 1;
        student.enrolled.insert(offering.subject_id.clone());
        student
            .registrations
            .insert(offering.subject_id.clone(), offering.id.clone());

        info!(
            student = %student.id,
            offering = %offering.id,
            seats_remaining = offering.remaining_seats(),
            "enrolled"
        );

        Ok(RegistrationReceipt {
            action: RegistrationAction::Enrolled,
            student_id: student.id.clone(),
            offering_id: offering.id.clone(),
            offering_code: offering.code.clone(),
            subject_id: offering.subject_id.clone(),
            seats_remaining: offering.remaining_seats(),
        })
    }

    /// Withdraws the student from the subject registered through an offering.
    ///
    /// # Errors
    /// - `NotFound` if the offering is unknown
    /// - `NotEnrolled` if the student holds no seat on this offering, including
    ///   when the subject was taken through another offering or enrolled
    ///   without a recorded registration
    pub fn withdraw(
        &self,
        catalog: &mut Catalog,
        student: &mut Student,
        offering_id: &str,
    ) -> Result<RegistrationReceipt> {
        let offering = catalog.offering_mut(offering_id)?;
        if student.registered_offering(&offering.subject_id) != Some(offering.id.as_str()) {
            return Err(EngineError::NotEnrolled {
                student_id: student.id.clone(),
                offering_id: offering.id.clone(),
                subject_id: offering.subject_id.clone(),
            });
        }
        student.registrations.remove(&offering.subject_id);
        student.enrolled.remove(&offering.subject_id);
        offering.enrolled_count = offering.enrolled_count.saturating_sub(1);

        info!(
            student = %student.id,
            offering = %offering.id,
            seats_remaining = offering.remaining_seats(),
            "withdrawn"
        );

        Ok(RegistrationReceipt {
            action: RegistrationAction::Withdrawn,
            student_id: student.id.clone(),
            offering_id: offering.id.clone(),
            offering_code: offering.code.clone(),
            subject_id: offering.subject_id.clone(),
            seats_remaining: offering.remaining_seats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::EligibilityPolicy;
    use crate::error::EntityKind;
    use crate::fixtures;
    use crate::models::{Offering, SessionType};
    use chrono::Weekday;

    #[test]
    fn test_enroll_eligible() {
        let mut catalog = fixtures::catalog();
        let mut student = fixtures::omar();

        let receipt = Registrar::default()
            .enroll(&mut catalog, &mut student, "3")
            .unwrap();

        assert_eq!(receipt.action, RegistrationAction::Enrolled);
        assert_eq!(receipt.offering_code, "LB-201");
        assert_eq!(receipt.subject_id, "cs201");
        assert_eq!(receipt.seats_remaining, 4);
        assert_eq!(catalog.offering("3").unwrap().enrolled_count, 16);
        assert!(student.is_enrolled_in("cs201"));
    }

    #[test]
    fn test_enroll_rejected_leaves_state() {
        let mut catalog = fixtures::catalog();
        let mut student = fixtures::laila();
        let before = student.clone();

        // cs201 requires cs102
        let err = Registrar::default()
            .enroll(&mut catalog, &mut student, "3")
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::Rejected { verdict: Verdict::OpenMissingPrerequisite, .. }
        ));
        assert_eq!(catalog.offering("3").unwrap().enrolled_count, 15);
        assert_eq!(student, before);
    }

    #[test]
    fn test_enroll_until_closed() {
        let mut catalog = fixtures::catalog();
        let registrar = Registrar::default();

        // L-M1 has 2 seats left.
        for i in 0..2 {
            let mut student = Student::new(format!("n{i}"), "eng");
            registrar.enroll(&mut catalog, &mut student, "4").unwrap();
        }
        let mut late = Student::new("late", "eng");
        let err = registrar.enroll(&mut catalog, &mut late, "4").unwrap_err();

        assert!(matches!(
            err,
            EngineError::Rejected { verdict: Verdict::Closed, .. }
        ));
        let offering = catalog.offering("4").unwrap();
        assert_eq!(offering.enrolled_count, offering.capacity);
    }

    #[test]
    fn test_enroll_unknown_offering() {
        let mut catalog = fixtures::catalog();
        let mut student = fixtures::omar();

        let err = Registrar::default()
            .enroll(&mut catalog, &mut student, "99")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::NotFound { kind: EntityKind::Offering, .. }
        ));
    }

    #[test]
    fn test_enroll_uses_policy() {
        let mut catalog = fixtures::catalog();
        // Enrolled in cs102 but completed nothing.
        let mut student = fixtures::omar();
        let registrar = Registrar::new(EligibilityEngine::new(EligibilityPolicy::completed()));

        let err = registrar
            .enroll(&mut catalog, &mut student, "3")
            .unwrap_err();
        assert!(matches!(err, EngineError::Rejected { .. }));

        let mut student = student.with_completed("cs102");
        assert!(registrar.enroll(&mut catalog, &mut student, "3").is_ok());
    }

    #[test]
    fn test_withdraw_reverses_enroll() {
        let mut catalog = fixtures::catalog();
        let mut student = fixtures::omar();
        let registrar = Registrar::default();

        registrar.enroll(&mut catalog, &mut student, "3").unwrap();
        let receipt = registrar.withdraw(&mut catalog, &mut student, "3").unwrap();

        assert_eq!(receipt.action, RegistrationAction::Withdrawn);
        assert_eq!(receipt.seats_remaining, 5);
        assert_eq!(catalog.offering("3").unwrap().enrolled_count, 15);
        assert_eq!(student, fixtures::omar());
    }

    #[test]
    fn test_withdraw_not_enrolled() {
        let mut catalog = fixtures::catalog();
        let mut student = fixtures::laila();

        let err = Registrar::default()
            .withdraw(&mut catalog, &mut student, "1")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::NotEnrolled { ref subject_id, .. } if subject_id == "cs101"
        ));
        assert_eq!(catalog.offering("1").unwrap().enrolled_count, 45);
    }

    /// Sample catalog plus a second math101 session (T-M1, Thursday 10:00).
    fn two_session_catalog() -> Catalog {
        let mut offerings = fixtures::offerings();
        offerings.push(
            Offering::new("5", "math101", SessionType::Tutorial, Weekday::Thu, fixtures::at(10, 0))
                .with_code("T-M1")
                .with_capacity(30)
                .with_enrolled(10),
        );
        Catalog::new(fixtures::programs(), fixtures::subjects(), offerings).unwrap()
    }

    #[test]
    fn test_withdraw_through_other_session_rejected() {
        let mut catalog = two_session_catalog();
        let mut student = Student::new("s", "eng");
        let registrar = Registrar::default();

        registrar.enroll(&mut catalog, &mut student, "4").unwrap();
        assert_eq!(student.registered_offering("math101"), Some("4"));

        let err = registrar
            .withdraw(&mut catalog, &mut student, "5")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::NotEnrolled { ref offering_id, ref subject_id, .. }
                if offering_id == "5" && subject_id == "math101"
        ));
        assert_eq!(catalog.offering("4").unwrap().enrolled_count, 59);
        assert_eq!(catalog.offering("5").unwrap().enrolled_count, 10);
        assert!(student.is_enrolled_in("math101"));

        registrar.withdraw(&mut catalog, &mut student, "4").unwrap();
        assert_eq!(catalog.offering("4").unwrap().enrolled_count, 58);
        assert_eq!(catalog.offering("5").unwrap().enrolled_count, 10);
        assert!(!student.is_enrolled_in("math101"));
        assert!(student.registrations.is_empty());
    }

    #[test]
    fn test_enroll_second_session_of_same_subject_rejected() {
        let mut catalog = two_session_catalog();
        let mut student = Student::new("s", "eng");
        let registrar = Registrar::default();

        registrar.enroll(&mut catalog, &mut student, "4").unwrap();
        let err = registrar
            .enroll(&mut catalog, &mut student, "5")
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::AlreadyEnrolled { ref subject_id, .. } if subject_id == "math101"
        ));
        assert_eq!(catalog.offering("5").unwrap().enrolled_count, 10);
        assert_eq!(student.registered_offering("math101"), Some("4"));
    }

    #[test]
    fn test_withdraw_without_recorded_registration() {
        let mut catalog = fixtures::catalog();
        // Enrolled in math101 by the source data, no seat recorded.
        let mut student = fixtures::ziad();

        let err = Registrar::default()
            .withdraw(&mut catalog, &mut student, "4")
            .unwrap_err();
        assert!(matches!(err, EngineError::NotEnrolled { .. }));
        assert_eq!(catalog.offering("4").unwrap().enrolled_count, 58);
        assert!(student.is_enrolled_in("math101"));

        let mut student = Student::new("s", "eng").with_registration("math101", "4");
        Registrar::default()
            .withdraw(&mut catalog, &mut student, "4")
            .unwrap();
        assert_eq!(catalog.offering("4").unwrap().enrolled_count, 57);
    }
}
