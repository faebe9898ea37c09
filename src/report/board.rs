//! Registration board: the student's open / closed offering tabs.

use chrono::{NaiveTime, Weekday};
use serde::Serialize;
use tracing::warn;

use crate::eligibility::{EligibilityEngine, Verdict};
use crate::error::EngineError;
use crate::models::{Catalog, Offering, SessionType, Student};

/// Which tab of the board a row appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegistrationTab {
    /// `enrolled_count < capacity`.
    Open,
    /// `enrolled_count >= capacity`.
    Closed,
}

impl RegistrationTab {
    /// Tab an offering belongs on.
    pub fn of(offering: &Offering) -> Self {
        if offering.is_full() {
            RegistrationTab::Closed
        } else {
            RegistrationTab::Open
        }
    }
}

/// One rendered offering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferingRow {
    pub offering_id: String,
    pub code: String,
    pub subject_code: String,
    pub subject_name: String,
    pub credits: u32,
    pub session_type: SessionType,
    pub day: Weekday,
    pub start: NaiveTime,
    pub room: String,
    pub instructor: String,
    pub verdict: Verdict,
    /// Fraction of seats taken (0.0..=1.0).
    pub occupancy: f64,
    pub enrolled_count: u32,
    pub capacity: u32,
}

/// An offering left off the board because it could not be classified.
#[derive(Debug)]
pub struct SkippedOffering {
    pub offering_id: String,
    pub error: EngineError,
}

/// Per-student registration board.
///
/// Rows keep catalog order within each tab.
#[derive(Debug)]
pub struct RegistrationBoard {
    pub student_id: String,
    pub open: Vec<OfferingRow>,
    pub closed: Vec<OfferingRow>,
    pub skipped: Vec<SkippedOffering>,
}

impl RegistrationBoard {
    /// Classifies every catalog offering for `student`.
    ///
    /// Offerings that fail classification are logged and collected in
    /// `skipped`; the rest of the board is still built. Every catalog
    /// offering ends up either in a tab or in `skipped`.
    pub fn build(engine: &EligibilityEngine, student: &Student, catalog: &Catalog) -> Self {
        let mut board = Self {
            student_id: student.id.clone(),
            open: Vec::new(),
            closed: Vec::new(),
            skipped: Vec::new(),
        };

        for offering in catalog.offerings() {
            let classified = catalog
                .require_subject(&offering.subject_id)
                .and_then(|subject| {
                    engine
                        .classify_offering(student, offering, catalog.offerings(), catalog.subjects())
                        .map(|verdict| (subject, verdict))
                });
            let (subject, verdict) = match classified {
                Ok(pair) => pair,
                Err(error) => {
                    warn!(
                        student = %student.id,
                        offering = %offering.id,
                        %error,
                        "skipping offering"
                    );
                    board.skipped.push(SkippedOffering {
                        offering_id: offering.id.clone(),
                        error,
                    });
                    continue;
                }
            };

            let row = OfferingRow {
                offering_id: offering.id.clone(),
                code: offering.code.clone(),
                subject_code: subject.code.clone(),
                subject_name: subject.name.clone(),
                credits: subject.credits,
                session_type: offering.session_type,
                day: offering.day,
                start: offering.start,
                room: offering.room.clone(),
                instructor: offering.instructor.clone(),
                verdict,
                occupancy: offering.occupancy_ratio(),
                enrolled_count: offering.enrolled_count,
                capacity: offering.capacity,
            };

            match RegistrationTab::of(offering) {
                RegistrationTab::Open => board.open.push(row),
                RegistrationTab::Closed => board.closed.push(row),
            }
        }

        board
    }

    /// Rows on one tab.
    pub fn rows(&self, tab: RegistrationTab) -> &[OfferingRow] {
        match tab {
            RegistrationTab::Open => &self.open,
            RegistrationTab::Closed => &self.closed,
        }
    }

    /// Open rows the student may register for.
    pub fn eligible(&self) -> impl Iterator<Item = &OfferingRow> {
        self.open.iter().filter(|r| r.verdict.is_eligible())
    }

    /// Total rows across both tabs.
    pub fn len(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
