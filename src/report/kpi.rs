//! Dashboard indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Records | Number of student records |
//! | Unpaid Fees | Students with `fees_paid == false` |
//! | Average GPA | Mean GPA over all records |
//! | Status Counts | Records per standing |
//! | Enrolled Credits | Sum of credits over enrolled subjects |
//! | Completion | Completed credits / program requirement |

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::models::{Catalog, Student, StudentStatus};

/// Cohort-level indicators for the administration dashboard.
#[derive(Debug, Clone)]
pub struct CohortKpi {
    /// Number of student records.
    pub total_records: usize,
    /// Records with outstanding fees.
    pub unpaid_fees: usize,
    /// Mean GPA (0.0 when there are no records).
    pub average_gpa: f64,
    /// Records per status.
    pub by_status: BTreeMap<StudentStatus, usize>,
}

impl CohortKpi {
    /// Computes indicators over a set of student records.
    pub fn calculate(students: &[Student]) -> Self {
        let mut by_status = BTreeMap::new();
        let mut unpaid_fees = 0;
        let mut gpa_sum = 0.0;

        for s in students {
            *by_status.entry(s.status.clone()).or_insert(0) += 1;
            if !s.fees_paid {
                unpaid_fees += 1;
            }
            gpa_sum += s.gpa;
        }

        let average_gpa = if students.is_empty() {
            0.0
        } else {
            gpa_sum / students.len() as f64
        };

        Self {
            total_records: students.len(),
            unpaid_fees,
            average_gpa,
            by_status,
        }
    }

    /// Records with the given status.
    pub fn count(&self, status: &StudentStatus) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}

/// A student's credit progress toward their program requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProgress {
    /// Credits of currently enrolled subjects.
    pub enrolled_credits: u32,
    /// Credits of completed subjects.
    pub completed_credits: u32,
    /// Credits the program requires.
    pub required_credits: u32,
    /// `completed / required`, capped at 1.0.
    pub completion: f64,
}

impl StudentProgress {
    /// Computes progress from the student's subject sets.
    ///
    /// # Errors
    /// `NotFound` if the student's program or any enrolled/completed
    /// subject is missing from the catalog.
    pub fn calculate(student: &Student, catalog: &Catalog) -> Result<Self> {
        let program = catalog.require_program(&student.program_id)?;

        let sum_credits = |ids: &BTreeSet<String>| -> Result<u32> {
            ids.iter()
                .map(|id| catalog.require_subject(id).map(|s| s.credits))
                .sum()
        };
        let enrolled_credits = sum_credits(&student.enrolled)?;
        let completed_credits = sum_credits(&student.completed)?;

        // Validated programs never require zero credits.
        let completion = if program.total_credits == 0 {
            1.0
        } else {
            (completed_credits as f64 / program.total_credits as f64).min(1.0)
        };

        Ok(Self {
            enrolled_credits,
            completed_credits,
            required_credits: program.total_credits,
            completion,
        })
    }

    /// Credits still to complete.
    pub fn remaining_credits(&self) -> u32 {
        self.required_credits.saturating_sub(self.completed_credits)
    }
}
