//! Course registration eligibility engine.
//!
//! Decides whether a student may register for a scheduled course
//! offering: seat capacity, weekly slot conflicts with the student's
//! current subjects, and prerequisite satisfaction under a configurable
//! policy. The engine owns no state; every operation reads a
//! caller-supplied snapshot.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Program`, `Subject`, `Offering`, `Student`, `Catalog`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling references,
//!   prerequisite cycles, capacity and GPA ranges)
//! - **`eligibility`**: `conflict_for`, `EligibilityEngine::has_prerequisite`,
//!   `EligibilityEngine::classify_offering`, `occupancy_ratio`, policy and config
//! - **`report`**: Registration board (open / closed tabs) and dashboard KPIs
//! - **`registration`**: Enrol / withdraw write path on top of the verdicts
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveTime, Weekday};
//! use u_registrar::eligibility::{EligibilityEngine, Verdict};
//! use u_registrar::models::{Catalog, Offering, Program, SessionType, Student, Subject};
//!
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let catalog = Catalog::new(
//!     vec![Program::new("cs", 132)],
//!     vec![
//!         Subject::new("cs101", "cs", 3),
//!         Subject::new("cs102", "cs", 3).with_prerequisite("cs101"),
//!     ],
//!     vec![
//!         Offering::new("1", "cs101", SessionType::Lecture, Weekday::Mon, nine)
//!             .with_code("L-101")
//!             .with_capacity(50),
//!         Offering::new("2", "cs102", SessionType::Lab, Weekday::Tue, nine)
//!             .with_code("LB-102")
//!             .with_capacity(20),
//!     ],
//! )
//! .unwrap();
//!
//! let student = Student::new("2024001", "cs").with_enrolled("cs101");
//! let engine = EligibilityEngine::default();
//! let lab = catalog.offering("2").unwrap();
//! let verdict = engine
//!     .classify_offering(&student, lab, catalog.offerings(), catalog.subjects())
//!     .unwrap();
//! assert_eq!(verdict, Verdict::OpenEligible);
//! ```

pub mod eligibility;
pub mod error;
pub mod models;
pub mod registration;
pub mod report;
pub mod validation;

#[cfg(test)]
mod fixtures;

pub use error::{EngineError, EntityKind, Result};
