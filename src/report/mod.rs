//! Presentation-ready views over eligibility results.
//!
//! - **`RegistrationBoard`**: per-student open / closed offering tabs with
//!   verdicts and occupancy
//! - **`CohortKpi`**: record count, unpaid fees, average GPA, status breakdown
//! - **`StudentProgress`**: credit totals against the program requirement

mod board;
mod kpi;

pub use board::{OfferingRow, RegistrationBoard, RegistrationTab, SkippedOffering};
pub use kpi::{CohortKpi, StudentProgress};
