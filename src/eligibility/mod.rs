//! Enrollment eligibility evaluation.
//!
//! Decides, for one student and one offering, whether registration is
//! allowed. Every operation is a pure function of the snapshot it is
//! given.
//!
//! # Decision Order
//!
//! 1. **Closed**: `enrolled_count >= capacity` (zero capacity included)
//! 2. **Conflict**: an enrolled subject already meets at the same day and time
//! 3. **Missing prerequisite**: per [`EligibilityPolicy`]
//! 4. **Eligible**
//!
//! The first matching step wins; only one verdict is reported.
//!
//! # Usage
//!
//! ```ignore
//! let engine = EligibilityEngine::default();
//! let verdict = engine.classify_offering(&student, offering, catalog.offerings(), catalog.subjects())?;
//! ```

mod engine;
mod policy;

pub use engine::{conflict_for, occupancy_ratio, EligibilityEngine};
pub use policy::{EligibilityPolicy, EngineConfig, PrerequisiteBasis};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration verdict for one offering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Seats available, no clash, prerequisite satisfied.
    OpenEligible,
    /// Seats available but an enrolled subject meets in the same slot.
    OpenConflict {
        /// Code of the clashing offering.
        blocking_code: String,
    },
    /// Seats available, no clash, prerequisite not satisfied.
    OpenMissingPrerequisite,
    /// No seats left.
    Closed,
}

impl Verdict {
    /// Stable tag for presentation layers.
    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::OpenEligible => "OPEN_ELIGIBLE",
            Verdict::OpenConflict { .. } => "OPEN_CONFLICT",
            Verdict::OpenMissingPrerequisite => "OPEN_MISSING_PREREQ",
            Verdict::Closed => "CLOSED",
        }
    }

    /// Whether the offering still has seats.
    #[inline]
    pub fn is_open(&self) -> bool {
        !matches!(self, Verdict::Closed)
    }

    /// Whether the student may register.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::OpenEligible)
    }

    /// Code of the clashing offering, for conflicts.
    pub fn blocking_code(&self) -> Option<&str> {
        match self {
            Verdict::OpenConflict { blocking_code } => Some(blocking_code),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::OpenEligible => f.write_str("eligible"),
            Verdict::OpenConflict { blocking_code } => {
                write!(f, "schedule conflict with {blocking_code}")
            }
            Verdict::OpenMissingPrerequisite => f.write_str("missing prerequisite"),
            Verdict::Closed => f.write_str("closed"),
        }
    }
}
