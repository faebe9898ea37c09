//! Registration domain models.
//!
//! Provides the data types the eligibility engine reads: the academic
//! catalog (programs, subjects, scheduled offerings) and student records.
//!
//! # Entity Map
//!
//! | Type | Meaning | Key fields |
//! |------|---------|------------|
//! | Program | Degree program | total credits |
//! | Subject | Catalog course | credits, prerequisite |
//! | Offering | Weekly session of a subject | day, start, capacity |
//! | Student | Student record | enrolled, completed |
//! | Catalog | Validated, indexed snapshot | id lookups |

mod catalog;
mod offering;
mod program;
mod student;
mod subject;

pub use catalog::{index_subjects, Catalog, SubjectIndex};
pub use offering::{Offering, SessionType};
pub use program::Program;
pub use student::{AcademicLevel, ContactInfo, Student, StudentStatus};
pub use subject::Subject;
