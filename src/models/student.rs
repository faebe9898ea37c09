//! Student record model.
//!
//! A student belongs to one program and carries two subject sets:
//! - **enrolled**: subjects currently being taken
//! - **completed**: subjects already passed
//!
//! Seats taken through the registration write path are also recorded per
//! subject in `registrations` (subject id → offering id), so a withdrawal
//! frees the seat on the offering that was actually taken.
//!
//! Which set satisfies prerequisites is a policy decision, see
//! [`crate::eligibility::PrerequisiteBasis`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A student's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Program the student is admitted to.
    pub program_id: String,
    /// Academic level.
    pub level: AcademicLevel,
    /// Standing.
    pub status: StudentStatus,
    /// Grade point average in `[0.0, 4.0]`.
    pub gpa: f64,
    /// Whether tuition fees are settled.
    pub fees_paid: bool,
    /// Contact details.
    pub contact: ContactInfo,
    /// Subjects currently enrolled in.
    pub enrolled: BTreeSet<String>,
    /// Subjects already completed.
    #[serde(default)]
    pub completed: BTreeSet<String>,
    /// Offering each registered subject holds a seat on (subject id → offering id).
    #[serde(default)]
    pub registrations: BTreeMap<String, String>,
    /// Class rank, when published.
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Academic level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicLevel {
    Undergraduate,
    Postgraduate,
    Alumni,
    /// Institution-specific level.
    Custom(String),
}

/// Student standing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    Probation,
    Graduated,
    Suspended,
    Withdrawn,
    /// Institution-specific status.
    Custom(String),
}

/// Contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Student {
    /// Creates an active undergraduate with no enrolments.
    pub fn new(id: impl Into<String>, program_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            program_id: program_id.into(),
            level: AcademicLevel::Undergraduate,
            status: StudentStatus::Active,
            gpa: 0.0,
            fees_paid: false,
            contact: ContactInfo::default(),
            enrolled: BTreeSet::new(),
            completed: BTreeSet::new(),
            registrations: BTreeMap::new(),
            rank: None,
        }
    }

    /// Sets the student name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the academic level.
    pub fn with_level(mut self, level: AcademicLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: StudentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the GPA.
    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Sets the fee-paid flag.
    pub fn with_fees_paid(mut self, paid: bool) -> Self {
        self.fees_paid = paid;
        self
    }

    /// Sets the contact details.
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    /// Adds a currently-enrolled subject.
    pub fn with_enrolled(mut self, subject_id: impl Into<String>) -> Self {
        self.enrolled.insert(subject_id.into());
        self
    }

    /// Adds a completed subject.
    pub fn with_completed(mut self, subject_id: impl Into<String>) -> Self {
        self.completed.insert(subject_id.into());
        self
    }

    /// Enrols in a subject through a specific offering.
    pub fn with_registration(
        mut self,
        subject_id: impl Into<String>,
        offering_id: impl Into<String>,
    ) -> Self {
        let subject_id = subject_id.into();
        self.enrolled.insert(subject_id.clone());
        self.registrations.insert(subject_id, offering_id.into());
        self
    }

    /// Sets the class rank.
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Whether the student is currently enrolled in a subject.
    #[inline]
    pub fn is_enrolled_in(&self, subject_id: &str) -> bool {
        self.enrolled.contains(subject_id)
    }

    /// Offering the student holds a seat on for a subject, if recorded.
    pub fn registered_offering(&self, subject_id: &str) -> Option<&str> {
        self.registrations.get(subject_id).map(String::as_str)
    }

    /// Whether the student has completed a subject.
    #[inline]
    pub fn has_completed(&self, subject_id: &str) -> bool {
        self.completed.contains(subject_id)
    }
}

impl ContactInfo {
    /// Creates contact details with a phone number only.
    pub fn phone(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            email: None,
            address: None,
        }
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
