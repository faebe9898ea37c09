//! Subject (course) model.
//!
//! A subject is the catalog entry students register for. It belongs to
//! one program and may name a single direct prerequisite subject.

use serde::{Deserialize, Serialize};

/// A catalog subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier (e.g. "cs102").
    pub id: String,
    /// Display code (e.g. "CS102").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Credit value. Must be positive.
    pub credits: u32,
    /// Direct prerequisite subject ID. `None` = no prerequisite.
    pub prerequisite: Option<String>,
    /// Owning program ID.
    pub program_id: String,
}

impl Subject {
    /// Creates a subject with no prerequisite.
    pub fn new(id: impl Into<String>, program_id: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            credits,
            prerequisite: None,
            program_id: program_id.into(),
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the direct prerequisite.
    pub fn with_prerequisite(mut self, subject_id: impl Into<String>) -> Self {
        self.prerequisite = Some(subject_id.into());
        self
    }

    /// Whether this subject has a prerequisite.
    #[inline]
    pub fn has_prerequisite(&self) -> bool {
        self.prerequisite.is_some()
    }
}
