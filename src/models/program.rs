//! Academic program (degree) model.

use serde::{Deserialize, Serialize};

/// A degree program that owns a set of subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier (e.g. "cs").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Credits required to graduate. Must be positive.
    pub total_credits: u32,
    /// Credit system label (e.g. "Credit Hours").
    pub credit_system: String,
    /// Nominal duration (e.g. "4 Years").
    pub duration: String,
}

impl Program {
    /// Creates a program with the given ID and credit requirement.
    pub fn new(id: impl Into<String>, total_credits: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            total_credits,
            credit_system: "Credit Hours".to_string(),
            duration: String::new(),
        }
    }

    /// Sets the program name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit system label.
    pub fn with_credit_system(mut self, label: impl Into<String>) -> Self {
        self.credit_system = label.into();
        self
    }

    /// Sets the nominal duration.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }
}
