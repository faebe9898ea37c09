//! Offering (schedule slot) model.
//!
//! An offering is a scheduled session of a subject: a lecture, tutorial,
//! or lab held weekly at a fixed day, start time and room, with a seat
//! capacity.
//!
//! # Conflict Key
//! Two offerings clash for a student iff they share the same
//! `(day, start)` pair. Durations are not modelled; sessions starting at
//! different times never conflict.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A scheduled session of a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    /// Unique offering identifier.
    pub id: String,
    /// Subject this session belongs to.
    pub subject_id: String,
    /// Session kind.
    pub session_type: SessionType,
    /// Display code (e.g. "L-101").
    pub code: String,
    /// Instructor display name.
    pub instructor: String,
    /// Weekday the session is held on.
    pub day: Weekday,
    /// Start time.
    pub start: NaiveTime,
    /// Room label.
    pub room: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Seats already taken. Never exceeds `capacity` in a valid catalog.
    pub enrolled_count: u32,
}

/// Kind of teaching session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Lecture,
    Tutorial,
    Lab,
}

impl Offering {
    /// Creates an offering with zero enrolment and no capacity.
    ///
    /// Set a capacity with [`Offering::with_capacity`]; a zero-capacity
    /// offering is always closed.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        session_type: SessionType,
        day: Weekday,
        start: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            session_type,
            code: String::new(),
            instructor: String::new(),
            day,
            start,
            room: String::new(),
            capacity: 0,
            enrolled_count: 0,
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of seats already taken.
    pub fn with_enrolled(mut self, enrolled_count: u32) -> Self {
        self.enrolled_count = enrolled_count;
        self
    }

    /// The `(day, start)` pair used for conflict detection.
    #[inline]
    pub fn slot(&self) -> (Weekday, NaiveTime) {
        (self.day, self.start)
    }

    /// Whether two offerings occupy the same weekly slot.
    #[inline]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.day == other.day && self.start == other.start
    }

    /// Whether every seat is taken.
    ///
    /// A zero-capacity offering is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    /// Seats still available.
    #[inline]
    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled_count)
    }

    /// Fraction of seats taken, in `[0.0, 1.0]`.
    ///
    /// A zero-capacity offering reports `1.0` rather than dividing by zero.
    pub fn occupancy_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        (self.enrolled_count as f64 / self.capacity as f64).clamp(0.0, 1.0)
    }
}
