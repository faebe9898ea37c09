//! Indexed catalog snapshot.
//!
//! Bundles programs, subjects and offerings behind id lookups. Offerings
//! keep their input order: conflict tie-breaks and board rows follow it.

use std::collections::HashMap;

use serde::Serialize;

use super::{Offering, Program, Subject};
use crate::error::{EngineError, EntityKind, Result};
use crate::validation::{validate_catalog, ValidationError};

/// Subject lookup table (subject id → subject).
pub type SubjectIndex = HashMap<String, Subject>;

/// Builds a [`SubjectIndex`]. Later duplicates replace earlier ones.
pub fn index_subjects(subjects: impl IntoIterator<Item = Subject>) -> SubjectIndex {
    subjects.into_iter().map(|s| (s.id.clone(), s)).collect()
}

/// A validated catalog of programs, subjects and offerings.
///
/// Serialize-only: build one from deserialized parts with
/// [`Catalog::new`] so validation always runs.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    programs: HashMap<String, Program>,
    subjects: SubjectIndex,
    offerings: Vec<Offering>,
    #[serde(skip)]
    offering_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates the inputs and indexes them.
    ///
    /// # Returns
    /// `Err(errors)` with every detected problem if validation fails.
    pub fn new(
        programs: Vec<Program>,
        subjects: Vec<Subject>,
        offerings: Vec<Offering>,
    ) -> std::result::Result<Self, Vec<ValidationError>> {
        validate_catalog(&programs, &subjects, &offerings)?;

        let offering_index = offerings
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id.clone(), i))
            .collect();

        Ok(Self {
            programs: programs.into_iter().map(|p| (p.id.clone(), p)).collect(),
            subjects: index_subjects(subjects),
            offerings,
            offering_index,
        })
    }

    /// Subject lookup table.
    #[inline]
    pub fn subjects(&self) -> &SubjectIndex {
        &self.subjects
    }

    /// Offerings in catalog order.
    #[inline]
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Programs, unordered.
    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.values()
    }

    pub fn program(&self, id: &str) -> Option<&Program> {
        self.programs.get(id)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.get(id)
    }

    pub fn offering(&self, id: &str) -> Option<&Offering> {
        self.offering_index.get(id).map(|&i| &self.offerings[i])
    }

    /// Looks up a program, failing with `NotFound`.
    pub fn require_program(&self, id: &str) -> Result<&Program> {
        self.program(id)
            .ok_or_else(|| EngineError::not_found(EntityKind::Program, id))
    }

    /// Looks up a subject, failing with `NotFound`.
    pub fn require_subject(&self, id: &str) -> Result<&Subject> {
        self.subject(id)
            .ok_or_else(|| EngineError::not_found(EntityKind::Subject, id))
    }

    /// Looks up an offering, failing with `NotFound`.
    pub fn require_offering(&self, id: &str) -> Result<&Offering> {
        self.offering(id)
            .ok_or_else(|| EngineError::not_found(EntityKind::Offering, id))
    }

    /// Mutable offering access for the registration write path.
    pub(crate) fn offering_mut(&mut self, id: &str) -> Result<&mut Offering> {
        match self.offering_index.get(id) {
            Some(&i) => Ok(&mut self.offerings[i]),
            None => Err(EngineError::not_found(EntityKind::Offering, id)),
        }
    }

    /// Offerings of one subject, in catalog order.
    pub fn offerings_for_subject<'a>(
        &'a self,
        subject_id: &'a str,
    ) -> impl Iterator<Item = &'a Offering> + 'a {
        self.offerings
            .iter()
            .filter(move |o| o.subject_id == subject_id)
    }

    /// Subjects owned by a program.
    pub fn subjects_for_program<'a>(
        &'a self,
        program_id: &'a str,
    ) -> impl Iterator<Item = &'a Subject> + 'a {
        self.subjects
            .values()
            .filter(move |s| s.program_id == program_id)
    }
}
