use ahash::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A subject that has to be taught. Opaque identifier, unique within a universe.
pub type Subject = String;

/// A set of subjects.
pub type SubjectSet = HashSet<Subject>;

/// A teacher candidate. Name and email carry no meaning for scheduling;
/// the age is used only as a tie-break between equally good candidates.
#[derive(Clone, Debug, Deserialize, Eq, Serialize, PartialEq)]
pub struct Teacher {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    /// The subjects this teacher is able to teach. Fixed at construction.
    pub subjects: SubjectSet,
}

impl Teacher {
    /// Creates a new teacher with the given capability set.
    #[must_use]
    pub fn new<I, S>(first_name: &str, last_name: &str, age: u32, email: &str, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Subject>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the full name of the teacher.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Error describing a malformed instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("the universe contains a blank subject name")]
    BlankSubject,
    #[error("{0} has a blank subject name in the capability set")]
    BlankCapability(String),
}

/// An instance of the coverage scheduling problem: the universe of subjects
/// that must all be taught and the roster of teacher candidates.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, Serialize, PartialEq)]
pub struct Instance {
    pub subjects: SubjectSet,
    pub teachers: Vec<Teacher>,
}

impl Instance {
    /// Creates a new instance of the coverage scheduling problem.
    #[must_use]
    pub const fn new(subjects: SubjectSet, teachers: Vec<Teacher>) -> Self {
        Self { subjects, teachers }
    }

    /// Checks that every subject name in the universe and in the capability
    /// sets is non-blank. Schedulers assume well-formed input; callers that
    /// accept untrusted instances should validate first.
    ///
    /// # Errors
    /// - If the universe contains a blank subject name.
    /// - If a capability set contains a blank subject name.
    pub fn validate(&self) -> Result<(), InstanceError> {
        if self.subjects.iter().any(|subject| subject.trim().is_empty()) {
            return Err(InstanceError::BlankSubject);
        }

        for teacher in &self.teachers {
            if teacher.subjects.iter().any(|subject| subject.trim().is_empty()) {
                return Err(InstanceError::BlankCapability(teacher.full_name()));
            }
        }

        Ok(())
    }
}
