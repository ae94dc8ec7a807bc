use super::{Instance, Subject};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result};

/// One round of the schedule: a teacher identified by its roster index
/// together with the exact subjects assigned to it in that round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub teacher: usize,
    pub subjects: BTreeSet<Subject>,
}

/// A coverage schedule for an instance. Entries are kept in selection order.
#[derive(Clone, Debug)]
pub struct Schedule<'a> {
    instance: &'a Instance,
    assignments: Vec<Assignment>,
}

impl<'a> Schedule<'a> {
    /// Creates an empty schedule for the given instance.
    #[must_use]
    pub const fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            assignments: Vec::new(),
        }
    }

    /// Appends an assignment of the given subjects to the teacher with the given roster index.
    pub fn assign(&mut self, teacher: usize, subjects: impl IntoIterator<Item = Subject>) {
        self.assignments.push(Assignment {
            teacher,
            subjects: subjects.into_iter().collect(),
        });
    }

    /// Returns the assignments in selection order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns the number of assignments in the schedule.
    #[must_use]
    pub fn teachers_used(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether the schedule contains no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Checks that the schedule is a valid covering: every assignment is a
    /// non-empty subset of the teacher's capability set, no subject is
    /// assigned twice, and the assignments together cover the universe exactly.
    #[must_use]
    pub fn verify(&self) -> bool {
        let mut covered = BTreeSet::new();

        for assignment in &self.assignments {
            let Some(teacher) = self.instance.teachers.get(assignment.teacher) else {
                return false;
            };

            if assignment.subjects.is_empty() {
                return false;
            }

            for subject in &assignment.subjects {
                if !teacher.subjects.contains(subject) || !covered.insert(subject) {
                    return false;
                }
            }
        }

        covered.len() == self.instance.subjects.len()
            && covered.iter().all(|&subject| self.instance.subjects.contains(subject))
    }
}

impl Display for Schedule<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for assignment in &self.assignments {
            let teacher = &self.instance.teachers[assignment.teacher];
            write!(f, "{} <{}>, {}:", teacher.full_name(), teacher.email, teacher.age)?;

            for (i, subject) in assignment.subjects.iter().enumerate() {
                let separator = if i == 0 { ' ' } else { ',' };
                write!(f, "{separator}{subject}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Teacher;

    fn instance() -> Instance {
        Instance::new(
            ["algebra", "physics"].map(Subject::from).into_iter().collect(),
            vec![
                Teacher::new("Maria", "Petrenko", 38, "m.petrenko@example.com", ["algebra", "physics"]),
                Teacher::new("Dmytro", "Bondarenko", 35, "d.bondarenko@example.com", ["physics"]),
            ],
        )
    }

    #[test]
    fn verify_should_accept_exact_disjoint_covering() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("algebra")]);
        schedule.assign(1, [Subject::from("physics")]);

        assert!(schedule.verify());
    }

    #[test]
    fn verify_should_reject_incomplete_covering() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("algebra")]);

        assert!(!schedule.verify());
    }

    #[test]
    fn verify_should_reject_doubly_assigned_subject() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("algebra"), Subject::from("physics")]);
        schedule.assign(1, [Subject::from("physics")]);

        assert!(!schedule.verify());
    }

    #[test]
    fn verify_should_reject_subject_outside_capability() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("physics")]);
        schedule.assign(1, [Subject::from("algebra")]);

        assert!(!schedule.verify());
    }

    #[test]
    fn verify_should_reject_empty_assignment() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("algebra"), Subject::from("physics")]);
        schedule.assign(1, Vec::new());

        assert!(!schedule.verify());
    }

    #[test]
    fn display_should_list_assignments_in_selection_order() {
        let instance = instance();
        let mut schedule = Schedule::new(&instance);
        schedule.assign(0, [Subject::from("physics"), Subject::from("algebra")]);

        let rendered = schedule.to_string();
        assert_eq!(
            rendered,
            "Maria Petrenko <m.petrenko@example.com>, 38: algebra,physics\n"
        );
    }
}
