use crate::core::{Instance, Schedule, SubjectSet};

/// Greedy maximum-coverage scheduling.
/// Each round selects the teacher covering the most still uncovered subjects,
/// breaking ties towards the youngest and then the earliest listed candidate.
/// Returns `None` once no candidate can cover any remaining subject.
pub(super) fn schedule(instance: &Instance) -> Option<Schedule<'_>> {
    let mut schedule = Schedule::new(instance);
    let mut uncovered = instance.subjects.clone();

    while !uncovered.is_empty() {
        let mut best: Option<(usize, SubjectSet)> = None;

        for (id, teacher) in instance.teachers.iter().enumerate() {
            let cover: SubjectSet = teacher.subjects.intersection(&uncovered).cloned().collect();

            // Strict comparisons keep the first candidate on full ties.
            let better = best.as_ref().map_or(true, |&(best_id, ref best_cover)| {
                cover.len() > best_cover.len()
                    || (cover.len() == best_cover.len()
                        && teacher.age < instance.teachers[best_id].age)
            });

            if better {
                best = Some((id, cover));
            }
        }

        // Empty roster, or nobody covers any remaining subject.
        let (id, cover) = best?;
        if cover.is_empty() {
            return None;
        }

        for subject in &cover {
            uncovered.remove(subject);
        }

        schedule.assign(id, cover);
    }

    Some(schedule)
}

/// Greedy maximum-coverage scheduling algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl crate::core::Scheduler for Greedy {
    fn schedule<'a>(&mut self, instance: &'a Instance) -> Option<Schedule<'a>> {
        schedule(instance)
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SCHEDULERS)]
static INSTANCE: fn() -> Box<dyn crate::core::Scheduler> = || Box::new(Greedy);

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{Subject, Teacher};
    use crate::data::samples;
    use std::collections::BTreeSet;

    fn universe<const N: usize>(subjects: [&str; N]) -> SubjectSet {
        subjects.map(Subject::from).into_iter().collect()
    }

    fn subjects<const N: usize>(subjects: [&str; N]) -> BTreeSet<Subject> {
        subjects.map(Subject::from).into_iter().collect()
    }

    fn teacher<const N: usize>(name: &str, age: u32, capability: [&str; N]) -> Teacher {
        let email = format!("{}@example.com", name.to_lowercase());
        Teacher::new(name, "Testenko", age, &email, capability)
    }

    #[test]
    fn covers_universe_with_largest_covers_first() {
        let instance = Instance::new(
            universe(["mathematics", "physics", "chemistry"]),
            vec![
                teacher("Oleksandr", 45, ["mathematics", "physics"]),
                teacher("Maria", 38, ["chemistry"]),
            ],
        );

        let schedule = schedule(&instance).unwrap();

        assert!(schedule.verify());
        assert_eq!(schedule.assignments()[0].teacher, 0);
        assert_eq!(schedule.assignments()[0].subjects, subjects(["mathematics", "physics"]));
        assert_eq!(schedule.assignments()[1].teacher, 1);
        assert_eq!(schedule.assignments()[1].subjects, subjects(["chemistry"]));
    }

    #[test]
    fn equal_covers_go_to_the_youngest() {
        let instance = Instance::new(
            universe(["history"]),
            vec![teacher("Serhii", 50, ["history"]), teacher("Natalia", 30, ["history"])],
        );

        let schedule = schedule(&instance).unwrap();

        assert_eq!(schedule.teachers_used(), 1);
        assert_eq!(schedule.assignments()[0].teacher, 1);
    }

    #[test]
    fn equal_covers_and_ages_go_to_the_first_listed() {
        let instance = Instance::new(
            universe(["history"]),
            vec![teacher("Serhii", 40, ["history"]), teacher("Natalia", 40, ["history"])],
        );

        let schedule = schedule(&instance).unwrap();

        assert_eq!(schedule.assignments()[0].teacher, 0);
    }

    #[test]
    fn every_round_takes_the_maximal_cover() {
        let instance = Instance::new(
            universe(["a", "b", "c", "d", "e"]),
            vec![
                teacher("One", 30, ["a"]),
                teacher("Three", 60, ["a", "b", "c"]),
                teacher("Two", 25, ["d", "e"]),
            ],
        );

        let schedule = schedule(&instance).unwrap();

        assert!(schedule.verify());
        assert_eq!(schedule.assignments()[0].teacher, 1);
        assert_eq!(schedule.assignments()[1].teacher, 2);
        assert_eq!(schedule.teachers_used(), 2);
    }

    #[test]
    fn uncoverable_subject_yields_no_schedule() {
        let instance = Instance::new(
            universe(["latin", "greek"]),
            vec![teacher("Olena", 42, ["sanskrit"])],
        );

        assert!(schedule(&instance).is_none());
    }

    #[test]
    fn empty_universe_yields_empty_schedule() {
        let instance = Instance::new(SubjectSet::default(), Vec::new());

        let schedule = schedule(&instance).unwrap();

        assert!(schedule.is_empty());
        assert!(schedule.verify());
    }

    #[test]
    fn empty_roster_cannot_cover_anything() {
        let instance = Instance::new(universe(["latin"]), Vec::new());

        assert!(schedule(&instance).is_none());
    }

    // A selected teacher stays in the candidate pool for later rounds, but a
    // round always takes its whole intersection with the uncovered set, so a
    // rescan can never assign the same teacher twice.
    #[test]
    fn selected_teacher_is_never_assigned_twice() {
        let instance = Instance::new(
            universe(["a", "b", "c"]),
            vec![teacher("Wide", 30, ["a", "b"]), teacher("Late", 50, ["b", "c"])],
        );

        let schedule = schedule(&instance).unwrap();

        assert!(schedule.verify());
        let mut seen: Vec<usize> = schedule.assignments().iter().map(|a| a.teacher).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), schedule.teachers_used());
    }

    #[test]
    fn full_roster_example_prefers_young_pairs() {
        let instance = Instance::new(
            universe(["mathematics", "physics", "chemistry", "informatics", "biology"]),
            vec![
                teacher("Oleksandr", 45, ["mathematics", "physics"]),
                teacher("Maria", 38, ["chemistry"]),
                teacher("Serhii", 50, ["informatics", "mathematics"]),
                teacher("Natalia", 29, ["biology", "chemistry"]),
                teacher("Dmytro", 35, ["physics", "informatics"]),
                teacher("Olena", 42, ["biology"]),
            ],
        );

        let schedule = schedule(&instance).unwrap();

        assert!(schedule.verify());
        let order: Vec<usize> = schedule.assignments().iter().map(|a| a.teacher).collect();
        assert_eq!(order, [3, 4, 0]);
        assert_eq!(schedule.assignments()[2].subjects, subjects(["mathematics"]));
    }

    #[test]
    fn test_samples() {
        assert!(samples(true, &mut Greedy).is_ok());
    }
}
