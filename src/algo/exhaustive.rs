use crate::core::{Instance, Schedule, SubjectSet};

/// Depth-first branch and bound over teacher subsets.
/// Finds a cover of minimum cardinality, keeping the first one discovered
/// in roster order among equals. Worst case is exponential in the roster
/// size, so this is only suitable for small instances.
pub(super) fn schedule(instance: &Instance) -> Option<Schedule<'_>> {
    let mut best = None;
    let mut chosen = Vec::new();
    explore(instance, 0, instance.subjects.clone(), &mut chosen, &mut best);

    let picked = best?;
    let mut schedule = Schedule::new(instance);
    let mut uncovered = instance.subjects.clone();

    // Replay in inclusion order; every pick of a minimum cover contributes
    // at least one subject nobody before it covers.
    for id in picked {
        let cover: SubjectSet = instance.teachers[id]
            .subjects
            .intersection(&uncovered)
            .cloned()
            .collect();

        for subject in &cover {
            uncovered.remove(subject);
        }

        schedule.assign(id, cover);
    }

    Some(schedule)
}

fn explore(
    instance: &Instance,
    next: usize,
    uncovered: SubjectSet,
    chosen: &mut Vec<usize>,
    best: &mut Option<Vec<usize>>,
) {
    if uncovered.is_empty() {
        if best.as_ref().map_or(true, |cover| chosen.len() < cover.len()) {
            *best = Some(chosen.clone());
        }
        return;
    }

    if next == instance.teachers.len() {
        return;
    }

    // At least one more teacher is needed to finish this branch.
    if best.as_ref().is_some_and(|cover| chosen.len() + 1 >= cover.len()) {
        return;
    }

    let cover: SubjectSet = instance.teachers[next]
        .subjects
        .intersection(&uncovered)
        .cloned()
        .collect();

    if !cover.is_empty() {
        let mut remaining = uncovered.clone();
        for subject in &cover {
            remaining.remove(subject);
        }

        chosen.push(next);
        explore(instance, next + 1, remaining, chosen, best);
        chosen.pop();
    }

    explore(instance, next + 1, uncovered, chosen, best);
}

/// Exhaustive minimum-cardinality scheduling algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exhaustive;

impl crate::core::Scheduler for Exhaustive {
    fn schedule<'a>(&mut self, instance: &'a Instance) -> Option<Schedule<'a>> {
        schedule(instance)
    }

    fn name(&self) -> &'static str {
        "Exhaustive"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SCHEDULERS)]
static INSTANCE: fn() -> Box<dyn crate::core::Scheduler> = || Box::new(Exhaustive);
