mod problem;
mod solution;

pub use problem::*;
pub use solution::*;

/// Builds coverage schedules for instances.
pub trait Scheduler {
    /// Assigns teachers to subjects so that the whole universe is covered.
    /// Returns `None` when the roster cannot cover every subject.
    fn schedule<'a>(&mut self, instance: &'a Instance) -> Option<Schedule<'a>>;

    /// Returns the name of the scheduler.
    fn name(&self) -> &'static str;
}
