mod exhaustive;
mod greedy;

pub use exhaustive::Exhaustive;
pub use greedy::Greedy;

/// Registry of every available scheduler.
#[allow(unsafe_code)]
#[linkme::distributed_slice]
pub static SCHEDULERS: [fn() -> Box<dyn crate::core::Scheduler>] = [..];
