#![deny(clippy::all, clippy::cargo, clippy::expect_used, clippy::unwrap_used)]
#![deny(clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(clippy::unimplemented, clippy::redundant_type_annotations)]

use anyhow::Result;
use std::io::BufRead;

pub mod algo;
pub mod core;
pub mod data;

/// Runs the given scheduler on the instance read from reader and writes the result to stdout.
/// On success the assignment list and the number of teachers used are printed;
/// when the roster cannot cover the universe a single message line is printed instead.
///
/// # Errors
/// - If the instance could not be read from the reader.
/// - If the instance is malformed.
///
/// # Panics
/// - If the schedule is invalid in debug mode.
pub fn run_reader(scheduler: &mut dyn core::Scheduler, reader: &mut impl BufRead) -> Result<()> {
    let instance: core::Instance = data::deserialize(reader)?;
    instance.validate()?;

    match scheduler.schedule(&instance) {
        Some(schedule) => {
            debug_assert!(schedule.verify(), "Schedule is invalid: {schedule:?}");
            print!("{schedule}");
            println!("{} teachers", schedule.teachers_used());
        }
        None => println!("No schedule covers every subject."),
    }

    Ok(())
}
