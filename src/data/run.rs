use crate::core::{Instance, Schedule, Scheduler};
use crate::data::deserialize;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::fs::File;
use std::io::BufReader;

/// Report of running a directory of samples.
#[derive(Debug, Deserialize, Serialize)]
pub struct Report {
    scheduler: String,
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Create a new report.
    fn new(scheduler: String) -> Self {
        let entries = Vec::new();
        Self { scheduler, entries }
    }

    /// Get the scheduler name.
    #[must_use]
    pub fn scheduler_name(&self) -> &str {
        &self.scheduler
    }

    /// Get the entries.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Scheduler: {}", self.scheduler)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f, "-------------------")
    }
}

/// Report of running a single sample.
/// `teachers` is the number of teachers in the schedule, absent when the
/// roster could not cover the universe.
#[non_exhaustive]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub teachers: Option<usize>,
    pub time: f64,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.teachers {
            Some(teachers) => {
                write!(f, "{}: {} teachers in {:.2} sec", self.name, teachers, self.time)
            }
            None => write!(f, "{}: infeasible in {:.2} sec", self.name, self.time),
        }
    }
}

/// Run all samples in the `samples` directory.
/// Print the report to stdout.
///
/// # Arguments
/// - `valid` is true, check the teacher count against the filename.
/// - `solver` is the scheduler to run.
///
/// # Errors
/// - If a file cannot be read.
/// - If no samples are found.
///
/// # Panics
/// - If the schedule is invalid.
/// - If the teacher count is wrong and `valid` is true.
pub fn samples(valid: bool, solver: &mut dyn Scheduler) -> anyhow::Result<()> {
    run("samples", valid, solver).and_then(|report| {
        if report.entries.is_empty() {
            Err(anyhow!("No samples found"))
        } else {
            println!("{report}");
            Ok(())
        }
    })
}

/// Run all samples in the `dir` directory.
/// Sample filenames follow `<expected>_<label>.in`, where `expected` is the
/// teacher count the scheduler should reach, or `none` for instances the
/// roster cannot cover.
///
/// # Arguments
/// - `valid` is true, check the teacher count against the filename.
/// - `solver` is the scheduler to run.
///
/// # Errors
/// - If a file cannot be read.
///
/// # Panics
/// - If the schedule is invalid.
/// - If the teacher count is wrong and `valid` is true.
pub fn run(dir: &str, valid: bool, solver: &mut dyn Scheduler) -> anyhow::Result<Report> {
    let mut report = Report::new(solver.name().into());

    for file in std::fs::read_dir(dir)? {
        let file = file?;
        let (name, expected) = parse_filename(&file.file_name())?;

        let instance: Instance = deserialize(&mut BufReader::new(File::open(file.path())?))?;

        let time = std::time::Instant::now();
        let schedule = solver.schedule(&instance);
        let time = time.elapsed().as_secs_f64();

        if let Some(schedule) = &schedule {
            assert!(schedule.verify(), "Invalid schedule created");
        }

        let teachers = schedule.as_ref().map(Schedule::teachers_used);
        if valid {
            assert_eq!(teachers, expected, "Unexpected teacher count for {name}");
        }

        report.entries.push(ReportEntry { name, teachers, time });
    }

    Ok(report)
}

fn parse_filename(filename: &std::ffi::OsString) -> anyhow::Result<(String, Option<usize>)> {
    static NAME_ERR: &str = "Cannot read filename";

    let name = filename.to_str().ok_or_else(|| anyhow!(NAME_ERR))?;
    let mut parts = name.split('.');
    let mut parts = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.split('_');
    let expected = match parts.next().ok_or_else(|| anyhow!(NAME_ERR))? {
        "none" => None,
        count => Some(count.parse()?),
    };
    parts.next().ok_or_else(|| anyhow!(NAME_ERR))?;
    Ok((name.into(), expected))
}
