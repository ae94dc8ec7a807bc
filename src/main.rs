use clap::{Parser, ValueEnum};
use covsched::core::{Instance, Scheduler, Subject, SubjectSet, Teacher};
use covsched::{algo, data, run_reader};
use rand::prelude::*;
use std::io::Write;
use std::num::NonZero;

#[derive(Copy, Clone, Debug)]
struct Algorithm(usize, &'static str);

impl From<Algorithm> for Box<dyn Scheduler> {
    fn from(value: Algorithm) -> Box<dyn Scheduler> {
        algo::SCHEDULERS[value.0]()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.1)
    }
}

impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        static ALGORITHMS: std::sync::LazyLock<Vec<Algorithm>> = std::sync::LazyLock::new(|| {
            let iter = algo::SCHEDULERS.iter().enumerate();
            iter.map(|(i, init)| Algorithm(i, init().name())).collect()
        });

        ALGORITHMS.as_slice()
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.1))
    }
}

/// Application assigning teachers to subjects via set covering.
#[derive(Debug, Parser)]
enum Application {
    /// Run one of the implemented algorithms on an instance read from stdin.
    Run { algorithm: Algorithm },
    /// Run benchmarks on a set of instances.
    Bench {
        /// The input directory.
        input: String,
        /// Exclude scheduling algorithms.
        #[clap(short, long, value_delimiter = ',')]
        exclude: Vec<Algorithm>,
    },
    /// Generate test cases for the coverage scheduling problem.
    Gen {
        /// The number of subjects in the universe.
        subjects: NonZero<usize>,
        /// The number of teachers in the roster.
        teachers: NonZero<usize>,
        /// Probability that a teacher is able to teach any given subject.
        #[clap(short, long, default_value = "0.3")]
        capability_ratio: f64,
        /// Number of test cases to generate.
        #[clap(short, long, default_value = "1")]
        amount: NonZero<u64>,
        /// Path to output the generated instances. If the directory does not exist, it will be created.
        #[clap(short, long, default_value = "output")]
        output: String,
    },
}

fn schedulers(exclude: &[Algorithm]) -> impl Iterator<Item = Box<dyn Scheduler>> + '_ {
    let iter = algo::SCHEDULERS.iter().map(|init| init());
    iter.filter(|scheduler| !exclude.iter().any(|name| name.1 == scheduler.name()))
}

const FIRST_NAMES: &[&str] = &[
    "Oleksandr", "Maria", "Serhii", "Natalia", "Dmytro", "Olena", "Andrii", "Iryna", "Petro",
    "Sofia", "Taras", "Kateryna",
];

const LAST_NAMES: &[&str] = &[
    "Ivanenko", "Petrenko", "Kovalenko", "Shevchenko", "Bondarenko", "Hrytsenko", "Tkachenko",
    "Kravchenko", "Melnyk", "Boiko",
];

const SUBJECT_NAMES: &[&str] = &[
    "mathematics", "physics", "chemistry", "informatics", "biology", "history", "geography",
    "literature", "english", "music", "art", "economics", "philosophy", "astronomy", "statistics",
    "programming",
];

fn subject_name(index: usize) -> Subject {
    SUBJECT_NAMES
        .get(index)
        .map_or_else(|| format!("subject-{index}"), ToString::to_string)
}

fn gen_universe(count: usize) -> SubjectSet {
    (0..count).map(subject_name).collect()
}

fn gen_teachers(universe: &SubjectSet, count: usize, ratio: f64) -> Vec<Teacher> {
    let mut rng = thread_rng();
    let mut teachers = Vec::with_capacity(count);
    for _ in 0..count {
        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Oleksandr");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Ivanenko");
        let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
        let age = rng.gen_range(25..=65);
        let subjects = universe.iter().filter(|_| rng.gen_bool(ratio)).cloned();
        teachers.push(Teacher::new(first, last, age, &email, subjects));
    }
    teachers
}

fn main() -> anyhow::Result<()> {
    match Application::parse() {
        Application::Run { algorithm } => {
            let mut scheduler = Box::<dyn Scheduler>::from(algorithm);
            run_reader(scheduler.as_mut(), &mut std::io::stdin().lock())
        }
        Application::Bench { input, exclude } => {
            for mut scheduler in schedulers(&exclude) {
                println!("{}", data::run(&input, false, scheduler.as_mut())?);
            }
            Ok(())
        }
        Application::Gen {
            subjects,
            teachers,
            capability_ratio,
            amount,
            output,
        } => {
            let output = std::path::Path::new(&output);
            if !output.try_exists()? {
                std::fs::create_dir_all(output)?;
            }

            for i in 0..amount.get() {
                let universe = gen_universe(subjects.get());
                let roster = gen_teachers(&universe, teachers.get(), capability_ratio);
                let instance = Instance::new(universe, roster);

                let mut greedy = algo::Greedy;
                let expected = greedy
                    .schedule(&instance)
                    .map_or_else(|| "none".into(), |schedule| schedule.teachers_used().to_string());

                let filename = format!("{expected}_{i}.in");
                std::fs::File::create(output.join(filename))?
                    .write_all(data::to_string(&instance)?.as_bytes())?;
            }
            Ok(())
        }
    }
}
