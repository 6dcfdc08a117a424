//! Command-line front end.
//!
//! ```text
//! cpu-sched-sim <INPUT> [QUANTUM] [--output results.csv] [--verbose]
//! ```
//!
//! Runs FCFS, SJF, Priority and Round Robin over the processes in `INPUT`,
//! prints a Gantt chart, process table and summary for each, recommends the
//! discipline with the lowest average waiting time, and appends every
//! result to a CSV file.

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use log::{info, warn, Level, LevelFilter, Metadata, Record};

use cpu_sched_sim::parser::load_processes;
use cpu_sched_sim::report::{
    append_csv, format_gantt, format_process_table, format_recommendation, format_summary,
};
use cpu_sched_sim::simulation::{Simulation, SimulationConfig, DEFAULT_TIME_QUANTUM};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn cli() -> Command {
    Command::new("cpu-sched-sim")
        .about("Single-CPU process scheduling simulator")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Process file, one `id,arrival,burst,priority` per line"),
        )
        .arg(
            Arg::new("quantum")
                .help("Round-Robin time quantum (non-integers fall back to 3)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("results.csv")
                .help("CSV file results are appended to"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
}

/// Parses the quantum argument, falling back to the default on bad input.
fn parse_quantum(raw: Option<&str>) -> u64 {
    match raw {
        None => DEFAULT_TIME_QUANTUM,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("time quantum '{value}' is not an integer, using {DEFAULT_TIME_QUANTUM}");
            eprintln!(
                "Error: Time Quantum must be an integer. Using default value {DEFAULT_TIME_QUANTUM}."
            );
            DEFAULT_TIME_QUANTUM
        }),
    }
}

fn run(input: &str, quantum: u64, output: &str) -> cpu_sched_sim::Result<()> {
    info!("reading input file: {input}");
    let processes = load_processes(input)?;
    if processes.is_empty() {
        println!("No processes loaded from {input}.");
        return Ok(());
    }
    println!("Loaded {} processes from {input}.", processes.len());

    let simulation = Simulation::new(SimulationConfig::new().with_time_quantum(quantum))?;
    let comparison = simulation.run(&processes)?;

    for result in comparison.iter() {
        let title = if result.algorithm == "Round Robin" {
            format!("Round Robin (Time Quantum = {quantum})")
        } else {
            result.algorithm.clone()
        };
        println!("\n=== {title} ===");
        println!("Gantt Chart:\n  {}", format_gantt(&result.outcome.timeline));
        println!("Process Details:\n{}", format_process_table(&result.outcome.completed));
        print!("{}", format_summary(&result.metrics));
    }

    println!();
    print!("{}", format_recommendation(&comparison));

    append_csv(&comparison, output)?;
    println!("\nResults exported to {output}");
    info!("results exported to {output}");
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    if matches.get_flag("verbose") && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("results.csv");
    let quantum = parse_quantum(matches.get_one::<String>("quantum").map(String::as_str));

    match run(input, quantum, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
