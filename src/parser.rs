//! Reference text input format.
//!
//! One process per line:
//!
//! ```text
//! # id,arrival,burst,priority
//! P1,0,5,2
//! P2,1,3,1
//! ```
//!
//! Blank lines and `#` comments are skipped. A line with the wrong number of
//! fields is skipped with a warning; a field that is not an integer fails
//! the whole parse.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{ErrorKind, Result, ScheduleError};
use crate::models::Process;

const FIELD_COUNT: usize = 4;

/// Parses process definitions from text.
///
/// # Errors
/// `ErrorKind::Parse` naming the 1-based line of the first non-integer
/// field, or of a process whose finish tick would overflow.
///
/// # Example
/// ```
/// use cpu_sched_sim::parser::parse_processes;
///
/// let processes = parse_processes("P1,0,5,2\n# comment\nP2, 1, 3, 1\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].priority, Some(1));
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            warn!(
                "skipping line {line_no}: expected {FIELD_COUNT} fields, got {}",
                fields.len()
            );
            continue;
        }

        let arrival: u64 = parse_field(fields[1], "arrival time", line_no)?;
        let burst = parse_field(fields[2], "burst time", line_no)?;
        let priority = parse_field(fields[3], "priority", line_no)?;
        if arrival.checked_add(burst).is_none() {
            return Err(ScheduleError::new(
                ErrorKind::Parse { line: line_no },
                format!("arrival time {arrival} plus burst time {burst} overflows"),
            ));
        }
        processes.push(Process::new(fields[0], arrival, burst).with_priority(priority));
    }

    debug!("parsed {} processes", processes.len());
    Ok(processes)
}

/// Reads and parses a process file.
///
/// # Errors
/// `ErrorKind::Io` if the file cannot be read, otherwise as
/// [`parse_processes`].
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        ScheduleError::new(ErrorKind::Io, format!("{}: {e}", path.display()))
    })?;
    parse_processes(&text)
}

fn parse_field<T: FromStr>(value: &str, field: &str, line: usize) -> Result<T> {
    value.parse().map_err(|_| {
        ScheduleError::new(
            ErrorKind::Parse { line },
            format!("invalid {field} '{value}'"),
        )
    })
}
