//! Run quality metrics.
//!
//! Aggregates the per-process results of one algorithm run and derives
//! CPU utilization from its timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Max Waiting | largest single waiting time |
//! | Makespan | end of the last timeline span |
//! | CPU Utilization | 100 * busy / (last end - first start) |
//! | Context Switches | process-to-process handovers in the timeline |
//!
//! Every mean over an empty set, and utilization over an empty or
//! zero-length timeline, is defined as 0.

use serde::{Deserialize, Serialize};

use crate::models::{Occupant, ProcessRecord, Timeline};
use crate::scheduler::ScheduleOutcome;

/// Summary statistics for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean response time (ticks).
    pub avg_response_time: f64,
    /// Largest waiting time of any process (ticks).
    pub max_waiting_time: u64,
    /// End of the timeline (ticks).
    pub makespan: u64,
    /// CPU utilization as a percentage (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Number of times the CPU passed directly from one process to another.
    pub context_switches: usize,
}

impl RunMetrics {
    /// Computes metrics from a finished run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let completed = &outcome.completed;
        let response: Vec<u64> = completed
            .iter()
            .filter_map(ProcessRecord::response_time)
            .collect();

        Self {
            process_count: completed.len(),
            avg_turnaround_time: average_turnaround_time(completed),
            avg_waiting_time: average_waiting_time(completed),
            avg_response_time: mean(response.iter().copied(), response.len()),
            max_waiting_time: completed
                .iter()
                .map(|r| r.waiting_time)
                .max()
                .unwrap_or(0),
            makespan: outcome.timeline.end().unwrap_or(0),
            cpu_utilization: cpu_utilization(&outcome.timeline),
            context_switches: context_switches(&outcome.timeline),
        }
    }
}

fn mean(values: impl Iterator<Item = u64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<u64>() as f64 / count as f64
}

/// Mean turnaround time over completed records; 0 for an empty set.
pub fn average_turnaround_time(completed: &[ProcessRecord]) -> f64 {
    mean(completed.iter().map(|r| r.turnaround_time), completed.len())
}

/// Mean waiting time over completed records; 0 for an empty set.
pub fn average_waiting_time(completed: &[ProcessRecord]) -> f64 {
    mean(completed.iter().map(|r| r.waiting_time), completed.len())
}

/// Busy time over elapsed time, as a percentage.
///
/// Returns 0 when the timeline is empty or spans zero ticks.
pub fn cpu_utilization(timeline: &Timeline) -> f64 {
    let total = timeline.span();
    if total == 0 {
        return 0.0;
    }
    timeline.busy_time() as f64 / total as f64 * 100.0
}

/// Counts adjacent non-idle spans whose occupants differ.
///
/// Spans separated by idle time are not counted: the CPU had nothing to
/// switch away from.
pub fn context_switches(timeline: &Timeline) -> usize {
    timeline
        .entries()
        .windows(2)
        .filter(|w| match (&w[0].occupant, &w[1].occupant) {
            (Occupant::Process(a), Occupant::Process(b)) => a != b,
            _ => false,
        })
        .count()
}

/// Picks the algorithm with the lowest average waiting time.
///
/// Ties go to the first entry in iteration order. Returns `None` for an
/// empty slice.
///
/// # Example
/// ```
/// use cpu_sched_sim::metrics::recommend_best;
///
/// let results = [("FCFS", 3.33), ("SJF", 2.0), ("Priority", 2.0)];
/// assert_eq!(recommend_best(&results), Some(("SJF", 2.0)));
/// ```
pub fn recommend_best<'a>(results: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    let mut best: Option<(&'a str, f64)> = None;
    for &(name, avg_wait) in results {
        match best {
            Some((_, current)) if avg_wait >= current => {}
            _ => best = Some((name, avg_wait)),
        }
    }
    best
}
