//! Single-CPU scheduling algorithms.
//!
//! Four disciplines share one contract ([`Scheduler`]): take an immutable
//! process set, build fresh [`ProcessRecord`]s internally, and return the
//! execution [`Timeline`] plus every record with its computed fields.
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|------------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`ShortestJobFirst`] | no | min burst, then arrival |
//! | [`PriorityScheduling`] | no | min priority value, then arrival |
//! | [`RoundRobin`] | yes (quantum) | FIFO ready queue |
//!
//! # Idle handling
//! When no process is eligible at the current tick, the clock jumps to the
//! next arrival and the skipped interval is logged as an idle span.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod non_preemptive;
mod round_robin;
pub mod rules;

pub use fcfs::Fcfs;
pub use non_preemptive::{NonPreemptive, PriorityScheduling, ShortestJobFirst};
pub use round_robin::RoundRobin;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Process, ProcessRecord, Timeline};

/// Result of one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Execution history.
    pub timeline: Timeline,
    /// Finished records, in completion order.
    pub completed: Vec<ProcessRecord>,
}

impl ScheduleOutcome {
    /// Whether the run scheduled nothing.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty() && self.completed.is_empty()
    }

    /// Finds the finished record for a process.
    pub fn record(&self, process_id: &str) -> Option<&ProcessRecord> {
        self.completed.iter().find(|r| r.id() == process_id)
    }
}

/// A single-CPU scheduling discipline.
///
/// Implementations are deterministic and never mutate their input; running
/// the same scheduler twice over the same slice yields identical outcomes.
/// Input must pass [`validate_processes`](crate::validation::validate_processes)
/// (unique ids, positive bursts, no clock overflow); an empty slice yields an
/// empty outcome.
pub trait Scheduler: Send + Sync + Debug {
    /// Display name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the discipline over the process set.
    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome;
}

/// Fresh working records sorted by arrival. Equal arrivals keep input order.
fn arrival_order(processes: &[Process]) -> Vec<ProcessRecord> {
    let mut records: Vec<ProcessRecord> = processes
        .iter()
        .cloned()
        .map(ProcessRecord::new)
        .collect();
    records.sort_by_key(ProcessRecord::arrival_time);
    records
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashSet;

    use super::ScheduleOutcome;
    use crate::models::Process;

    /// `P1,0,5,2 / P2,1,3,1 / P3,2,8,3`
    pub fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 8).with_priority(3),
        ]
    }

    /// Flattens a timeline into `(occupant, start, end)` triples.
    pub fn spans(outcome: &ScheduleOutcome) -> Vec<(String, u64, u64)> {
        outcome
            .timeline
            .iter()
            .map(|e| (e.occupant.to_string(), e.start, e.end))
            .collect()
    }

    pub fn waiting(outcome: &ScheduleOutcome, id: &str) -> u64 {
        outcome.record(id).expect("completed record").waiting_time
    }

    /// Checks the invariants every discipline must uphold.
    pub fn assert_invariants(processes: &[Process], outcome: &ScheduleOutcome) {
        assert!(outcome.timeline.is_contiguous(), "timeline has gaps");
        assert_eq!(outcome.completed.len(), processes.len());

        let ids: HashSet<&str> = outcome.completed.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), processes.len(), "duplicate completions");

        for p in processes {
            let r = outcome.record(&p.id).expect("every input completes");
            assert_eq!(&r.process, p);
            assert_eq!(r.remaining_time, 0);
            assert_eq!(outcome.timeline.busy_time_for(&p.id), p.burst_time);

            let start = r.start_time.expect("start set");
            let finish = r.finish_time.expect("finish set");
            assert!(start >= p.arrival_time);
            assert!(finish >= start + p.burst_time);
            assert_eq!(r.turnaround_time, finish - p.arrival_time);
            assert_eq!(r.waiting_time, r.turnaround_time - p.burst_time);
            assert!(r.turnaround_time >= p.burst_time);

            let first = outcome.timeline.entries_for(&p.id)[0].start;
            assert_eq!(first, start, "start is the first dispatch");
            let last = outcome.timeline.entries_for(&p.id).last().map(|e| e.end);
            assert_eq!(last, Some(finish));
        }
    }
}
