//! Process model.
//!
//! A [`Process`] is the caller-supplied definition of one schedulable unit.
//! A [`ProcessRecord`] is the per-run working copy an algorithm mutates and
//! finally hands back with its computed timestamps.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A process definition.
///
/// Immutable input to every scheduling algorithm. Priority is optional
/// because only the priority discipline consults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g., "P1").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: u64,
    /// Total CPU time required. Must be positive.
    pub burst_time: u64,
    /// Scheduling priority (lower = more urgent). `None` = least urgent.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process({}, AT={}, BT={}, P=",
            self.id, self.arrival_time, self.burst_time
        )?;
        match self.priority {
            Some(p) => write!(f, "{p})"),
            None => f.write_str("-)"),
        }
    }
}

/// Working and result record for one process within one algorithm run.
///
/// Created from a [`Process`] with unset computed fields. The owning
/// algorithm dispatches it, runs it in one or more slices, and finishes it
/// exactly once. After [`finish`](Self::finish) the record is complete and
/// never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The input definition this record was built from.
    pub process: Process,
    /// CPU time still owed. Starts at `burst_time`, reaches 0 on completion.
    pub remaining_time: u64,
    /// First tick the process held the CPU.
    pub start_time: Option<u64>,
    /// Tick at which the last slice ended.
    pub finish_time: Option<u64>,
    /// `finish_time - arrival_time` (0 until finished).
    pub turnaround_time: u64,
    /// `turnaround_time - burst_time` (0 until finished).
    pub waiting_time: u64,
}

impl ProcessRecord {
    /// Creates a fresh record for a process.
    pub fn new(process: Process) -> Self {
        Self {
            remaining_time: process.burst_time,
            process,
            start_time: None,
            finish_time: None,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Arrival tick.
    #[inline]
    pub fn arrival_time(&self) -> u64 {
        self.process.arrival_time
    }

    /// Total required CPU time.
    #[inline]
    pub fn burst_time(&self) -> u64 {
        self.process.burst_time
    }

    /// Whether the record has been finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Ticks between arrival and first dispatch. `None` before dispatch.
    pub fn response_time(&self) -> Option<u64> {
        self.start_time.map(|s| s - self.arrival_time())
    }

    /// Marks the first dispatch. Later calls keep the original start.
    pub(crate) fn dispatch(&mut self, now: u64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consumes up to `max` ticks of remaining time and returns the slice length.
    pub(crate) fn run_for(&mut self, max: u64) -> u64 {
        let slice = max.min(self.remaining_time);
        self.remaining_time -= slice;
        slice
    }

    /// Records completion at `now` and derives turnaround and waiting time.
    pub(crate) fn finish(&mut self, now: u64) {
        debug_assert!(self.finish_time.is_none(), "{} finished twice", self.id());
        debug_assert_eq!(self.remaining_time, 0);
        self.finish_time = Some(now);
        self.turnaround_time = now - self.arrival_time();
        self.waiting_time = self.turnaround_time - self.burst_time();
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finish_time {
            Some(finish) => write!(
                f,
                "{} finish={} TAT={} WT={}",
                self.process, finish, self.turnaround_time, self.waiting_time
            ),
            None => write!(f, "{} remaining={}", self.process, self.remaining_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 5).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, Some(3));
        assert_eq!(Process::new("P2", 0, 1).priority, None);
    }

    #[test]
    fn test_process_display() {
        let p = Process::new("P1", 0, 5).with_priority(2);
        assert_eq!(p.to_string(), "Process(P1, AT=0, BT=5, P=2)");
        assert_eq!(Process::new("P2", 1, 3).to_string(), "Process(P2, AT=1, BT=3, P=-)");
    }

    #[test]
    fn test_record_lifecycle() {
        let mut r = ProcessRecord::new(Process::new("P1", 1, 5));
        assert_eq!(r.remaining_time, 5);
        assert!(!r.is_completed());
        assert_eq!(r.response_time(), None);

        r.dispatch(3);
        assert_eq!(r.run_for(3), 3);
        r.dispatch(8); // second dispatch keeps the first start
        assert_eq!(r.run_for(3), 2); // only 2 ticks were owed
        assert_eq!(r.remaining_time, 0);
        r.finish(10);

        assert_eq!(r.start_time, Some(3));
        assert_eq!(r.finish_time, Some(10));
        assert_eq!(r.turnaround_time, 9);
        assert_eq!(r.waiting_time, 4);
        assert_eq!(r.response_time(), Some(2));
        assert!(r.is_completed());
    }

    #[test]
    fn test_record_display() {
        let mut r = ProcessRecord::new(Process::new("P1", 0, 2));
        assert!(r.to_string().ends_with("remaining=2"));
        r.dispatch(0);
        r.run_for(2);
        r.finish(2);
        assert!(r.to_string().ends_with("finish=2 TAT=2 WT=0"));
    }
}
