//! Selection rules for the non-preemptive disciplines.
//!
//! A rule maps a process to an ordering key; the ready process with the
//! smallest key is dispatched next. Equal keys fall back to earliest
//! arrival, then to input order.

use std::fmt::Debug;

use crate::models::Process;

/// Ranks ready processes. **Lower key = dispatched first.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Ordering key.
    type Key: Ord;

    /// Name of the discipline this rule drives (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Computes the ordering key for a process.
    fn key(&self, process: &Process) -> Self::Key;
}

/// Shortest burst first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    type Key = u64;

    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> u64 {
        process.burst_time
    }
}

/// Smallest priority value first. Processes without a priority rank last.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    type Key = (bool, i32);

    fn name(&self) -> &'static str {
        "Priority"
    }

    fn key(&self, process: &Process) -> (bool, i32) {
        match process.priority {
            Some(p) => (false, p),
            None => (true, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_key() {
        let short = Process::new("A", 5, 2);
        let long = Process::new("B", 0, 9);
        assert!(ShortestBurst.key(&short) < ShortestBurst.key(&long));
    }

    #[test]
    fn test_priority_key_ordering() {
        let urgent = Process::new("A", 0, 1).with_priority(-3);
        let normal = Process::new("B", 0, 1).with_priority(7);
        let unset = Process::new("C", 0, 1);
        assert!(HighestPriority.key(&urgent) < HighestPriority.key(&normal));
        assert!(HighestPriority.key(&normal) < HighestPriority.key(&unset));

        let lowest = Process::new("D", 0, 1).with_priority(i32::MAX);
        assert!(HighestPriority.key(&lowest) < HighestPriority.key(&unset));
    }
}
