//! Non-preemptive selection loop shared by SJF and Priority scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every pending process with `arrival <= now` to the ready set.
//! 2. If the ready set is empty, idle until the next arrival.
//! 3. Otherwise dispatch the ready process with the smallest
//!    `(rule key, arrival)`; earlier admission wins remaining ties.
//! 4. Run it to completion. Arrivals during the run wait for step 1.
//!
//! Pending processes are kept in one arrival-sorted list with a cursor, so
//! admission never rescans processes that are already ready.

use log::{debug, trace};

use super::rules::{HighestPriority, SelectionRule, ShortestBurst};
use super::{arrival_order, ScheduleOutcome, Scheduler};
use crate::models::{Process, ProcessRecord};

/// Non-preemptive scheduler driven by a [`SelectionRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPreemptive<R> {
    rule: R,
}

/// Shortest-Job-First (non-preemptive).
pub type ShortestJobFirst = NonPreemptive<ShortestBurst>;

/// Priority scheduling (non-preemptive, lower value = more urgent).
pub type PriorityScheduling = NonPreemptive<HighestPriority>;

impl<R: SelectionRule> NonPreemptive<R> {
    /// Creates a scheduler for the given rule.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The selection rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Index of the ready record to dispatch next.
    fn select(&self, ready: &[ProcessRecord]) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| (self.rule.key(&r.process), r.arrival_time()))
            .map(|(idx, _)| idx)
    }
}

impl<R: SelectionRule> Scheduler for NonPreemptive<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let name = self.rule.name();
        let mut outcome = ScheduleOutcome::default();
        let mut pending = arrival_order(processes).into_iter().peekable();
        let mut ready: Vec<ProcessRecord> = Vec::new();
        let mut now = 0;

        loop {
            while let Some(record) = pending.next_if(|r| r.arrival_time() <= now) {
                ready.push(record);
            }

            let Some(idx) = self.select(&ready) else {
                match pending.peek() {
                    Some(next) => {
                        let arrival = next.arrival_time();
                        trace!("{name}: idle {now}..{arrival}");
                        outcome.timeline.push_idle(now, arrival);
                        now = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            // `remove` keeps admission order for later tie-breaks.
            let mut record = ready.remove(idx);
            record.dispatch(now);
            let end = now + record.run_for(record.burst_time());
            debug!(
                "{name}: {} runs {now}..{end} ({} ready)",
                record.id(),
                ready.len()
            );
            outcome.timeline.push_process(record.id(), now, end);
            record.finish(end);

            now = end;
            outcome.completed.push(record);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{assert_invariants, sample_processes, spans, waiting};

    fn sjf() -> ShortestJobFirst {
        NonPreemptive::new(ShortestBurst)
    }

    fn priority() -> PriorityScheduling {
        NonPreemptive::new(HighestPriority)
    }

    fn sample_spans() -> Vec<(String, u64, u64)> {
        vec![
            ("P1".to_string(), 0, 5),
            ("P2".to_string(), 5, 8),
            ("P3".to_string(), 8, 16),
        ]
    }

    #[test]
    fn test_names() {
        assert_eq!(sjf().name(), "SJF");
        assert_eq!(priority().name(), "Priority");
        assert_eq!(sjf().rule().name(), sjf().name());
    }

    #[test]
    fn test_rule_accessor_drives_selection() {
        let scheduler = priority();
        let p = Process::new("P1", 0, 1).with_priority(4);
        assert_eq!(scheduler.rule().key(&p), (false, 4));
    }

    #[test]
    fn test_sjf_sample() {
        let processes = sample_processes();
        let outcome = sjf().schedule(&processes);
        assert_eq!(spans(&outcome), sample_spans());
        assert_eq!(waiting(&outcome, "P2"), 4);
        assert_invariants(&processes, &outcome);
    }

    #[test]
    fn test_priority_sample() {
        let processes = sample_processes();
        let outcome = priority().schedule(&processes);
        assert_eq!(spans(&outcome), sample_spans());
        assert_eq!(waiting(&outcome, "P3"), 6);
        assert_invariants(&processes, &outcome);
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        let processes = vec![
            Process::new("A", 0, 4),
            Process::new("B", 1, 6),
            Process::new("C", 2, 1),
            Process::new("D", 3, 2),
        ];
        let outcome = sjf().schedule(&processes);
        let order: Vec<&str> = outcome.completed.iter().map(|r| r.id()).collect();
        // A alone at t=0; at t=4 B, C, D are ready → C, D, B
        assert_eq!(order, vec!["A", "C", "D", "B"]);
        assert_invariants(&processes, &outcome);
    }

    #[test]
    fn test_sjf_no_preemption() {
        // X arrives while L runs and is shorter, but L keeps the CPU.
        let processes = vec![Process::new("L", 0, 10), Process::new("X", 1, 1)];
        let outcome = sjf().schedule(&processes);
        assert_eq!(outcome.timeline.entries_for("L").len(), 1);
        assert_eq!(outcome.record("X").unwrap().start_time, Some(10));
    }

    #[test]
    fn test_sjf_tie_breaks_by_arrival_then_input() {
        let processes = vec![
            Process::new("first", 0, 5),
            Process::new("b_late", 3, 2),
            Process::new("a_early", 1, 2),
            Process::new("a_same", 1, 2),
        ];
        let outcome = sjf().schedule(&processes);
        let order: Vec<&str> = outcome.completed.iter().map(|r| r.id()).collect();
        assert_eq!(order, vec!["first", "a_early", "a_same", "b_late"]);
    }

    #[test]
    fn test_priority_tie_breaks_by_arrival() {
        let processes = vec![
            Process::new("run", 0, 5).with_priority(9),
            Process::new("later", 4, 1).with_priority(1),
            Process::new("sooner", 2, 1).with_priority(1),
        ];
        let outcome = priority().schedule(&processes);
        let order: Vec<&str> = outcome.completed.iter().map(|r| r.id()).collect();
        assert_eq!(order, vec!["run", "sooner", "later"]);
    }

    #[test]
    fn test_priority_unset_runs_last() {
        let processes = vec![
            Process::new("busy", 0, 3).with_priority(5),
            Process::new("none", 0, 1),
            Process::new("low", 1, 1).with_priority(100),
        ];
        let outcome = priority().schedule(&processes);
        let order: Vec<&str> = outcome.completed.iter().map(|r| r.id()).collect();
        assert_eq!(order, vec!["busy", "low", "none"]);
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let processes = vec![Process::new("P1", 3, 2), Process::new("P2", 8, 2)];
        let outcome = sjf().schedule(&processes);
        assert_eq!(
            spans(&outcome),
            vec![
                ("IDLE".to_string(), 0, 3),
                ("P1".to_string(), 3, 5),
                ("IDLE".to_string(), 5, 8),
                ("P2".to_string(), 8, 10),
            ]
        );
        assert_invariants(&processes, &outcome);
    }

    #[test]
    fn test_empty_input() {
        assert!(sjf().schedule(&[]).is_empty());
        assert!(priority().schedule(&[]).is_empty());
    }
}
