//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order; equal arrivals keep their
//! input order. There is no ready-queue decision, only run or idle.

use log::{debug, trace};

use super::{arrival_order, ScheduleOutcome, Scheduler};
use crate::models::Process;

/// First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let outcome = Fcfs.schedule(&processes);
/// assert_eq!(outcome.record("P2").unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut outcome = ScheduleOutcome::default();
        let mut now = 0;

        for mut record in arrival_order(processes) {
            if now < record.arrival_time() {
                trace!("FCFS: idle {now}..{}", record.arrival_time());
                outcome.timeline.push_idle(now, record.arrival_time());
                now = record.arrival_time();
            }

            record.dispatch(now);
            let end = now + record.run_for(record.burst_time());
            debug!("FCFS: {} runs {now}..{end}", record.id());
            outcome.timeline.push_process(record.id(), now, end);
            record.finish(end);

            now = end;
            outcome.completed.push(record);
        }

        outcome
    }
}
