//! Round-Robin (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Admit arrivals with `arrival <= now` to the back of a FIFO queue.
//! 2. If the queue is empty, idle until the next arrival.
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit arrivals with `arrival <= end of slice`, **then** re-queue the
//!    incumbent if it still has work; otherwise finish it.
//!
//! Step 4's ordering is load-bearing: a process arriving exactly when a
//! slice ends is queued ahead of the process that was just preempted.

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec;

use log::{debug, trace};

use super::{arrival_order, ScheduleOutcome, Scheduler};
use crate::error::{Result, ScheduleError};
use crate::models::{Process, ProcessRecord};

/// Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{RoundRobin, Scheduler};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let outcome = rr.schedule(&[Process::new("P1", 0, 3), Process::new("P2", 0, 1)]);
/// assert_eq!(outcome.timeline.len(), 3); // P1, P2, P1
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: u64,
}

impl RoundRobin {
    /// Creates a scheduler with the given time quantum.
    ///
    /// # Errors
    /// `ErrorKind::InvalidParameter` if `quantum` is zero, which would never
    /// make progress.
    pub fn new(quantum: u64) -> Result<Self> {
        if quantum == 0 {
            return Err(ScheduleError::invalid_parameter(
                "round-robin time quantum must be positive",
            ));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> u64 {
        self.quantum
    }
}

/// Moves every pending record that has arrived by `now` to the queue tail.
fn admit(
    pending: &mut Peekable<vec::IntoIter<ProcessRecord>>,
    queue: &mut VecDeque<ProcessRecord>,
    now: u64,
) {
    while let Some(record) = pending.next_if(|r| r.arrival_time() <= now) {
        trace!("RR: {} enqueued at {now}", record.id());
        queue.push_back(record);
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut outcome = ScheduleOutcome::default();
        let mut pending = arrival_order(processes).into_iter().peekable();
        let mut queue: VecDeque<ProcessRecord> = VecDeque::new();
        let mut now = 0;

        loop {
            admit(&mut pending, &mut queue, now);

            let Some(mut record) = queue.pop_front() else {
                match pending.peek() {
                    Some(next) => {
                        let arrival = next.arrival_time();
                        trace!("RR: idle {now}..{arrival}");
                        outcome.timeline.push_idle(now, arrival);
                        now = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            record.dispatch(now);
            let end = now + record.run_for(self.quantum);
            debug!(
                "RR: {} runs {now}..{end}, {} left",
                record.id(),
                record.remaining_time
            );
            outcome.timeline.push_process(record.id(), now, end);
            now = end;

            admit(&mut pending, &mut queue, now);

            if record.remaining_time == 0 {
                record.finish(now);
                outcome.completed.push(record);
            } else {
                queue.push_back(record);
            }
        }

        outcome
    }
}
