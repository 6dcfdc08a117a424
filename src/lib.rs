//! Single-CPU process scheduling simulator.
//!
//! Given processes (arrival, burst, optional priority), computes the
//! execution timeline and per-process metrics for four classical
//! disciplines: FCFS, non-preemptive SJF, non-preemptive Priority, and
//! Round-Robin with a fixed quantum.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRecord`, `Timeline`
//! - **`scheduler`**: The four disciplines behind the `Scheduler` trait
//! - **`metrics`**: Turnaround, waiting, response, CPU utilization, best pick
//! - **`simulation`**: Runs every discipline over one input in a fixed order
//! - **`validation`**: Input integrity checks (duplicate IDs, zero bursts)
//! - **`parser`** / **`report`**: Reference text input, Gantt/table/CSV output
//! - **`workload`**: Seeded random process sets
//!
//! # Assumptions
//!
//! One CPU, zero context-switch overhead, integer ticks, no I/O phases.
//! Every algorithm works on fresh records, so the caller's input is never
//! mutated and runs are repeatable.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, Result, ScheduleError};
