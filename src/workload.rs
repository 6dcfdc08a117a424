//! Seeded random workloads.
//!
//! Produces reproducible process sets for demos, benchmarks and
//! property-style tests. The same seed and spec always yield the same set.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival tick (inclusive). Arrivals are uniform in `0..=max_arrival`.
    pub max_arrival: u64,
    /// Burst range (inclusive). `min_burst` is clamped to at least 1.
    pub min_burst: u64,
    /// Largest burst (inclusive).
    pub max_burst: u64,
    /// Number of distinct priority levels (`1..=levels`). 0 = no priorities.
    pub priority_levels: i32,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            priority_levels: 5,
        }
    }
}

/// Generates `spec.count` processes named `P1..Pn`, in ID order.
pub fn random_workload(seed: u64, spec: &WorkloadSpec) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let min_burst = spec.min_burst.max(1);
    let max_burst = spec.max_burst.max(min_burst);

    (1..=spec.count)
        .map(|n| {
            let arrival = rng.random_range(0..=spec.max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            let process = Process::new(format!("P{n}"), arrival, burst);
            if spec.priority_levels > 0 {
                process.with_priority(rng.random_range(1..=spec.priority_levels))
            } else {
                process
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_same_seed_same_workload() {
        let spec = WorkloadSpec::default();
        assert_eq!(random_workload(3, &spec), random_workload(3, &spec));
    }

    #[test]
    fn test_workload_respects_spec() {
        let spec = WorkloadSpec {
            count: 50,
            max_arrival: 5,
            min_burst: 2,
            max_burst: 4,
            priority_levels: 3,
        };
        let processes = random_workload(11, &spec);
        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        for p in &processes {
            assert!(p.arrival_time <= 5);
            assert!((2..=4).contains(&p.burst_time));
            assert!(matches!(p.priority, Some(1..=3)));
        }
    }

    #[test]
    fn test_workload_without_priorities() {
        let spec = WorkloadSpec {
            priority_levels: 0,
            min_burst: 0,
            max_burst: 0,
            ..WorkloadSpec::default()
        };
        let processes = random_workload(0, &spec);
        assert!(processes.iter().all(|p| p.priority.is_none()));
        assert!(processes.iter().all(|p| p.burst_time == 1));
    }
}
