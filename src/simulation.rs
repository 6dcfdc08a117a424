//! Batch simulation: every discipline over one process set.
//!
//! Runs FCFS, SJF, Priority and Round Robin in that fixed order against the
//! same input and collects each outcome with its metrics. The order is part
//! of the contract: [`Comparison::best`] resolves ties by it.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result, ScheduleError};
use crate::metrics::{recommend_best, RunMetrics};
use crate::models::Process;
use crate::scheduler::{
    Fcfs, PriorityScheduling, RoundRobin, ScheduleOutcome, Scheduler, ShortestJobFirst,
};
use crate::validation::validate_processes;

/// Default Round-Robin time quantum.
pub const DEFAULT_TIME_QUANTUM: u64 = 3;

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin time quantum (ticks). Must be positive.
    pub time_quantum: u64,
}

impl SimulationConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: u64) -> Self {
        self.time_quantum = time_quantum;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }
}

/// Outcome and metrics of one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Discipline name (e.g., "SJF").
    pub algorithm: String,
    /// Timeline and completed records.
    pub outcome: ScheduleOutcome,
    /// Derived statistics.
    pub metrics: RunMetrics,
}

/// Results of a batch run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    results: Vec<AlgorithmResult>,
}

impl Comparison {
    /// All results in execution order.
    pub fn results(&self) -> &[AlgorithmResult] {
        &self.results
    }

    /// Iterates results in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmResult> {
        self.results.iter()
    }

    /// Finds a result by discipline name.
    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// `(name, average waiting time)` pairs in execution order.
    pub fn average_waiting_times(&self) -> Vec<(&str, f64)> {
        self.results
            .iter()
            .map(|r| (r.algorithm.as_str(), r.metrics.avg_waiting_time))
            .collect()
    }

    /// The discipline with the lowest average waiting time.
    ///
    /// Ties go to the earlier discipline in execution order.
    pub fn best(&self) -> Option<&AlgorithmResult> {
        let (name, _) = recommend_best(&self.average_waiting_times())?;
        self.get(name)
    }

    /// Number of disciplines run.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no discipline was run.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Runs every discipline over a process set.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::simulation::{Simulation, SimulationConfig};
///
/// let processes = vec![
///     Process::new("P1", 0, 5).with_priority(2),
///     Process::new("P2", 1, 3).with_priority(1),
///     Process::new("P3", 2, 8).with_priority(3),
/// ];
/// let sim = Simulation::new(SimulationConfig::default()).unwrap();
/// let comparison = sim.run(&processes).unwrap();
///
/// assert_eq!(comparison.len(), 4);
/// assert_eq!(comparison.best().unwrap().algorithm, "FCFS");
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    schedulers: Vec<Box<dyn Scheduler>>,
}

impl Simulation {
    /// Creates a simulation.
    ///
    /// # Errors
    /// `ErrorKind::InvalidParameter` if the time quantum is zero.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let round_robin = RoundRobin::new(config.time_quantum)?;
        let schedulers: Vec<Box<dyn Scheduler>> = vec![
            Box::new(Fcfs),
            Box::new(ShortestJobFirst::default()),
            Box::new(PriorityScheduling::default()),
            Box::new(round_robin),
        ];
        Ok(Self { config, schedulers })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Discipline names in execution order.
    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.schedulers.iter().map(|s| s.name()).collect()
    }

    /// Validates the input and runs every discipline over it.
    ///
    /// An empty process set is not an error; every result is then empty.
    ///
    /// # Errors
    /// `ErrorKind::InvalidInput` if validation fails.
    pub fn run(&self, processes: &[Process]) -> Result<Comparison> {
        if let Err(errors) = validate_processes(processes) {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ScheduleError::new(ErrorKind::InvalidInput, message));
        }

        info!("simulating {} processes", processes.len());
        let results = self
            .schedulers
            .iter()
            .map(|scheduler| {
                let name = scheduler.name();
                info!("{name} execution started");
                let outcome = scheduler.schedule(processes);
                let metrics = RunMetrics::calculate(&outcome);
                info!(
                    "{name} execution completed - avg WT {:.2}, CPU {:.2}%",
                    metrics.avg_waiting_time, metrics.cpu_utilization
                );
                AlgorithmResult {
                    algorithm: name.to_string(),
                    outcome,
                    metrics,
                }
            })
            .collect();

        let comparison = Comparison { results };
        if let Some(best) = comparison.best() {
            info!(
                "best algorithm: {} with avg WT {:.2}",
                best.algorithm, best.metrics.avg_waiting_time
            );
        }
        Ok(comparison)
    }
}
