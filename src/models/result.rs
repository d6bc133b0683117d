//! Schedule result model.
//!
//! The complete outcome of one policy run: the finalized processes, the
//! coalesced execution timeline, and the run-wide counters. Immutable once
//! produced — the metrics aggregator and any presentation layer read it,
//! never write it.

use serde::{Deserialize, Serialize};

use super::{Process, Segment};

/// Outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// All processes, each with completion data filled in.
    pub processes: Vec<Process>,
    /// Chronological, coalesced execution timeline (idle spans included).
    pub segments: Vec<Segment>,
    /// Process-to-process dispatch transitions (idle gaps do not count).
    pub context_switches: usize,
    /// Sum of all idle segment durations (ticks).
    pub total_idle_time: i64,
    /// Quantum derived by the adaptive round-robin policy. `None` for every
    /// other policy.
    pub derived_quantum: Option<i64>,
}

impl ScheduleResult {
    /// Latest completion time across all processes (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total CPU time demanded by all processes.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Finds a process by ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }
}
