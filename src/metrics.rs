//! Aggregate performance metrics.
//!
//! Computes summary statistics from a completed run on demand; the run
//! result itself is never modified.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of per-process waiting times |
//! | Avg Turnaround Time | Mean of per-process turnaround times |
//! | CPU Utilization | Total burst / latest completion (0 when degenerate) |
//! | Context Switches | Pass-through from the run |

use crate::models::ScheduleResult;

/// Summary statistics for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleMetrics {
    /// Mean time spent ready but not running (ticks).
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion (ticks).
    pub avg_turnaround_time: f64,
    /// Fraction of the run the processor was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Process-to-process dispatch transitions.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed run.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let count = result.processes.len();

        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            let wait: i64 = result.processes.iter().map(|p| p.waiting_time).sum();
            let turnaround: i64 = result.processes.iter().map(|p| p.turnaround_time).sum();
            (wait as f64 / count as f64, turnaround as f64 / count as f64)
        };

        let makespan = result.makespan();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            result.total_burst() as f64 / makespan as f64
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization,
            context_switches: result.context_switches,
        }
    }
}
