//! Shortest-job-first scheduling, non-preemptive.
//!
//! # Algorithm
//! At each decision point (t=0, then after each completion or idle advance),
//! the eligible process with the smallest burst time runs to completion.
//! Ties fall to the earliest arrival, then input order.

use super::run_nonpreemptive;
use crate::models::{Process, ScheduleResult};
use crate::validation::ScheduleError;

/// Schedules the given processes shortest-job-first.
pub fn schedule(processes: Vec<Process>) -> Result<ScheduleResult, ScheduleError> {
    run_nonpreemptive(processes, |p| p.burst_time)
}
