//! Priority scheduling, non-preemptive.
//!
//! Same decision loop as shortest-job-first, selecting on the priority value
//! instead of the burst (lower value = more urgent). Non-preemptive: a more
//! urgent arrival waits for the running process to finish.

use super::run_nonpreemptive;
use crate::models::{Process, ScheduleResult};
use crate::validation::ScheduleError;

/// Schedules the given processes by ascending priority value.
pub fn schedule(processes: Vec<Process>) -> Result<ScheduleResult, ScheduleError> {
    run_nonpreemptive(processes, |p| i64::from(p.priority))
}
