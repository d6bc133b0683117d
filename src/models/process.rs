//! Process descriptor model.
//!
//! A process is the unit of work a scheduling policy dispatches: a set of
//! immutable input facts (arrival, burst, priority) plus the outcome fields
//! a simulation run fills in (start, completion, derived timings).
//!
//! # Time Representation
//! All times are integer ticks relative to a simulation epoch (t=0).
//! The consumer defines what one tick means.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Input fields are fixed at construction; outcome fields are mutated by the
/// policy that runs the process. Because of that mutation, a run must own its
/// descriptors — callers comparing policies over the same logical input clone
/// the set per run (the `algorithms` entry points do this).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time the process becomes eligible for execution (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (ticks, > 0). Immutable input.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Only the priority policy
    /// reads this.
    pub priority: i32,
    /// CPU time still owed. Starts at `burst_time`, reaches 0 at completion.
    pub remaining_time: i64,
    /// Time of first dispatch. `None` until the process first runs.
    pub start_time: Option<i64>,
    /// Time execution finished. `None` until `remaining_time` reaches 0.
    pub completion_time: Option<i64>,
    /// Derived: `turnaround_time - burst_time`. Valid once completed.
    pub waiting_time: i64,
    /// Derived: `completion_time - arrival_time`. Valid once completed.
    pub turnaround_time: i64,
}

impl Process {
    /// Creates a new process with default priority 1.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 1,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has finished executing.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records the first dispatch time. Later dispatches are ignored.
    pub fn mark_dispatched(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Finalizes the process at its completion time, computing the derived
    /// timings.
    ///
    /// # Panics
    /// Panics if the derived waiting time would be negative or the process
    /// still has remaining work — either indicates a policy bug (e.g. double
    /// counted execution), not a user error.
    pub fn finalize(&mut self, completion_time: i64) {
        assert_eq!(
            self.remaining_time, 0,
            "process '{}' finalized with {} ticks remaining",
            self.id, self.remaining_time
        );
        self.completion_time = Some(completion_time);
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        assert!(
            self.waiting_time >= 0,
            "process '{}' completed at {} with negative waiting time",
            self.id,
            completion_time
        );
    }
}
