//! Scheduling policies and the run entry points.
//!
//! Five classic single-processor policies over a closed, fully-known process
//! set:
//!
//! - **FCFS** — first-come-first-served, non-preemptive
//! - **SJF** — shortest-job-first, non-preemptive
//! - **PRIORITY** — lowest priority value first, non-preemptive
//! - **RR** — round-robin with a caller-supplied quantum, preemptive
//! - **ARR** — round-robin with a quantum derived from the burst median
//!
//! # Usage
//!
//! ```
//! use cpu_sched::algorithms::{run, Policy};
//! use cpu_sched::models::Process;
//!
//! let procs = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 5)];
//! let result = run(Policy::Fcfs, &procs, None).unwrap();
//! assert_eq!(result.makespan(), 9);
//! ```
//!
//! # Context Switch Convention
//! All five policies count a context switch only when the dispatched process
//! differs from the previously dispatched process. Intervening idle spans do
//! not reset the reference, and the very first dispatch is never counted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use serde::{Deserialize, Serialize};

use crate::models::{coalesce, Process, ScheduleResult, Segment};
use crate::validation::ScheduleError;

/// Policy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Lowest priority value first, non-preemptive.
    Priority,
    /// Round-robin, preemptive, caller-supplied quantum.
    RoundRobin,
    /// Round-robin with a self-derived quantum.
    AdaptiveRoundRobin,
}

impl Policy {
    /// Short policy name (e.g. "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::RoundRobin => "RR",
            Policy::AdaptiveRoundRobin => "ARR",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest-Job-First (non-preemptive)",
            Policy::Priority => "Priority (non-preemptive)",
            Policy::RoundRobin => "Round Robin (preemptive)",
            Policy::AdaptiveRoundRobin => "Adaptive Round Robin",
        }
    }

    /// Whether this policy requires a caller-supplied quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// All policies, in presentation order.
    pub fn all() -> [Policy; 5] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::RoundRobin,
            Policy::Priority,
            Policy::AdaptiveRoundRobin,
        ]
    }
}

/// Runs one policy over a snapshot of the process set.
///
/// The descriptors are cloned per run — policies mutate `remaining_time` and
/// the outcome fields, so the caller's set is never touched and repeated runs
/// over the same input are independent.
///
/// `quantum` is only read by [`Policy::RoundRobin`]; pass `None` for the
/// other policies. A missing or non-positive quantum for round-robin yields
/// [`ScheduleError::InvalidQuantum`].
pub fn run(
    policy: Policy,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<ScheduleResult, ScheduleError> {
    let procs = processes.to_vec();
    match policy {
        Policy::Fcfs => fcfs::schedule(procs),
        Policy::Sjf => sjf::schedule(procs),
        Policy::Priority => priority::schedule(procs),
        Policy::RoundRobin => round_robin::schedule(procs, quantum.unwrap_or(0)),
        Policy::AdaptiveRoundRobin => round_robin::schedule_adaptive(procs),
    }
}

/// Runs every policy over independent clones of the same input.
///
/// `quantum` applies to the plain round-robin row only; the adaptive variant
/// derives its own.
pub fn compare_all(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<(Policy, ScheduleResult)>, ScheduleError> {
    Policy::all()
        .into_iter()
        .map(|policy| {
            let q = policy.needs_quantum().then_some(quantum);
            run(policy, processes, q).map(|result| (policy, result))
        })
        .collect()
}

/// Tracks dispatch transitions under the uniform context-switch rule.
///
/// Idle spans are simply not recorded, so a gap never resets the previous
/// dispatch reference.
#[derive(Debug, Default)]
pub(crate) struct DispatchTracker {
    last: Option<String>,
    switches: usize,
}

impl DispatchTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a process dispatch.
    pub(crate) fn record(&mut self, id: &str) {
        match self.last.as_deref() {
            Some(prev) if prev == id => {}
            Some(_) => {
                self.switches += 1;
                self.last = Some(id.to_string());
            }
            None => self.last = Some(id.to_string()),
        }
    }

    pub(crate) fn switches(&self) -> usize {
        self.switches
    }
}

/// Assembles the final result: coalesces the raw segment stream and sums
/// idle time, so every policy's output is uniformly shaped.
pub(crate) fn build_result(
    processes: Vec<Process>,
    segments: Vec<Segment>,
    context_switches: usize,
    derived_quantum: Option<i64>,
) -> ScheduleResult {
    let segments = coalesce(segments);
    let total_idle_time = segments
        .iter()
        .filter(|s| s.is_idle())
        .map(|s| s.duration())
        .sum();
    ScheduleResult {
        processes,
        segments,
        context_switches,
        total_idle_time,
        derived_quantum,
    }
}

/// Shared decision loop for the non-preemptive min-key policies.
///
/// At each decision point, selects the eligible process (arrived, not yet
/// complete) with the minimum `(key, arrival_time)` under strict-less
/// comparison over input order — so ties on the key fall to the earliest
/// arrival, and full ties to the first-listed process. When nothing is
/// eligible, jumps straight to the next arrival and emits one idle segment
/// for the gap. The selected process runs to completion uninterrupted.
pub(crate) fn run_nonpreemptive<K>(
    mut processes: Vec<Process>,
    key: K,
) -> Result<ScheduleResult, ScheduleError>
where
    K: Fn(&Process) -> i64,
{
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessSet);
    }

    let n = processes.len();
    let mut time = 0i64;
    let mut completed = 0usize;
    let mut segments = Vec::new();
    let mut tracker = DispatchTracker::new();

    while completed < n {
        let mut selected: Option<usize> = None;
        for i in 0..n {
            let p = &processes[i];
            if p.is_complete() || p.arrival_time > time {
                continue;
            }
            let better = match selected {
                None => true,
                Some(j) => {
                    let q = &processes[j];
                    (key(p), p.arrival_time) < (key(q), q.arrival_time)
                }
            };
            if better {
                selected = Some(i);
            }
        }

        let idx = match selected {
            Some(i) => i,
            None => {
                let next_arrival = processes
                    .iter()
                    .filter(|p| !p.is_complete())
                    .map(|p| p.arrival_time)
                    .min()
                    .expect("incomplete process exists while none is eligible");
                segments.push(Segment::idle(time, next_arrival));
                time = next_arrival;
                continue;
            }
        };

        tracker.record(&processes[idx].id);
        let p = &mut processes[idx];
        p.mark_dispatched(time);
        segments.push(Segment::new(p.id.clone(), time, time + p.burst_time));
        time += p.burst_time;
        p.remaining_time = 0;
        p.finalize(time);
        completed += 1;
    }

    Ok(build_result(processes, segments, tracker.switches(), None))
}
