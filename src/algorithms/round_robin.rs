//! Round-robin scheduling, preemptive, plus the adaptive-quantum variant.
//!
//! # Algorithm
//! A time-ordered ready queue. Each step dequeues the head and runs it for
//! `min(quantum, remaining)`. Processes that arrive during that slice are
//! admitted before the preempted process re-queues, so an arrival landing
//! exactly at the slice boundary goes ahead of it. With an empty queue and
//! pending arrivals, an idle segment bridges to the next arrival.
//!
//! The adaptive variant derives its quantum as the median of all burst times
//! (even count: integer-division mean of the two middle values), clamped to
//! at least 1, and reports it in the result.

use std::collections::VecDeque;

use super::{build_result, DispatchTracker};
use crate::models::{Process, ScheduleResult, Segment};
use crate::validation::ScheduleError;

/// Schedules the given processes round-robin with the supplied quantum.
///
/// Rejects `quantum <= 0` — a sane default is the caller's responsibility,
/// never silently substituted here.
pub fn schedule(processes: Vec<Process>, quantum: i64) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessSet);
    }
    if quantum <= 0 {
        return Err(ScheduleError::InvalidQuantum(quantum));
    }
    Ok(simulate(processes, quantum, None))
}

/// Schedules round-robin with a quantum derived from the burst median.
pub fn schedule_adaptive(processes: Vec<Process>) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessSet);
    }
    let quantum = derive_quantum(&processes);
    Ok(simulate(processes, quantum, Some(quantum)))
}

/// Median burst time, clamped to >= 1.
fn derive_quantum(processes: &[Process]) -> i64 {
    let mut bursts: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    bursts.sort_unstable();
    let n = bursts.len();
    let median = if n % 2 == 1 {
        bursts[n / 2]
    } else {
        (bursts[n / 2 - 1] + bursts[n / 2]) / 2
    };
    median.max(1)
}

fn simulate(mut processes: Vec<Process>, quantum: i64, derived: Option<i64>) -> ScheduleResult {
    processes.sort_by_key(|p| p.arrival_time);

    let n = processes.len();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next_admit = 0usize;
    let mut time = 0i64;
    let mut segments = Vec::new();
    let mut tracker = DispatchTracker::new();

    loop {
        while next_admit < n && processes[next_admit].arrival_time <= time {
            queue.push_back(next_admit);
            next_admit += 1;
        }

        let idx = match queue.pop_front() {
            Some(i) => i,
            None if next_admit < n => {
                let next_arrival = processes[next_admit].arrival_time;
                segments.push(Segment::idle(time, next_arrival));
                time = next_arrival;
                continue;
            }
            None => break,
        };

        tracker.record(&processes[idx].id);
        let p = &mut processes[idx];
        p.mark_dispatched(time);
        let slice = quantum.min(p.remaining_time);
        segments.push(Segment::new(p.id.clone(), time, time + slice));
        time += slice;
        p.remaining_time -= slice;

        // Arrivals during the slice go ahead of the preempted process.
        while next_admit < n && processes[next_admit].arrival_time <= time {
            queue.push_back(next_admit);
            next_admit += 1;
        }

        if processes[idx].remaining_time > 0 {
            queue.push_back(idx);
        } else {
            processes[idx].finalize(time);
        }
    }

    build_result(processes, segments, tracker.switches(), derived)
}
