//! First-come-first-served scheduling.
//!
//! # Algorithm
//! Processes run to completion in arrival order (stable sort, so input order
//! breaks arrival ties). A gap before the next arrival becomes an idle
//! segment and time advances to that arrival.

use super::{build_result, DispatchTracker};
use crate::models::{Process, ScheduleResult, Segment};
use crate::validation::ScheduleError;

/// Schedules the given processes first-come-first-served.
pub fn schedule(mut processes: Vec<Process>) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessSet);
    }

    processes.sort_by_key(|p| p.arrival_time);

    let mut time = 0i64;
    let mut segments = Vec::new();
    let mut tracker = DispatchTracker::new();

    for p in &mut processes {
        if time < p.arrival_time {
            segments.push(Segment::idle(time, p.arrival_time));
            time = p.arrival_time;
        }
        tracker.record(&p.id);
        p.mark_dispatched(time);
        segments.push(Segment::new(p.id.clone(), time, time + p.burst_time));
        time += p.burst_time;
        p.remaining_time = 0;
        p.finalize(time);
    }

    Ok(build_result(processes, segments, tracker.switches(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 4).with_priority(3),
            Process::new("P2", 1, 5).with_priority(1),
            Process::new("P3", 2, 2).with_priority(4),
            Process::new("P4", 3, 3).with_priority(2),
        ]
    }

    #[test]
    fn test_fcfs_dispatch_order_and_timings() {
        let result = schedule(sample_set()).unwrap();

        let order: Vec<&str> = result
            .segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.entity_id.as_str())
            .collect();
        assert_eq!(order, vec!["P1", "P2", "P3", "P4"]);

        let waits: Vec<i64> = ["P1", "P2", "P3", "P4"]
            .iter()
            .map(|id| result.process(id).unwrap().waiting_time)
            .collect();
        assert_eq!(waits, vec![0, 3, 7, 10]);

        let turnarounds: Vec<i64> = ["P1", "P2", "P3", "P4"]
            .iter()
            .map(|id| result.process(id).unwrap().turnaround_time)
            .collect();
        assert_eq!(turnarounds, vec![4, 8, 9, 13]);

        assert_eq!(result.context_switches, 3);
        assert_eq!(result.total_idle_time, 0);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let result = schedule(vec![Process::new("P1", 0, 2), Process::new("P2", 5, 1)]).unwrap();
        assert_eq!(
            result.segments,
            vec![
                Segment::new("P1", 0, 2),
                Segment::idle(2, 5),
                Segment::new("P2", 5, 6),
            ]
        );
        assert_eq!(result.total_idle_time, 3);
        // Idle gap does not reset the previous-dispatch reference
        assert_eq!(result.context_switches, 1);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let result = schedule(vec![Process::new("P1", 4, 2)]).unwrap();
        assert_eq!(result.segments[0], Segment::idle(0, 4));
        assert_eq!(result.process("P1").unwrap().start_time, Some(4));
    }

    #[test]
    fn test_fcfs_single_process_no_switches() {
        let result = schedule(vec![Process::new("P1", 0, 3)]).unwrap();
        assert_eq!(result.context_switches, 0);
        assert_eq!(result.process("P1").unwrap().completion_time, Some(3));
    }

    #[test]
    fn test_fcfs_arrival_tie_keeps_input_order() {
        let result = schedule(vec![Process::new("B", 0, 1), Process::new("A", 0, 1)]).unwrap();
        assert_eq!(result.segments[0].entity_id, "B");
        assert_eq!(result.segments[1].entity_id, "A");
    }

    #[test]
    fn test_fcfs_empty() {
        assert_eq!(schedule(Vec::new()), Err(ScheduleError::EmptyProcessSet));
    }
}
