//! CPU scheduling policy simulator.
//!
//! Simulates classic single-processor scheduling policies over a finite,
//! statically-known process set and produces a chronological execution
//! timeline plus aggregate performance metrics. The engine is a pure,
//! synchronous function-call contract — no rendering, no interaction, no
//! real execution.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `ScheduleResult`,
//!   segment coalescing
//! - **`algorithms`**: The five policies (FCFS, SJF, Priority, Round-Robin,
//!   Adaptive Round-Robin) and the `run`/`compare_all` entry points
//! - **`metrics`**: Summary statistics derived from a completed run
//! - **`validation`**: Boundary checks on the input descriptor set
//! - **`parse`**: Line-oriented `id arrival burst [priority]` record parsing
//!
//! # Example
//!
//! ```
//! use cpu_sched::algorithms::{run, Policy};
//! use cpu_sched::metrics::ScheduleMetrics;
//! use cpu_sched::parse::parse_processes;
//! use cpu_sched::validation::validate_input;
//!
//! let procs = parse_processes("P1 0 4 3\nP2 1 5 1\nP3 2 2 4\nP4 3 3 2\n");
//! validate_input(&procs).unwrap();
//!
//! let result = run(Policy::RoundRobin, &procs, Some(2)).unwrap();
//! let metrics = ScheduleMetrics::calculate(&result);
//! assert!(metrics.cpu_utilization <= 1.0);
//! ```
//!
//! # Reference
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod metrics;
pub mod models;
pub mod parse;
pub mod validation;
