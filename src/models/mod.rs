//! Simulation domain models.
//!
//! Core data types for describing scheduling input and capturing run output:
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input facts + per-run outcome fields |
//! | `Segment` | One contiguous processor occupation |
//! | `ScheduleResult` | Finalized processes + coalesced timeline + counters |

mod process;
mod result;
mod segment;

pub use process::Process;
pub use result::ScheduleResult;
pub use segment::{coalesce, Segment, IDLE_ID};
