//! Execution segment model and segment coalescing.
//!
//! A segment is one contiguous span of the timeline during which a single
//! entity — a process, or the idle pseudo-entity — occupies the processor.
//! Policies emit one segment per dispatch; preemptive policies therefore
//! produce runs of short adjacent segments for the same process, which
//! [`coalesce`] merges before the result is handed to consumers.

use serde::{Deserialize, Serialize};

/// Reserved entity ID for spans where no process is eligible to run.
pub const IDLE_ID: &str = "IDLE";

/// One contiguous occupation of the processor: `[start, end)` with
/// `end > start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process ID, or [`IDLE_ID`] for an idle span.
    pub entity_id: String,
    /// Span start (ticks, inclusive).
    pub start: i64,
    /// Span end (ticks, exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a segment for the given entity.
    pub fn new(entity_id: impl Into<String>, start: i64, end: i64) -> Self {
        debug_assert!(end > start, "segment must have positive duration");
        Self {
            entity_id: entity_id.into(),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(IDLE_ID, start, end)
    }

    /// Span length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this segment represents an idle processor.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.entity_id == IDLE_ID
    }
}

/// Merges adjacent same-entity segments.
///
/// Any run of consecutive segments sharing an entity ID where each segment's
/// end equals the next one's start collapses into a single spanning segment.
/// Order-preserving and idempotent: coalescing an already-coalesced sequence
/// returns it unchanged.
pub fn coalesce(segments: Vec<Segment>) -> Vec<Segment> {
    let mut iter = segments.into_iter();
    let mut current = match iter.next() {
        Some(s) => s,
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    for seg in iter {
        if seg.entity_id == current.entity_id && seg.start == current.end {
            current.end = seg.end;
        } else {
            out.push(current);
            current = seg;
        }
    }
    out.push(current);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(id: &str, start: i64, end: i64) -> Segment {
        Segment::new(id, start, end)
    }

    #[test]
    fn test_segment_duration() {
        assert_eq!(seg("P1", 2, 7).duration(), 5);
    }

    #[test]
    fn test_idle_segment() {
        let s = Segment::idle(0, 3);
        assert!(s.is_idle());
        assert_eq!(s.entity_id, IDLE_ID);
        assert!(!seg("P1", 0, 3).is_idle());
    }

    #[test]
    fn test_coalesce_merges_adjacent_run() {
        // Round-robin slicing a lone ready process back-to-back
        let merged = coalesce(vec![seg("P1", 0, 2), seg("P1", 2, 4), seg("P1", 4, 5)]);
        assert_eq!(merged, vec![seg("P1", 0, 5)]);
    }

    #[test]
    fn test_coalesce_keeps_distinct_entities() {
        let segs = vec![seg("P1", 0, 2), seg("P2", 2, 4), seg("P1", 4, 6)];
        assert_eq!(coalesce(segs.clone()), segs);
    }

    #[test]
    fn test_coalesce_requires_contiguity() {
        // Same entity but separated by a gap: not merged
        let segs = vec![seg("P1", 0, 2), seg("P1", 3, 5)];
        assert_eq!(coalesce(segs.clone()), segs);
    }

    #[test]
    fn test_coalesce_merges_idle_runs() {
        let merged = coalesce(vec![Segment::idle(0, 1), Segment::idle(1, 4)]);
        assert_eq!(merged, vec![Segment::idle(0, 4)]);
    }

    #[test]
    fn test_coalesce_idempotent() {
        let segs = vec![
            seg("P1", 0, 2),
            seg("P1", 2, 4),
            Segment::idle(4, 6),
            seg("P2", 6, 7),
            seg("P2", 7, 9),
        ];
        let once = coalesce(segs);
        let twice = coalesce(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_coalesce_empty() {
        assert!(coalesce(Vec::new()).is_empty());
    }
}
