//! Detect busy intervals that overlap a candidate interval.
//!
//! Adjacent intervals (where one ends exactly when another starts) are NOT conflicts.

use crate::interval::TimeInterval;
use serde::Serialize;

/// A busy interval that overlaps the candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub busy: TimeInterval,
    pub overlap_minutes: i64,
}

/// Find every busy interval overlapping `candidate`.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(candidate: &TimeInterval, busy: &[TimeInterval]) -> Vec<Conflict> {
    busy.iter()
        .filter(|b| candidate.overlaps(b))
        .map(|b| {
            let overlap_start = candidate.start().max(b.start());
            let overlap_end = candidate.end().min(b.end());
            Conflict {
                busy: *b,
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            }
        })
        .collect()
}
