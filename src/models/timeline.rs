//! Timeline (execution log) model.
//!
//! The timeline is the canonical execution history of one run: contiguous,
//! ordered spans of CPU occupancy, with idle spans recorded explicitly.
//! Every metric derives from it plus the completed-process set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who held the CPU during a span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// No eligible process; the CPU idled.
    Idle,
    /// The identified process ran.
    Process(String),
}

impl Occupant {
    /// Process identifier, or `None` for idle spans.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Occupant::Idle => None,
            Occupant::Process(id) => Some(id),
        }
    }

    /// Whether this is an idle span.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Idle => f.write_str("IDLE"),
            Occupant::Process(id) => f.write_str(id),
        }
    }
}

/// One `[start, end)` span of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Span occupant.
    pub occupant: Occupant,
    /// Start tick (inclusive).
    pub start: u64,
    /// End tick (exclusive).
    pub end: u64,
}

impl TimelineEntry {
    /// Span during which a process ran.
    pub fn process(id: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            occupant: Occupant::Process(id.into()),
            start,
            end,
        }
    }

    /// Idle span.
    pub fn idle(start: u64, end: u64) -> Self {
        Self {
            occupant: Occupant::Idle,
            start,
            end,
        }
    }

    /// Span length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Append-only execution log of one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    ///
    /// Spans must be non-empty and start where the previous one ended.
    pub fn push(&mut self, entry: TimelineEntry) {
        debug_assert!(entry.start < entry.end, "empty span {entry:?}");
        debug_assert!(
            self.entries.last().map_or(true, |last| last.end == entry.start),
            "gap or overlap before {entry:?}"
        );
        self.entries.push(entry);
    }

    /// Appends a process span.
    pub fn push_process(&mut self, id: &str, start: u64, end: u64) {
        self.push(TimelineEntry::process(id, start, end));
    }

    /// Appends an idle span.
    pub fn push_idle(&mut self, start: u64, end: u64) {
        self.push(TimelineEntry::idle(start, end));
    }

    /// All spans in time order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Iterates spans in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no span has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start of the first span.
    pub fn start(&self) -> Option<u64> {
        self.entries.first().map(|e| e.start)
    }

    /// End of the last span.
    pub fn end(&self) -> Option<u64> {
        self.entries.last().map(|e| e.end)
    }

    /// Total elapsed time: last end minus first start (0 when empty).
    pub fn span(&self) -> u64 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Sum of non-idle span durations.
    pub fn busy_time(&self) -> u64 {
        self.entries
            .iter()
            .filter(|e| !e.occupant.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Sum of idle span durations.
    pub fn idle_time(&self) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.occupant.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Spans in which the given process ran.
    pub fn entries_for(&self, process_id: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.occupant.process_id() == Some(process_id))
            .collect()
    }

    /// Total CPU time granted to the given process.
    pub fn busy_time_for(&self, process_id: &str) -> u64 {
        self.entries_for(process_id)
            .iter()
            .map(|e| e.duration())
            .sum()
    }

    /// Whether every span is non-empty and consecutive spans share a boundary.
    pub fn is_contiguous(&self) -> bool {
        self.entries.iter().all(|e| e.start < e.end)
            && self.entries.windows(2).all(|w| w[0].end == w[1].start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push_idle(0, 2);
        t.push_process("P1", 2, 5);
        t.push_process("P2", 5, 6);
        t.push_idle(6, 8);
        t.push_process("P1", 8, 10);
        t
    }

    #[test]
    fn test_timeline_bounds() {
        let t = sample_timeline();
        assert_eq!(t.len(), 5);
        assert_eq!(t.start(), Some(0));
        assert_eq!(t.end(), Some(10));
        assert_eq!(t.span(), 10);
    }

    #[test]
    fn test_busy_and_idle_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.idle_time(), 4);
        assert_eq!(t.busy_time() + t.idle_time(), t.span());
    }

    #[test]
    fn test_per_process_queries() {
        let t = sample_timeline();
        assert_eq!(t.entries_for("P1").len(), 2);
        assert_eq!(t.busy_time_for("P1"), 5);
        assert_eq!(t.busy_time_for("P2"), 1);
        assert_eq!(t.busy_time_for("P9"), 0);
    }

    #[test]
    fn test_contiguity() {
        assert!(sample_timeline().is_contiguous());
        assert!(Timeline::new().is_contiguous());

        let gapped = Timeline {
            entries: vec![
                TimelineEntry::process("P1", 0, 2),
                TimelineEntry::process("P2", 3, 4),
            ],
        };
        assert!(!gapped.is_contiguous());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.span(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.start(), None);
    }

    #[test]
    fn test_occupant() {
        assert_eq!(Occupant::Idle.to_string(), "IDLE");
        assert_eq!(Occupant::Process("P3".into()).process_id(), Some("P3"));
        assert!(Occupant::Idle.process_id().is_none());
        assert!(Occupant::Idle.is_idle());
    }
}
