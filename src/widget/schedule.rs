//! Reveal schedule for staggered row animations
//!
//! The feature list reveals its rows one after another instead of all at
//! once. Each row gets a deadline `start + row * STAGGER_STEP`; a row is
//! drawn in its final state once its deadline has passed and stays hidden
//! before that. The schedule is owned by the widget and cancelled whenever
//! the rendered output it belongs to is replaced or the widget leaves the
//! tree, so no stale deadline outlives the rows it was made for.

use std::time::{Duration, Instant};

/// Per-row delay between consecutive reveals (row index x 100ms)
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Deadlines for a single batch of rows.
#[derive(Debug, Clone, Default)]
pub struct RevealSchedule {
    deadlines: Vec<Instant>,
}

impl RevealSchedule {
    /// An empty schedule: every row counts as revealed
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear stagger for `rows` rows starting at `start`
    pub fn staggered_from(rows: usize, start: Instant) -> Self {
        Self {
            deadlines: (0..rows).map(|row| start + STAGGER_STEP * row as u32).collect(),
        }
    }

    /// Drop every pending deadline.
    ///
    /// Called when the rows the schedule was built for are discarded.
    pub fn cancel(&mut self) {
        self.deadlines.clear();
    }

    /// Whether `row` has reached its final visual state at `now`.
    ///
    /// Rows without a deadline (cancelled or never scheduled) are shown
    /// immediately.
    pub fn revealed(&self, row: usize, now: Instant) -> bool {
        match self.deadlines.get(row) {
            Some(deadline) => now >= *deadline,
            None => true,
        }
    }

    /// Number of deadlines still pending at `now`
    pub fn pending(&self, now: Instant) -> usize {
        self.deadlines.iter().filter(|deadline| now < **deadline).count()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
