//! Event pool - the shuffled deck with draw-without-replacement.
//!
//! The pool owns the shuffled records for one session and enforces that
//! each card is drawn at most once. Draws remove a uniformly random index
//! from an explicit `remaining` list (O(1) via `swap_remove`), so there is
//! no rejection-sampling loop that could stall as the pool empties.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{EventRecord, GameRng};
use crate::error::GameError;

/// Holds the randomized deck for one session.
///
/// Invariants:
/// - `records` is a permutation of the input (shuffle loses nothing).
/// - `drawn` only grows for the lifetime of a session; every index in it
///   is below `records.len()`.
/// - Every record index is drawn at most once.
#[derive(Clone, Debug)]
pub struct EventPool {
    /// All records, in post-shuffle order.
    records: Vec<EventRecord>,
    /// Indices into `records` not yet drawn. Order is irrelevant;
    /// `swap_remove` keeps removal O(1).
    remaining: Vec<usize>,
    /// Indices already handed out.
    drawn: FxHashSet<usize>,
}

impl EventPool {
    /// Build a pool from the feed records, applying an unbiased shuffle.
    ///
    /// Fails with [`GameError::EmptyData`] if `records` is empty.
    pub fn new(mut records: Vec<EventRecord>, rng: &mut GameRng) -> Result<Self, GameError> {
        if records.is_empty() {
            return Err(GameError::EmptyData);
        }

        rng.shuffle(&mut records);
        debug!(count = records.len(), "shuffled event pool");

        Ok(Self {
            remaining: (0..records.len()).collect(),
            drawn: FxHashSet::default(),
            records,
        })
    }

    /// Draw a not-yet-used record, or `None` if the pool is exhausted.
    ///
    /// Marks the record as drawn; it will never be returned again this
    /// session.
    pub fn draw_unused(&mut self, rng: &mut GameRng) -> Option<EventRecord> {
        if self.remaining.is_empty() {
            return None;
        }

        let slot = rng.gen_range_usize(0..self.remaining.len());
        let index = self.remaining.swap_remove(slot);
        self.drawn.insert(index);

        debug!(index, remaining = self.remaining.len(), "drew event card");
        Some(self.records[index].clone())
    }

    /// Number of records not yet drawn.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Number of records drawn so far.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Total number of records in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the pool holds no records at all.
    ///
    /// A constructed pool is never empty; this exists for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
