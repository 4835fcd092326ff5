//! The game session state machine.
//!
//! [`TimelineGame`] runs one session end-to-end and is the sole authority
//! on what constitutes a legal placement. The UI calls [`TimelineGame::start`],
//! [`TimelineGame::attempt_placement`], and [`TimelineGame::restart`], and
//! reads everything else back through the observer methods.
//!
//! States: `Active -> Won | Lost` (terminal). A single out-of-order
//! placement loses the game; recovery is only via `restart`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{EventRecord, GameRng};
use crate::error::GameError;
use crate::pool::EventPool;

/// Session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Cards remain to be placed.
    Active,
    /// Every card was placed correctly.
    Won,
    /// A card was placed out of order.
    Lost,
}

impl GameStatus {
    /// Whether the session has reached a terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// A committed card together with its position in the timeline.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    /// Index of the card in the timeline, 0 = earliest slot.
    pub position: usize,
    /// The placed event.
    pub record: &'a EventRecord,
}

/// One game session: the placed-card timeline, the pending card, counters,
/// and status.
///
/// The timeline is strictly non-decreasing in `chrono_key` at all times;
/// invalid drops are rejected before insertion, so the invariant is never
/// violated.
///
/// ## Example
///
/// ```
/// use timeline_game::{EventRecord, GameRng, GameStatus, TimelineGame};
///
/// let records = vec![
///     EventRecord::new("Printing press", 1440),
///     EventRecord::new("Moon landing", 1969),
/// ];
/// let mut game = TimelineGame::start(records, GameRng::new(42)).unwrap();
///
/// // Place the pending card where it belongs relative to the seed card.
/// let pending = game.pending_card().unwrap().chrono_key;
/// let slot = if pending <= game.timeline()[0].chrono_key { 0 } else { 1 };
/// assert_eq!(game.attempt_placement(slot).unwrap(), GameStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct TimelineGame {
    pool: EventPool,
    timeline: Vec<EventRecord>,
    pending: Option<EventRecord>,
    mistakes: u32,
    current_streak: u32,
    longest_streak: u32,
    status: GameStatus,
    message: String,
    rng: GameRng,
}

impl TimelineGame {
    /// Start a new session from feed records.
    ///
    /// Shuffles the records, seeds the timeline with one card (a
    /// single-element sequence is trivially ordered), and draws a second
    /// card as the pending card. Fails with [`GameError::InsufficientData`]
    /// if fewer than 2 records are supplied.
    pub fn start(records: Vec<EventRecord>, mut rng: GameRng) -> Result<Self, GameError> {
        if records.len() < 2 {
            return Err(GameError::InsufficientData {
                count: records.len(),
            });
        }

        let mut pool = EventPool::new(records, &mut rng)?;
        let (seed_card, pending) = match (pool.draw_unused(&mut rng), pool.draw_unused(&mut rng)) {
            (Some(a), Some(b)) => (a, b),
            // Unreachable: the pool holds at least 2 records here.
            _ => return Err(GameError::InsufficientData { count: pool.len() }),
        };

        info!(deck_size = pool.len(), "session started");

        Ok(Self {
            pool,
            timeline: vec![seed_card],
            pending: Some(pending),
            mistakes: 0,
            current_streak: 0,
            longest_streak: 0,
            status: GameStatus::Active,
            message: String::new(),
            rng,
        })
    }

    /// Replace the session wholesale: fresh shuffle, counters zeroed,
    /// status back to `Active`.
    ///
    /// The record set may be freshly fetched or the one already held by
    /// the caller. On error the current session is left untouched. The
    /// RNG stream continues from where the old session left it.
    pub fn restart(&mut self, records: Vec<EventRecord>) -> Result<(), GameError> {
        *self = Self::start(records, self.rng.clone())?;
        Ok(())
    }

    /// Drop the pending card at `target_index`.
    ///
    /// Valid slots are `0..=timeline.len()`, the N+1 gaps around N placed
    /// cards. Preconditions (status `Active`, a pending card present, slot
    /// in range) fail with [`GameError::InvalidState`] without touching the
    /// session.
    ///
    /// A chronologically valid drop commits the card and either draws the
    /// next pending card or wins the game; an invalid drop loses it on the
    /// spot. Returns the status after the attempt.
    pub fn attempt_placement(&mut self, target_index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidState(
                "placement attempted on a finished game",
            ));
        }
        if target_index > self.timeline.len() {
            return Err(GameError::InvalidState("target slot out of range"));
        }
        let card = self
            .pending
            .clone()
            .ok_or(GameError::InvalidState("no pending card to place"))?;

        let mut candidate = self.timeline.clone();
        candidate.insert(target_index, card);

        // Full scan of the candidate rather than just the neighbors of the
        // insertion point. The rest was already ordered, so the result is
        // the same, but the whole-sequence check is the contract and keeps
        // duplicate-key edge cases honest.
        if is_chronological(&candidate) {
            self.timeline = candidate;
            self.pending = None;
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);

            if self.pool.remaining_count() == 0 {
                self.finish_won();
            } else {
                match self.pool.draw_unused(&mut self.rng) {
                    Some(next) => self.pending = Some(next),
                    // The count said cards remained; an empty draw still
                    // means every card has been placed.
                    None => self.finish_won(),
                }
            }
        } else {
            // Candidate is discarded, the timeline stays as it was. The
            // streak is retained at its last value for reporting.
            self.mistakes += 1;
            self.status = GameStatus::Lost;
            self.message = format!("Game Over! Longest streak: {}", self.longest_streak);
            info!(
                target_index,
                mistakes = self.mistakes,
                longest_streak = self.longest_streak,
                "out-of-order placement, game lost"
            );
        }

        Ok(self.status)
    }

    fn finish_won(&mut self) {
        self.status = GameStatus::Won;
        self.message = "Congratulations! You've placed all cards correctly.".to_string();
        info!(
            placed = self.timeline.len(),
            longest_streak = self.longest_streak,
            "all cards placed, game won"
        );
    }

    // === Observables ===

    /// The card awaiting placement, if any.
    #[must_use]
    pub fn pending_card(&self) -> Option<&EventRecord> {
        self.pending.as_ref()
    }

    /// The committed timeline, earliest first.
    #[must_use]
    pub fn timeline(&self) -> &[EventRecord] {
        &self.timeline
    }

    /// The timeline as explicit placements (position + record).
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> {
        self.timeline
            .iter()
            .enumerate()
            .map(|(position, record)| Placement { position, record })
    }

    /// Number of drop slots currently offered: the N+1 gaps around N
    /// placed cards.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.timeline.len() + 1
    }

    /// Mistakes made this session.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Consecutive correct placements since the last mistake or session
    /// start.
    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Best streak seen this session. Never less than `current_streak`.
    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Human-readable status line: empty while `Active`, the victory or
    /// game-over text once terminal.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Whether adjacent chrono keys are non-decreasing. Equal keys are
/// compatible in either order.
fn is_chronological(sequence: &[EventRecord]) -> bool {
    sequence
        .windows(2)
        .all(|pair| pair[0].chrono_key <= pair[1].chrono_key)
}
