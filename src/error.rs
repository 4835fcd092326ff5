//! Error kinds shared across the crate.
//!
//! A failed data feed is fatal to starting a session; an operation invoked
//! outside its valid state is an integration bug and fails loudly rather
//! than corrupting the session. Pool exhaustion is deliberately *not* an
//! error - it folds into the `Won` transition (see `game`).

use thiserror::Error;

/// Errors produced by feed loading and session operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The data feed contained no records at all.
    #[error("event feed is empty")]
    EmptyData,

    /// The data feed had fewer than the two records a game needs
    /// (one timeline seed plus one card to place).
    #[error("event feed has {count} record(s), need at least 2")]
    InsufficientData {
        /// How many records the feed actually supplied.
        count: usize,
    },

    /// An operation was invoked outside its valid state, e.g. a placement
    /// attempted on a finished game or with no pending card.
    #[error("invalid operation: {0}")]
    InvalidState(&'static str),

    /// The feed was not valid JSON for a sequence of event records.
    #[error("malformed event feed: {0}")]
    Feed(#[from] serde_json::Error),
}
