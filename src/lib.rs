//! # timeline-game
//!
//! Core state machine for a single-player chronological-ordering card game:
//! a deck of historical events is presented one card at a time, and the
//! player must place each card into its correct chronological position
//! among previously placed cards. One wrong placement ends the game.
//!
//! ## Design Principles
//!
//! 1. **Core only**: rendering, drag plumbing, and network fetch are the
//!    embedding UI's problem. The crate exposes a call/observe interface:
//!    the UI calls [`TimelineGame::start`], [`TimelineGame::attempt_placement`],
//!    and [`TimelineGame::restart`], and reads back the pending card, the
//!    timeline, counters, status, and a human-readable message.
//!
//! 2. **Values, not view nodes**: card identity is an [`EventRecord`] value
//!    flowing through the session state, never a reference to anything
//!    rendered.
//!
//! 3. **Deterministic when seeded**: all randomness goes through [`GameRng`],
//!    so tests can replay exact shuffles and draws.
//!
//! ## Modules
//!
//! - `core`: event record value type and RNG
//! - `feed`: JSON data-feed parsing and validation
//! - `pool`: shuffled deck with draw-without-replacement
//! - `game`: the session state machine (placement validation, streaks, status)
//! - `error`: error kinds shared across the crate

pub mod core;
pub mod error;
pub mod feed;
pub mod game;
pub mod pool;

// Re-export commonly used types
pub use crate::core::{EventRecord, GameRng};
pub use crate::error::GameError;
pub use crate::feed::parse_feed;
pub use crate::game::{GameStatus, Placement, TimelineGame};
pub use crate::pool::EventPool;
