//! Core value types: event records and RNG.
//!
//! These are the building blocks the rest of the crate is assembled from
//! and depend on nothing else in it.

pub mod event;
pub mod rng;

pub use event::EventRecord;
pub use rng::GameRng;
