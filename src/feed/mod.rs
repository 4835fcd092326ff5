//! Data-feed parsing and validation.
//!
//! The feed is a JSON array of event objects fetched by the embedding UI
//! (this crate never touches the network). Parsing and the minimum-size
//! check live here so a session is only ever started from a usable feed.

use tracing::debug;

use crate::core::EventRecord;
use crate::error::GameError;

/// Parse a JSON event feed into records, validating it is playable.
///
/// A game needs at least two records: one to seed the timeline and one to
/// place. Returns [`GameError::Feed`] for malformed JSON and
/// [`GameError::InsufficientData`] for feeds that are too small.
pub fn parse_feed(json: &str) -> Result<Vec<EventRecord>, GameError> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;

    if records.len() < 2 {
        return Err(GameError::InsufficientData {
            count: records.len(),
        });
    }

    debug!(count = records.len(), "parsed event feed");
    Ok(records)
}
