//! Event records - the immutable card values.
//!
//! An `EventRecord` is everything the game knows about one historical
//! event. Records come from an external data feed and are read-only once
//! loaded; the only field the core interprets is `chrono_key`, the sole
//! ordering key. The rest (label, image, description, links) is carried
//! for the UI to display.

use serde::{Deserialize, Deserializer, Serialize};

/// One historical event card.
///
/// Field names map to the feed's wire format: the feed calls the label
/// `event` and the ordering key `date`. The feed stores dates either as
/// integers or as numeric strings, so `chrono_key` accepts both.
///
/// ## Example
///
/// ```
/// use timeline_game::EventRecord;
///
/// let record: EventRecord = serde_json::from_str(
///     r#"{"event": "Moon landing", "date": "1969", "image": "moon.jpg",
///         "description": "Apollo 11", "additional_info": "Armstrong and Aldrin",
///         "wikipedia_link": "https://en.wikipedia.org/wiki/Apollo_11"}"#,
/// ).unwrap();
///
/// assert_eq!(record.chrono_key, 1969);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Display label for the event.
    #[serde(rename = "event")]
    pub label: String,

    /// Numeric ordering key (historical date, e.g. a year).
    #[serde(rename = "date", deserialize_with = "deserialize_chrono_key")]
    pub chrono_key: i64,

    /// Image resource for the card face.
    #[serde(rename = "image")]
    pub image_ref: String,

    /// Short description shown on the card.
    pub description: String,

    /// Longer text shown on the card back.
    #[serde(rename = "additional_info")]
    pub extra_info: String,

    /// External reference link (Wikipedia).
    #[serde(rename = "wikipedia_link")]
    pub reference_link: String,
}

impl EventRecord {
    /// Create a record with just a label and ordering key.
    ///
    /// The display-only fields are left empty. Mainly useful in tests.
    #[must_use]
    pub fn new(label: impl Into<String>, chrono_key: i64) -> Self {
        Self {
            label: label.into(),
            chrono_key,
            image_ref: String::new(),
            description: String::new(),
            extra_info: String::new(),
            reference_link: String::new(),
        }
    }
}

/// The feed stores dates as either an integer or a numeric string.
fn deserialize_chrono_key<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("date is not numeric: {s:?}"))
        }),
    }
}
