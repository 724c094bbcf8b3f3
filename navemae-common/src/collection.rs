//! Artist collection normalization
//!
//! The backend's artist listing has been observed in two shapes: a bare JSON
//! array, and an object carrying the array under `artists`. Both are real
//! inputs and both must keep working. Anything else normalizes to an empty
//! roster.
//!
//! The shape is decided on raw JSON and each record is decoded on its own,
//! so one bad record never costs the rest of the roster.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::artist::Artist;
use crate::Result;

/// Field holding the artist array in the wrapped response shape
pub const ARTISTS_FIELD: &str = "artists";

/// Raw result of an artist listing, as resolved by a data source
///
/// Only the outer shape is checked at this point; records stay raw JSON until
/// [`normalize_collection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtistCollectionResult {
    /// `[ {artist}, ... ]`
    Bare(Vec<Value>),
    /// `{ "artists": [ {artist}, ... ], ... }`; other keys are ignored
    Wrapped(Map<String, Value>),
    /// Scalars and `null`
    Unrecognized(Value),
}

impl ArtistCollectionResult {
    /// Wrap `artists` in the object shape
    pub fn wrapped(artists: Vec<Artist>) -> Self {
        let mut map = Map::new();
        map.insert(ARTISTS_FIELD.to_string(), Value::Array(to_values(artists)));
        ArtistCollectionResult::Wrapped(map)
    }
}

impl From<Vec<Artist>> for ArtistCollectionResult {
    fn from(artists: Vec<Artist>) -> Self {
        ArtistCollectionResult::Bare(to_values(artists))
    }
}

fn to_values(artists: Vec<Artist>) -> Vec<Value> {
    artists
        .into_iter()
        // Artist holds plain data only; serialization cannot fail
        .filter_map(|artist| serde_json::to_value(artist).ok())
        .collect()
}

/// Decode a single artist record
pub fn parse_artist(value: &Value) -> Result<Artist> {
    Ok(Artist::deserialize(value)?)
}

/// Collapse any listing shape into a single sequence of artists
///
/// - bare sequence: every decodable record, order preserved
/// - object with an `artists` array: every decodable record of that array
/// - object without `artists`, non-array `artists`, other JSON, or `None`: empty
///
/// Records that cannot be decoded (e.g. missing `id`) are skipped with a
/// warning.
pub fn normalize_collection(result: Option<&ArtistCollectionResult>) -> Vec<Artist> {
    match result {
        None => Vec::new(),
        Some(ArtistCollectionResult::Bare(records)) => decode_records(records),
        Some(ArtistCollectionResult::Wrapped(map)) => match map.get(ARTISTS_FIELD) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(records)) => decode_records(records),
            Some(other) => {
                warn!(
                    "Ignoring '{}' field of type {} in artist listing",
                    ARTISTS_FIELD,
                    json_kind(other)
                );
                Vec::new()
            }
        },
        Some(ArtistCollectionResult::Unrecognized(value)) => {
            warn!(
                "Unrecognized artist listing shape ({}), treating as empty",
                json_kind(value)
            );
            Vec::new()
        }
    }
}

fn decode_records(records: &[Value]) -> Vec<Artist> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match parse_artist(record) {
            Ok(artist) => Some(artist),
            Err(e) => {
                warn!("Skipping artist record #{}: {}", index, e);
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
