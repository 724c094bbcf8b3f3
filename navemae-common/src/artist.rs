//! Artist records as served by the backend
//!
//! Artists are owned by the backend. Everything here is read-only: the roster
//! only ever deserializes, filters and displays them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status value the backend uses for working artists
pub const STATUS_ACTIVE: &str = "active";

/// Status value the backend uses for artists who left or are on leave
pub const STATUS_INACTIVE: &str = "inactive";

/// Artist identifier
///
/// The backend has shipped both numeric and string ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtistId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistId::Number(n) => write!(f, "{}", n),
            ArtistId::Text(s) => f.write_str(s),
        }
    }
}

/// Coarse status classification used for counting and badge styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Active,
    Inactive,
    /// Missing or unrecognized status string
    Other,
}

/// Tattoo studio staff record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Raw status string; compared verbatim against the status filter
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Names sent as `null` read as empty strings
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Artist {
    /// Create an artist with only the identifying fields set
    pub fn new(id: ArtistId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            status: None,
            specialties: None,
            phone: None,
            rating: None,
            style: None,
        }
    }

    /// Builder-style status setter
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Builder-style email setter
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Display name: first and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the raw status string equals `status` exactly
    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }

    pub fn status_kind(&self) -> StatusKind {
        match self.status.as_deref() {
            Some(STATUS_ACTIVE) => StatusKind::Active,
            Some(STATUS_INACTIVE) => StatusKind::Inactive,
            _ => StatusKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_name_joins_with_space() {
        let artist = Artist::new(ArtistId::Number(1), "Ana", "Silva");
        assert_eq!(artist.full_name(), "Ana Silva");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let artist: Artist = serde_json::from_value(json!({
            "id": "a-1",
            "first_name": "Ana",
            "last_name": "Silva"
        }))
        .unwrap();

        assert_eq!(artist.id, ArtistId::Text("a-1".to_string()));
        assert!(artist.email.is_none());
        assert!(artist.rating.is_none());
        assert_eq!(artist.status_kind(), StatusKind::Other);
    }

    #[test]
    fn test_deserialize_full_record_ignores_unknown_fields() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 7,
            "first_name": "Bruno",
            "last_name": "Costa",
            "email": "bruno@example.com",
            "status": "inactive",
            "specialties": ["Blackwork", "Fine line"],
            "phone": "+55 11 99999-0000",
            "rating": 4.75,
            "style": "Old school",
            "studio_id": "studio1"
        }))
        .unwrap();

        assert_eq!(artist.id.to_string(), "7");
        assert_eq!(artist.status_kind(), StatusKind::Inactive);
        assert_eq!(artist.specialties.as_ref().map(Vec::len), Some(2));
        assert_eq!(artist.rating, Some(4.75));
    }

    #[test]
    fn test_null_names_read_as_empty() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 2,
            "first_name": "Bruno",
            "last_name": null
        }))
        .unwrap();

        assert_eq!(artist.last_name, "");
        assert_eq!(artist.full_name(), "Bruno ");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_value::<Artist>(json!({"first_name": "Ana"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_kind_is_case_sensitive() {
        let artist = Artist::new(ArtistId::Number(1), "Ana", "Silva").with_status("Active");
        assert_eq!(artist.status_kind(), StatusKind::Other);
        assert!(!artist.has_status(STATUS_ACTIVE));
    }
}
