//! Display helpers for artist cards
//!
//! Missing optional fields render as a neutral "N/A" instead of failing.

use crate::artist::{Artist, StatusKind};

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// Visual tone of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Neutral,
}

impl StatusTone {
    /// CSS class suffix for the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Positive => "badge-positive",
            StatusTone::Neutral => "badge-neutral",
        }
    }
}

/// Badge label: "Ativo" for active artists, "Inativo" for everything else
pub fn status_label(artist: &Artist) -> &'static str {
    match artist.status_kind() {
        StatusKind::Active => "Ativo",
        StatusKind::Inactive | StatusKind::Other => "Inativo",
    }
}

pub fn status_tone(artist: &Artist) -> StatusTone {
    match artist.status_kind() {
        StatusKind::Active => StatusTone::Positive,
        StatusKind::Inactive | StatusKind::Other => StatusTone::Neutral,
    }
}

/// The value itself, or "N/A" when absent or blank
pub fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Specialties joined by ", "; "N/A" when missing or empty
pub fn specialties_display(artist: &Artist) -> String {
    match artist.specialties.as_deref() {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Rating with one decimal; "N/A" when missing
pub fn rating_display(artist: &Artist) -> String {
    match artist.rating {
        Some(rating) if rating.is_finite() => format!("{:.1}", rating),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::ArtistId;

    fn artist() -> Artist {
        Artist::new(ArtistId::Number(1), "Ana", "Silva")
    }

    #[test]
    fn test_status_label_and_tone() {
        let active = artist().with_status("active");
        assert_eq!(status_label(&active), "Ativo");
        assert_eq!(status_tone(&active), StatusTone::Positive);

        let inactive = artist().with_status("inactive");
        assert_eq!(status_label(&inactive), "Inativo");
        assert_eq!(status_tone(&inactive), StatusTone::Neutral);

        let unknown = artist();
        assert_eq!(status_label(&unknown), "Inativo");
        assert_eq!(status_tone(&unknown).css_class(), "badge-neutral");
    }

    #[test]
    fn test_specialties_display() {
        let mut a = artist();
        assert_eq!(specialties_display(&a), NOT_AVAILABLE);

        a.specialties = Some(Vec::new());
        assert_eq!(specialties_display(&a), NOT_AVAILABLE);

        a.specialties = Some(vec!["Realismo".to_string(), "Aquarela".to_string()]);
        assert_eq!(specialties_display(&a), "Realismo, Aquarela");
    }

    #[test]
    fn test_rating_display_rounds_to_one_decimal() {
        let mut a = artist();
        assert_eq!(rating_display(&a), NOT_AVAILABLE);

        a.rating = Some(4.75);
        assert_eq!(rating_display(&a), "4.8");

        a.rating = Some(0.0);
        assert_eq!(rating_display(&a), "0.0");
    }

    #[test]
    fn test_display_or_na() {
        assert_eq!(display_or_na(Some("Blackwork")), "Blackwork");
        assert_eq!(display_or_na(Some("  ")), NOT_AVAILABLE);
        assert_eq!(display_or_na(None), NOT_AVAILABLE);
    }
}
