//! Gallery layout modes and reveal timing.

use serde::Deserialize;

/// Delay step between grid cards revealing on scroll (seconds).
pub const GRID_REVEAL_STEP_SECS: f64 = 0.08;

/// Delay step between home-page preview cards (seconds).
pub const PREVIEW_REVEAL_STEP_SECS: f64 = 0.15;

/// How the gallery arranges its cards. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    /// Flat responsive grid.
    Grid,
    /// Alternating left/right "floating garden" cards driven by scroll.
    #[default]
    Staircase,
}

impl GalleryLayout {
    /// Parse a query value; anything unrecognised falls back to the default.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("grid") => Self::Grid,
            Some(v) if v.eq_ignore_ascii_case("staircase") || v.eq_ignore_ascii_case("floating") => {
                Self::Staircase
            }
            _ => Self::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Staircase => "staircase",
        }
    }

    /// Label shown on the layout toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Staircase => "Floating",
        }
    }

    pub const ALL: [GalleryLayout; 2] = [GalleryLayout::Staircase, GalleryLayout::Grid];
}

/// Reveal delay for the card at `index`, formatted for a CSS custom property.
pub fn reveal_delay(index: usize, step_secs: f64) -> String {
    format!("{:.2}s", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_layout_param() {
        assert_eq!(GalleryLayout::from_param(Some("grid")), GalleryLayout::Grid);
        assert_eq!(GalleryLayout::from_param(Some("GRID")), GalleryLayout::Grid);
        assert_eq!(GalleryLayout::from_param(Some("floating")), GalleryLayout::Staircase);
        assert_eq!(GalleryLayout::from_param(Some("mosaic")), GalleryLayout::Staircase);
        assert_eq!(GalleryLayout::from_param(None), GalleryLayout::Staircase);
    }

    #[test]
    fn reveal_delays() {
        assert_eq!(reveal_delay(0, GRID_REVEAL_STEP_SECS), "0.00s");
        assert_eq!(reveal_delay(3, GRID_REVEAL_STEP_SECS), "0.24s");
        assert_eq!(reveal_delay(2, PREVIEW_REVEAL_STEP_SECS), "0.30s");
    }
}
