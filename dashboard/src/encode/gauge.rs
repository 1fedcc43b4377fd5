//! Circular gauge arc math for the firm health score.
//!
//! The gauge is an SVG circle whose visible arc length encodes a score in
//! [0, 100] through the stroke-dasharray / stroke-dashoffset mechanism:
//! the dash array equals the full circumference and the offset hides the
//! part of the circle the score has not "earned". A score of 100 leaves
//! offset 0 (full ring), a score of 0 leaves the full circumference
//! hidden.

/// Square viewBox side of the rendered gauge, in px.
///
/// The ring is centered, so `GAUGE_RADIUS + GAUGE_STROKE / 2` must stay
/// inside `GAUGE_SIZE / 2`.
pub const GAUGE_SIZE: u32 = 180;

/// Ring radius, in px.
pub const GAUGE_RADIUS: f64 = 80.0;

/// Ring stroke width, in px.
pub const GAUGE_STROKE: f64 = 12.0;

/// Sweep duration of the arc entry animation.
pub const GAUGE_SWEEP_MS: u32 = 1500;

/// Scores at or above this are the green tier.
pub const SCORE_GREEN_FLOOR: f64 = 80.0;

/// Scores at or above this (but below green) are the amber tier.
pub const SCORE_AMBER_FLOOR: f64 = 60.0;

/// Below this, the panel shows an attention advisory. Deliberately
/// independent of the color tiers: a 65 is amber but still flagged, a 75
/// is amber and not flagged.
pub const ATTENTION_FLOOR: f64 = 70.0;

/// Color tier of a health score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    /// 80 and up
    Green,
    /// 60 to 79
    Amber,
    /// Below 60
    Red,
}

impl ScoreTier {
    /// Theme color hex for the arc stroke.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::Green => "#27ae60",
            ScoreTier::Amber => "#e67e22",
            ScoreTier::Red => "#e74c3c",
        }
    }
}

/// Clamp a raw score into the gauge's domain.
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Full circumference of the gauge ring; doubles as the dasharray value.
#[inline]
pub fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * GAUGE_RADIUS
}

/// Dashoffset hiding the un-earned part of the ring.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::encode::gauge::{dash_offset, circumference};
///
/// assert_eq!(dash_offset(100.0), 0.0);
/// assert_eq!(dash_offset(0.0), circumference());
/// ```
#[inline]
pub fn dash_offset(score: f64) -> f64 {
    circumference() * (1.0 - clamp_score(score) / 100.0)
}

/// Tier of a score against the 80 / 60 floors.
pub fn score_tier(score: f64) -> ScoreTier {
    let score = clamp_score(score);
    if score >= SCORE_GREEN_FLOOR {
        ScoreTier::Green
    } else if score >= SCORE_AMBER_FLOOR {
        ScoreTier::Amber
    } else {
        ScoreTier::Red
    }
}

/// Whether the panel should show the attention advisory.
#[inline]
pub fn needs_attention(score: f64) -> bool {
    clamp_score(score) < ATTENTION_FLOOR
}

/// One-word verdict printed under the score.
pub fn status_text(score: f64) -> &'static str {
    match score_tier(score) {
        ScoreTier::Green => "Excellent",
        ScoreTier::Amber => "Stable",
        ScoreTier::Red => "Critical",
    }
}
