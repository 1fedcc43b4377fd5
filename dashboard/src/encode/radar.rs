//! Risk radar placement and selection.
//!
//! Each risk occupies the quadrant of its category. The anchor is the
//! quadrant center, and a per-item jitter spreads co-quadrant points so
//! they don't stack. The jitter is a pure function of the risk id (first
//! bytes of its SHA-256 digest), so a given dataset always renders the
//! same picture and two renders diff cleanly.
//!
//! Coordinates are pixel offsets from the radar center in CSS space:
//! positive x is right, positive y is **down**.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::{RiskCategory, RiskItem, RiskSeverity};

/// Distance from the radar center to each quadrant anchor, in px.
pub const ANCHOR_OFFSET: f64 = 50.0;

/// Total jitter span per axis, in px. Points land within half the span
/// on either side of their anchor.
pub const JITTER_SPAN: f64 = 20.0;

/// Quadrant anchor for a category, as `(x, y)` offsets from center.
///
/// Compliance top-left, Market top-right, Operations bottom-left,
/// Legal bottom-right.
#[inline]
pub fn quadrant_anchor(category: RiskCategory) -> (f64, f64) {
    match category {
        RiskCategory::Compliance => (-ANCHOR_OFFSET, -ANCHOR_OFFSET),
        RiskCategory::Market => (ANCHOR_OFFSET, -ANCHOR_OFFSET),
        RiskCategory::Operations => (-ANCHOR_OFFSET, ANCHOR_OFFSET),
        RiskCategory::Legal => (ANCHOR_OFFSET, ANCHOR_OFFSET),
    }
}

/// Point diameter for a severity, in px.
#[inline]
pub fn severity_size_px(severity: RiskSeverity) -> f64 {
    match severity {
        RiskSeverity::Critical => 16.0,
        RiskSeverity::Moderate => 12.0,
        RiskSeverity::Low => 8.0,
    }
}

/// Point color for a severity.
#[inline]
pub fn severity_color(severity: RiskSeverity) -> &'static str {
    match severity {
        RiskSeverity::Critical => "#e74c3c",
        RiskSeverity::Moderate => "#e67e22",
        RiskSeverity::Low => "#27ae60",
    }
}

#[inline]
fn unit_from_bytes(bytes: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    // map to [0, 1)
    u64::from_be_bytes(raw) as f64 / (u64::MAX as f64 + 1.0)
}

/// Deterministic jitter for a risk id, as `(dx, dy)` within
/// ±`JITTER_SPAN / 2` per axis.
///
/// Derived from the SHA-256 digest of the id: the first eight bytes feed
/// the x offset, the next eight the y offset. Same id, same offsets, on
/// every platform.
pub fn jitter_for(id: &str) -> (f64, f64) {
    let digest = Sha256::digest(id.as_bytes());
    let dx = unit_from_bytes(&digest[0..8]) * JITTER_SPAN - JITTER_SPAN / 2.0;
    let dy = unit_from_bytes(&digest[8..16]) * JITTER_SPAN - JITTER_SPAN / 2.0;
    (dx, dy)
}

/// Fully resolved visual encoding of one risk on the radar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskPoint {
    /// Offset from radar center, px, positive right
    pub x: f64,
    /// Offset from radar center, px, positive down
    pub y: f64,
    /// Point diameter, px
    pub size_px: f64,
    /// Fill color hex
    pub color: &'static str,
}

/// Place one risk: quadrant anchor plus deterministic jitter, sized and
/// colored by severity.
pub fn place_risk(risk: &RiskItem) -> RiskPoint {
    let (ax, ay) = quadrant_anchor(risk.category);
    let (dx, dy) = jitter_for(&risk.id);
    RiskPoint {
        x: ax + dx,
        y: ay + dy,
        size_px: severity_size_px(risk.severity),
        color: severity_color(risk.severity),
    }
}

/// Place every risk in dataset order.
pub fn place_risks(risks: &[RiskItem]) -> Vec<RiskPoint> {
    risks.iter().map(place_risk).collect()
}

/// Next selection state after clicking a point.
///
/// Clicking the selected risk deselects it; clicking any other risk
/// selects that one.
pub fn selection_after_click(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

/// Which risk, if any, has its detail panel open.
///
/// The selection is explicit state with two transitions (click and
/// clear), so the detail panel can never show a risk that is not
/// selected and never half-close.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadarSelection {
    selected: Option<String>,
}

impl RadarSelection {
    /// Fresh state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on the point with `id`.
    pub fn click(&mut self, id: &str) {
        self.selected = selection_after_click(self.selected.as_deref(), id);
    }

    /// Close the detail panel.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Id of the selected risk, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the point with `id` is the selected one.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(id: &str, category: RiskCategory, severity: RiskSeverity) -> RiskItem {
        RiskItem {
            id: id.into(),
            title: id.into(),
            category,
            severity,
            ..Default::default()
        }
    }

    #[test]
    fn test_quadrant_sign_pattern() {
        let (x, y) = quadrant_anchor(RiskCategory::Compliance);
        assert!(x < 0.0 && y < 0.0);
        let (x, y) = quadrant_anchor(RiskCategory::Market);
        assert!(x > 0.0 && y < 0.0);
        let (x, y) = quadrant_anchor(RiskCategory::Operations);
        assert!(x < 0.0 && y > 0.0);
        let (x, y) = quadrant_anchor(RiskCategory::Legal);
        assert!(x > 0.0 && y > 0.0);
    }

    #[test]
    fn test_jitter_is_deterministic() {
        assert_eq!(jitter_for("risk-1"), jitter_for("risk-1"));
        assert_eq!(jitter_for(""), jitter_for(""));
    }

    #[test]
    fn test_jitter_stays_in_span() {
        for id in ["risk-1", "risk-2", "a", "some-longer-identifier", ""] {
            let (dx, dy) = jitter_for(id);
            assert!(dx.abs() <= JITTER_SPAN / 2.0, "dx out of span for {id:?}");
            assert!(dy.abs() <= JITTER_SPAN / 2.0, "dy out of span for {id:?}");
        }
    }

    #[test]
    fn test_distinct_ids_spread() {
        assert_ne!(jitter_for("risk-1"), jitter_for("risk-2"));
    }

    #[test]
    fn test_placed_point_stays_in_quadrant() {
        // anchor 50 with jitter at most 10 can never cross an axis
        let p = place_risk(&risk("r1", RiskCategory::Compliance, RiskSeverity::Low));
        assert!(p.x < 0.0 && p.y < 0.0);
        let p = place_risk(&risk("r2", RiskCategory::Legal, RiskSeverity::Low));
        assert!(p.x > 0.0 && p.y > 0.0);
    }

    #[test]
    fn test_severity_encoding() {
        let p = place_risk(&risk("r", RiskCategory::Market, RiskSeverity::Critical));
        assert_eq!(p.size_px, 16.0);
        assert_eq!(p.color, "#e74c3c");
        let p = place_risk(&risk("r", RiskCategory::Market, RiskSeverity::Moderate));
        assert_eq!(p.size_px, 12.0);
        assert_eq!(p.color, "#e67e22");
        let p = place_risk(&risk("r", RiskCategory::Market, RiskSeverity::Low));
        assert_eq!(p.size_px, 8.0);
        assert_eq!(p.color, "#27ae60");
    }

    #[test]
    fn test_place_risks_preserves_order() {
        let risks = vec![
            risk("a", RiskCategory::Compliance, RiskSeverity::Critical),
            risk("b", RiskCategory::Legal, RiskSeverity::Low),
        ];
        let points = place_risks(&risks);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].size_px, 16.0);
        assert_eq!(points[1].size_px, 8.0);
    }

    #[test]
    fn test_selection_toggles() {
        let mut sel = RadarSelection::new();
        assert_eq!(sel.selected(), None);

        sel.click("r1");
        assert!(sel.is_selected("r1"));

        // clicking the selected point closes the panel
        sel.click("r1");
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_selection_switches_between_points() {
        let mut sel = RadarSelection::new();
        sel.click("r1");
        sel.click("r2");
        assert!(sel.is_selected("r2"));
        assert!(!sel.is_selected("r1"));
    }

    #[test]
    fn test_selection_clear() {
        let mut sel = RadarSelection::new();
        sel.click("r1");
        sel.clear();
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_selection_after_click_pure() {
        assert_eq!(selection_after_click(None, "a"), Some("a".to_string()));
        assert_eq!(selection_after_click(Some("a"), "a"), None);
        assert_eq!(selection_after_click(Some("a"), "b"), Some("b".to_string()));
    }
}
