//! WASM bindings for the dashboard encoding layer.
//!
//! Exposes the canonical placement and selection logic from
//! `dashboard-leptos` to browser JavaScript, so a client-side rendering of
//! the radar cannot drift from what the static renderer produces. All
//! exports speak JSON strings at the boundary.

use wasm_bindgen::prelude::*;

// Re-export canonical types from dashboard-leptos
pub use dashboard_leptos::types::{DashboardData, RiskItem};

use dashboard_leptos::encode::radar;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Place risks on the radar.
///
/// # Arguments
/// * `json_risks` - JSON array of risk items
///
/// # Returns
/// JSON array of `{x, y, size_px, color}` points in input order, or an
/// error message
#[wasm_bindgen]
pub fn place_risks(json_risks: &str) -> Result<String, JsValue> {
    let risks: Vec<RiskItem> = serde_json::from_str(json_risks)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse risks: {}", e)))?;

    let points = radar::place_risks(&risks);

    serde_json::to_string(&points)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize points: {}", e)))
}

/// Next radar selection after clicking a point.
///
/// Clicking the selected id deselects; clicking any other id selects it.
#[wasm_bindgen]
pub fn selection_after_click(current: Option<String>, clicked: String) -> Option<String> {
    radar::selection_after_click(current.as_deref(), &clicked)
}

/// Render the complete dashboard HTML from a JSON dataset.
///
/// Same output as the native renderer, byte for byte.
#[wasm_bindgen]
pub fn render_dashboard_html(json_data: &str) -> Result<String, JsValue> {
    let data: DashboardData = serde_json::from_str(json_data)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse dataset: {}", e)))?;

    Ok(dashboard_leptos::render_dashboard(&data))
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("dashboard-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_risks_json_roundtrip() {
        let json = r#"[
            { "id": "compliance-1", "title": "Filing deadline",
              "category": "compliance", "severity": "critical" }
        ]"#;

        let out = place_risks(json).unwrap();
        let points: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(points.as_array().unwrap().len(), 1);
        assert_eq!(points[0]["size_px"], 16.0);
        assert_eq!(points[0]["color"], "#e74c3c");
        // compliance quadrant is top-left
        assert!(points[0]["x"].as_f64().unwrap() < 0.0);
        assert!(points[0]["y"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_selection_toggle() {
        assert_eq!(
            selection_after_click(None, "r1".into()),
            Some("r1".to_string())
        );
        assert_eq!(selection_after_click(Some("r1".into()), "r1".into()), None);
        assert_eq!(
            selection_after_click(Some("r1".into()), "r2".into()),
            Some("r2".to_string())
        );
    }

    #[test]
    fn test_render_from_json() {
        let html = render_dashboard_html("{}").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Operations Command Center"));
    }

    #[test]
    fn test_health_check() {
        assert!(health_check().contains("dashboard-wasm"));
    }
}

// Error paths build a JsValue, which only exists in a browser; run these
// under `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn rejects_bad_json() {
        assert!(place_risks("not json").is_err());
        assert!(render_dashboard_html("{ broken").is_err());
    }
}
