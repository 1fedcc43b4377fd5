//! Sparkline geometry for headline metric cards.
//!
//! A sparkline is a tiny inline SVG polyline in a fixed 100x40 viewBox.
//! Values are scaled against their own maximum so the series peak always
//! touches the top of the drawing band; the band leaves a little headroom
//! so the stroke cap is not clipped at the peak.

/// Fixed viewBox width of every sparkline.
pub const SPARK_VIEW_W: f64 = 100.0;

/// Fixed viewBox height of every sparkline.
pub const SPARK_VIEW_H: f64 = 40.0;

/// Vertical band the series occupies. The peak value draws at
/// `SPARK_VIEW_H - SPARK_AMPLITUDE`.
pub const SPARK_AMPLITUDE: f64 = 35.0;

#[inline]
fn y_for(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return SPARK_VIEW_H;
    }
    SPARK_VIEW_H - (value.max(0.0) / max) * SPARK_AMPLITUDE
}

/// SVG `points` attribute for the sparkline polyline.
///
/// Empty input yields an empty string (the caller skips the element). A
/// single sample still produces a visible flat segment across the full
/// width. A non-positive maximum draws the whole series on the baseline.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::encode::spark::sparkline_points;
///
/// // peak touches the top of the band
/// assert!(sparkline_points(&[1.0, 2.0]).ends_with("100.0,5.0"));
/// assert_eq!(sparkline_points(&[]), "");
/// ```
pub fn sparkline_points(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    if values.len() == 1 {
        let y = y_for(values[0], max);
        return format!("0.0,{y:.1} {SPARK_VIEW_W:.1},{y:.1}");
    }
    let last = (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 / last * SPARK_VIEW_W;
            format!("{:.1},{:.1}", x, y_for(*v, max))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `points` attribute for the filled area under the sparkline.
///
/// The polyline path closed down to the baseline corners, for the soft
/// fill rendered beneath the stroke.
pub fn sparkline_area(values: &[f64]) -> String {
    let line = sparkline_points(values);
    if line.is_empty() {
        return line;
    }
    format!("{line} {SPARK_VIEW_W:.1},{SPARK_VIEW_H:.1} 0.0,{SPARK_VIEW_H:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_is_empty() {
        assert_eq!(sparkline_points(&[]), "");
        assert_eq!(sparkline_area(&[]), "");
    }

    #[test]
    fn test_peak_touches_top_of_band() {
        let points = sparkline_points(&[65.0, 92.0]);
        // peak y = 40 - 35 = 5
        assert!(points.ends_with("100.0,5.0"), "got {points}");
    }

    #[test]
    fn test_x_spans_full_width() {
        let points = sparkline_points(&[1.0, 2.0, 3.0]);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("0.0,"));
        assert!(coords[1].starts_with("50.0,"));
        assert!(coords[2].starts_with("100.0,"));
    }

    #[test]
    fn test_single_sample_is_flat_full_width() {
        assert_eq!(sparkline_points(&[10.0]), "0.0,5.0 100.0,5.0");
    }

    #[test]
    fn test_all_zero_series_sits_on_baseline() {
        let points = sparkline_points(&[0.0, 0.0, 0.0]);
        for coord in points.split(' ') {
            assert!(coord.ends_with(",40.0"), "got {coord}");
        }
    }

    #[test]
    fn test_negative_values_clamp_to_baseline() {
        let points = sparkline_points(&[-5.0, 10.0]);
        assert!(points.starts_with("0.0,40.0"), "got {points}");
    }

    #[test]
    fn test_area_closes_to_baseline_corners() {
        let area = sparkline_area(&[1.0, 2.0]);
        assert!(area.ends_with("100.0,40.0 0.0,40.0"), "got {area}");
        let line = sparkline_points(&[1.0, 2.0]);
        assert!(area.starts_with(&line));
    }

    #[test]
    fn test_higher_value_draws_higher() {
        // SVG y grows downward
        let points = sparkline_points(&[10.0, 90.0]);
        let ys: Vec<f64> = points
            .split(' ')
            .map(|c| c.split(',').nth(1).unwrap().parse().unwrap())
            .collect();
        assert!(ys[1] < ys[0]);
    }
}
