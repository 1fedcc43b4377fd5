//! Progress bar encoding and fill transition plans.
//!
//! Turns completion counts and percentages into clamped fill fractions,
//! and describes the entry animation of each bar as data: a
//! [`TransitionPlan`] names the target width, duration, delay and easing,
//! and the renderer emits it as CSS custom properties consumed by a
//! stylesheet keyframe. No imperative animation code exists anywhere;
//! reordering or restyling the animation means changing a plan, not a
//! script.

/// How long one bar takes to grow from zero to its target width.
pub const FILL_DURATION_MS: u32 = 1000;

/// Delay step between successive bars in a list.
pub const STAGGER_STEP_MS: u32 = 100;

/// Easing curve of a fill transition, named rather than free-form so the
/// stylesheet and the plan cannot drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, settled finish; the default for fills
    #[default]
    EaseOut,
    /// Symmetric acceleration
    EaseInOut,
    /// Constant rate
    Linear,
}

impl Easing {
    /// CSS timing-function keyword.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
        }
    }
}

/// Declarative description of one element's entry transition.
///
/// The renderer serializes a plan into inline CSS custom properties
/// (`--fill-target`, `--fill-duration`, ...) that the stylesheet's
/// keyframes read. The plan is the single source of truth for what the
/// animation does.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::encode::progress::{bar_plan, FILL_DURATION_MS};
///
/// let plan = bar_plan(75.0, 2);
/// assert_eq!(plan.target_pct, 75.0);
/// assert_eq!(plan.duration_ms, FILL_DURATION_MS);
/// assert_eq!(plan.delay_ms, 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionPlan {
    /// Final width as a percentage of the track, already clamped to [0, 100]
    pub target_pct: f64,
    /// How long the fill runs
    pub duration_ms: u32,
    /// Wait before the fill starts
    pub delay_ms: u32,
    /// Timing curve
    pub easing: Easing,
}

impl TransitionPlan {
    /// Inline-style fragment carrying the plan as CSS custom properties.
    pub fn css_vars(&self) -> String {
        format!(
            "--fill-target:{:.1}%;--fill-duration:{}ms;--fill-delay:{}ms;--fill-ease:{}",
            self.target_pct,
            self.duration_ms,
            self.delay_ms,
            self.easing.css()
        )
    }
}

/// Fraction of goals completed, clamped to [0, 1].
///
/// A zero `total` yields 0.0: an empty goal list renders as an empty bar,
/// not a full one and not a NaN-width element.
#[inline]
pub fn fill_fraction(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(completed) / f64::from(total)).clamp(0.0, 1.0)
}

/// Percentage form of [`fill_fraction`].
#[inline]
pub fn fill_percent(completed: u32, total: u32) -> f64 {
    fill_fraction(completed, total) * 100.0
}

/// Clamp an already-percent progress value into [0, 100].
///
/// Priority progress arrives as a percentage; out-of-range values are
/// treated as data noise and clamped rather than rejected.
#[inline]
pub fn clamp_percent(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

/// Entry delay for the element at `index` in a staggered list.
#[inline]
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

/// Build the fill plan for the bar at `index` in a staggered list.
pub fn bar_plan(target_pct: f64, index: usize) -> TransitionPlan {
    TransitionPlan {
        target_pct: clamp_percent(target_pct),
        duration_ms: FILL_DURATION_MS,
        delay_ms: stagger_delay_ms(index),
        easing: Easing::EaseOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_fraction_basic() {
        assert_eq!(fill_fraction(8, 8), 1.0);
        assert_eq!(fill_fraction(3, 5), 0.6);
        assert_eq!(fill_fraction(0, 5), 0.0);
    }

    #[test]
    fn test_fill_fraction_zero_total() {
        assert_eq!(fill_fraction(0, 0), 0.0);
        assert_eq!(fill_fraction(7, 0), 0.0);
    }

    #[test]
    fn test_fill_fraction_clamps_over_completion() {
        // completed > total is noise, not a 120% wide bar
        assert_eq!(fill_fraction(6, 5), 1.0);
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(6, 8), 75.0);
        assert_eq!(fill_percent(0, 0), 0.0);
    }

    #[test]
    fn test_clamp_percent_bounds() {
        assert_eq!(clamp_percent(75.0), 75.0);
        assert_eq!(clamp_percent(-10.0), 0.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }

    #[test]
    fn test_stagger_steps_by_100ms() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(4), 400);
    }

    #[test]
    fn test_bar_plan_defaults() {
        let plan = bar_plan(88.0, 1);
        assert_eq!(plan.target_pct, 88.0);
        assert_eq!(plan.duration_ms, 1000);
        assert_eq!(plan.delay_ms, 100);
        assert_eq!(plan.easing, Easing::EaseOut);
    }

    #[test]
    fn test_bar_plan_clamps_target() {
        assert_eq!(bar_plan(130.0, 0).target_pct, 100.0);
        assert_eq!(bar_plan(-5.0, 0).target_pct, 0.0);
    }

    #[test]
    fn test_css_vars_format() {
        let vars = bar_plan(75.0, 2).css_vars();
        assert_eq!(
            vars,
            "--fill-target:75.0%;--fill-duration:1000ms;--fill-delay:200ms;--fill-ease:ease-out"
        );
    }
}
