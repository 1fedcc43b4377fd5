//! Budget and trend status classification.
//!
//! Maps raw budget consumption to a three-tier status:
//!
//! - **Red**: spend above budget (> 100%), or an unusable denominator
//! - **Yellow**: inside budget but past the warning line (> 90%)
//! - **Green**: comfortably inside budget
//!
//! Classification uses the raw ratio, not the rounded display figure: a
//! 100.4% spend prints as "100%" but is still an overrun and tiers Red.

use crate::types::{BudgetUsage, StatusTier};

/// Spend strictly above this percentage is an overrun (Red).
pub const BUDGET_OVERRUN_PCT: f64 = 100.0;

/// Spend strictly above this percentage is a warning (Yellow).
pub const BUDGET_WARN_PCT: f64 = 90.0;

/// Rounded integer percentage of budget consumed.
///
/// Returns 0 when the denominator is zero or negative (no meaningful
/// percentage exists), and clamps negative spend to 0.
#[inline]
pub fn budget_percent(budget: &BudgetUsage) -> u32 {
    if budget.total <= 0.0 {
        return 0;
    }
    let pct = (budget.used / budget.total * 100.0).round();
    pct.max(0.0) as u32
}

/// Classify budget consumption into a status tier.
///
/// A zero or negative `total` is classified Red: a department with spend
/// but no budget is an overrun by definition, and a silent Green would
/// hide a data error.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::encode::status::classify_budget;
/// use dashboard_leptos::types::{BudgetUsage, StatusTier};
///
/// let b = BudgetUsage { used: 2_208_000.0, total: 2_400_000.0 };
/// assert_eq!(classify_budget(&b), StatusTier::Yellow); // 92%
/// ```
pub fn classify_budget(budget: &BudgetUsage) -> StatusTier {
    if budget.total <= 0.0 {
        return StatusTier::Red;
    }
    let pct = budget.used / budget.total * 100.0;
    if pct > BUDGET_OVERRUN_PCT {
        StatusTier::Red
    } else if pct > BUDGET_WARN_PCT {
        StatusTier::Yellow
    } else {
        StatusTier::Green
    }
}

/// Trend tier of a signed period-over-period change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendTier {
    /// Positive change
    Success,
    /// Negative change
    Danger,
    /// Zero or absent change
    Neutral,
}

impl TrendTier {
    /// CSS class suffix shared with the health trend pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            TrendTier::Success => "trend-up",
            TrendTier::Danger => "trend-down",
            TrendTier::Neutral => "trend-flat",
        }
    }

    /// Direction glyph shown ahead of the figure.
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendTier::Success => "\u{25B2}",
            TrendTier::Danger => "\u{25BC}",
            TrendTier::Neutral => "\u{2022}",
        }
    }
}

/// Classify a signed change. `None` (no prior period) is Neutral, as is
/// an exact zero; NaN falls through both comparisons and lands Neutral.
pub fn classify_change(delta: Option<f64>) -> TrendTier {
    match delta {
        Some(d) if d > 0.0 => TrendTier::Success,
        Some(d) if d < 0.0 => TrendTier::Danger,
        _ => TrendTier::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(used: f64, total: f64) -> BudgetUsage {
        BudgetUsage { used, total }
    }

    #[test]
    fn test_green_when_comfortably_inside() {
        assert_eq!(classify_budget(&budget(450_000.0, 500_000.0)), StatusTier::Green); // 90%
        assert_eq!(classify_budget(&budget(0.0, 500_000.0)), StatusTier::Green);
        assert_eq!(classify_budget(&budget(870_000.0, 1_000_000.0)), StatusTier::Green); // 87%
    }

    #[test]
    fn test_yellow_past_warning_line() {
        // 92% - inside budget, but hot
        assert_eq!(
            classify_budget(&budget(2_208_000.0, 2_400_000.0)),
            StatusTier::Yellow
        );
        assert_eq!(classify_budget(&budget(91.0, 100.0)), StatusTier::Yellow);
        assert_eq!(classify_budget(&budget(100.0, 100.0)), StatusTier::Yellow);
    }

    #[test]
    fn test_red_on_overrun() {
        // 110% - IT blew through its budget
        assert_eq!(
            classify_budget(&budget(1_650_000.0, 1_500_000.0)),
            StatusTier::Red
        );
        assert_eq!(classify_budget(&budget(101.0, 100.0)), StatusTier::Red);
    }

    #[test]
    fn test_exact_boundary_is_not_overrun() {
        // exactly 100% is not > 100
        assert_eq!(classify_budget(&budget(100.0, 100.0)), StatusTier::Yellow);
        // fractional overrun tiers Red even though it displays as "100%"
        assert_eq!(classify_budget(&budget(100.4, 100.0)), StatusTier::Red);
        assert_eq!(budget_percent(&budget(100.4, 100.0)), 100);
    }

    #[test]
    fn test_exact_warning_boundary_is_green() {
        // exactly 90% is not > 90
        assert_eq!(classify_budget(&budget(90.0, 100.0)), StatusTier::Green);
        // any fraction past the line is Yellow, rounded display or not
        assert_eq!(classify_budget(&budget(90.4, 100.0)), StatusTier::Yellow);
    }

    #[test]
    fn test_zero_total_is_red_sentinel() {
        assert_eq!(classify_budget(&budget(1_000_000.0, 0.0)), StatusTier::Red);
        assert_eq!(classify_budget(&budget(0.0, 0.0)), StatusTier::Red);
        assert_eq!(classify_budget(&budget(5.0, -1.0)), StatusTier::Red);
    }

    #[test]
    fn test_budget_percent_rounds() {
        assert_eq!(budget_percent(&budget(2_208_000.0, 2_400_000.0)), 92);
        assert_eq!(budget_percent(&budget(1_650_000.0, 1_500_000.0)), 110);
        assert_eq!(budget_percent(&budget(1.0, 3.0)), 33);
        assert_eq!(budget_percent(&budget(2.0, 3.0)), 67);
    }

    #[test]
    fn test_budget_percent_degenerate_inputs() {
        assert_eq!(budget_percent(&budget(10.0, 0.0)), 0);
        assert_eq!(budget_percent(&budget(-50.0, 100.0)), 0);
    }

    #[test]
    fn test_classify_change() {
        assert_eq!(classify_change(Some(12.5)), TrendTier::Success);
        assert_eq!(classify_change(Some(-3.2)), TrendTier::Danger);
        assert_eq!(classify_change(Some(0.0)), TrendTier::Neutral);
        assert_eq!(classify_change(None), TrendTier::Neutral);
        assert_eq!(classify_change(Some(f64::NAN)), TrendTier::Neutral);
    }

    #[test]
    fn test_trend_tier_presentation() {
        assert_eq!(TrendTier::Success.css_class(), "trend-up");
        assert_eq!(TrendTier::Danger.css_class(), "trend-down");
        assert_eq!(TrendTier::Neutral.arrow(), "\u{2022}");
    }
}
