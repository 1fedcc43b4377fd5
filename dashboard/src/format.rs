//! Display formatting for card figures and meter labels.

#[inline]
fn trim_trailing_zero(mut s: String) -> String {
    if s.ends_with(".0") {
        s.truncate(s.len() - 2);
    }
    s
}

/// Compact USD notation: `$2.2M`, `$450K`, `$2.3B`.
///
/// One fractional digit at most, with a bare `.0` dropped, so figures read
/// the way a status deck prints them.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::format::compact_currency;
///
/// assert_eq!(compact_currency(2_208_000.0), "$2.2M");
/// assert_eq!(compact_currency(450_000.0), "$450K");
/// ```
pub fn compact_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let (value, suffix) = if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };
    let digits = trim_trailing_zero(format!("{value:.1}"));
    format!("{sign}${digits}{suffix}")
}

/// Signed percentage for trend badges: positive values gain a leading `+`.
pub fn signed_percent(change: f64) -> String {
    let digits = trim_trailing_zero(format!("{:.1}", change.abs()));
    if change > 0.0 {
        format!("+{digits}%")
    } else if change < 0.0 {
        format!("-{digits}%")
    } else {
        format!("{digits}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_currency_scales() {
        assert_eq!(compact_currency(2_300_000_000.0), "$2.3B");
        assert_eq!(compact_currency(2_208_000.0), "$2.2M");
        assert_eq!(compact_currency(1_500_000.0), "$1.5M");
        assert_eq!(compact_currency(870_000.0), "$870K");
        assert_eq!(compact_currency(950.0), "$950");
    }

    #[test]
    fn test_compact_currency_drops_bare_point_zero() {
        assert_eq!(compact_currency(1_000_000.0), "$1M");
        assert_eq!(compact_currency(450_000.0), "$450K");
    }

    #[test]
    fn test_compact_currency_negative() {
        assert_eq!(compact_currency(-1_640_000.0), "-$1.6M");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(5.2), "+5.2%");
        assert_eq!(signed_percent(2.0), "+2%");
        assert_eq!(signed_percent(-3.1), "-3.1%");
        assert_eq!(signed_percent(0.0), "0%");
    }
}
