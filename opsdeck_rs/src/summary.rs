//! Terminal rollup of the derived tiers, for `--summary`.
//!
//! Prints the same classifications the page renders (budget tiers, score
//! tier, attention advisory) so a shell user can read the headline state
//! without opening the HTML.

use std::fmt::Write;

use dashboard_leptos::encode::gauge::{clamp_score, needs_attention, score_tier, status_text, ScoreTier};
use dashboard_leptos::encode::status::classify_budget;
use dashboard_leptos::types::{DashboardData, PriorityStatus, RiskSeverity, StatusTier};

use crate::colors::Painter;

pub fn render_summary(data: &DashboardData, painter: &Painter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.header(&data.title));

    let score = clamp_score(data.health.score);
    let mut health = format!("{:.0}  {}", score, status_text(score));
    if let Some(label) = &data.health.trend_label {
        let _ = write!(health, " ({label})");
    }
    let health = match score_tier(score) {
        ScoreTier::Green => painter.ok(&health),
        ScoreTier::Amber => painter.warn(&health),
        ScoreTier::Red => painter.error(&health),
    };
    let _ = writeln!(out, "  {:<13}{}", "Health", health);
    if needs_attention(score) {
        let _ = writeln!(out, "  {:<13}{}", "", painter.warn("attention required"));
    }

    if !data.departments.is_empty() {
        let (mut green, mut yellow, mut red) = (0usize, 0usize, 0usize);
        for dept in &data.departments {
            match classify_budget(&dept.budget) {
                StatusTier::Green => green += 1,
                StatusTier::Yellow => yellow += 1,
                StatusTier::Red => red += 1,
            }
        }
        let _ = writeln!(
            out,
            "  {:<13}{}, {}, {}",
            "Departments",
            painter.ok(&format!("{green} on budget")),
            painter.warn(&format!("{yellow} watch")),
            painter.error(&format!("{red} over")),
        );
    }

    if !data.priorities.is_empty() {
        let (mut on_track, mut at_risk, mut delayed) = (0usize, 0usize, 0usize);
        for item in &data.priorities {
            match item.status {
                PriorityStatus::OnTrack => on_track += 1,
                PriorityStatus::AtRisk => at_risk += 1,
                PriorityStatus::Delayed => delayed += 1,
            }
        }
        let _ = writeln!(
            out,
            "  {:<13}{}, {}, {}",
            "Priorities",
            painter.ok(&format!("{on_track} on track")),
            painter.warn(&format!("{at_risk} at risk")),
            painter.error(&format!("{delayed} delayed")),
        );
    }

    if !data.risks.is_empty() {
        let (mut critical, mut moderate, mut low) = (0usize, 0usize, 0usize);
        for risk in &data.risks {
            match risk.severity {
                RiskSeverity::Critical => critical += 1,
                RiskSeverity::Moderate => moderate += 1,
                RiskSeverity::Low => low += 1,
            }
        }
        let _ = writeln!(
            out,
            "  {:<13}{}, {}, {}",
            "Risks",
            painter.error(&format!("{critical} critical")),
            painter.warn(&format!("{moderate} moderate")),
            painter.dim(&format!("{low} low")),
        );
    }

    let totals = &data.queue.totals;
    if totals.action_items + totals.alerts + totals.completed > 0 {
        let _ = writeln!(
            out,
            "  {:<13}{} pending, {} alerts, {} done",
            "Queue",
            painter.number(totals.action_items),
            painter.number(totals.alerts),
            painter.number(totals.completed),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use dashboard_leptos::types::{
        BudgetUsage, DepartmentRecord, PriorityItem, RiskItem, RiskSeverity,
    };

    use super::*;
    use crate::colors::ColorMode;

    fn plain() -> Painter {
        Painter::new(ColorMode::Never)
    }

    #[test]
    fn rolls_up_tiers_without_color() {
        let mut data = DashboardData::default();
        data.departments = vec![
            DepartmentRecord {
                id: "a".into(),
                name: "A".into(),
                budget: BudgetUsage {
                    used: 92.0,
                    total: 100.0,
                },
                ..Default::default()
            },
            DepartmentRecord {
                id: "b".into(),
                name: "B".into(),
                budget: BudgetUsage {
                    used: 80.0,
                    total: 100.0,
                },
                ..Default::default()
            },
        ];
        data.priorities = vec![PriorityItem {
            status: PriorityStatus::Delayed,
            ..Default::default()
        }];
        data.risks = vec![RiskItem {
            severity: RiskSeverity::Critical,
            ..Default::default()
        }];
        data.health.score = 65.0;

        let text = render_summary(&data, &plain());
        assert!(text.contains("1 on budget"));
        assert!(text.contains("1 watch"));
        assert!(text.contains("0 over"));
        assert!(text.contains("1 delayed"));
        assert!(text.contains("1 critical"));
        assert!(text.contains("65  Stable"));
        assert!(text.contains("attention required"));
    }

    #[test]
    fn skips_empty_sections() {
        let text = render_summary(&DashboardData::default(), &plain());
        assert!(text.contains("Health"));
        assert!(!text.contains("Departments"));
        assert!(!text.contains("Queue"));
    }

    #[test]
    fn healthy_score_has_no_advisory() {
        let mut data = DashboardData::default();
        data.health.score = 92.0;
        data.health.trend_label = Some("+2.3%".into());

        let text = render_summary(&data, &plain());
        assert!(text.contains("92  Excellent (+2.3%)"));
        assert!(!text.contains("attention required"));
    }
}
