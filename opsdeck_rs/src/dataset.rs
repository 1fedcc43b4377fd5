//! Dataset loading, consistency checks and the built-in demo payload.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use dashboard_leptos::types::{
    ActionItem, BudgetUsage, DashboardData, DecisionQueue, DepartmentRecord, GoalProgress,
    HeadlineMetric, HealthFactor, HealthSummary, IconKind, MetricPair, MetricStatus, Owner,
    PriorityItem, PriorityStatus, QueueTotals, RiskCategory, RiskItem, RiskSeverity, StatusTier,
    TrendDirection,
};

/// Read and parse a dashboard dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<DashboardData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    DashboardData::from_json(&raw)
        .with_context(|| format!("{} is not a valid dashboard dataset", path.display()))
}

/// Footer timestamp for freshly generated pages ("Aug 24, 2026 14:32").
pub fn current_timestamp() -> String {
    Local::now().format("%b %d, %Y %H:%M").to_string()
}

/// Legal-but-suspicious dataset shapes, reported under `--verbose`.
///
/// None of these fail a render; the encoders clamp. They usually mean the
/// upstream export is stale or mis-mapped, which is worth a warning.
pub fn dataset_warnings(data: &DashboardData) -> Vec<String> {
    let mut warnings = Vec::new();

    for dept in &data.departments {
        if dept.goals.completed > dept.goals.total {
            warnings.push(format!(
                "{}: {} goals completed out of {}",
                dept.name, dept.goals.completed, dept.goals.total
            ));
        }
        if dept.budget.total <= 0.0 {
            warnings.push(format!(
                "{}: budget total is {}",
                dept.name, dept.budget.total
            ));
        }
    }

    for item in &data.priorities {
        if !(0.0..=100.0).contains(&item.progress) {
            warnings.push(format!(
                "priority '{}': progress {} outside 0-100",
                item.title, item.progress
            ));
        }
    }

    if !(0.0..=100.0).contains(&data.health.score) {
        warnings.push(format!("health score {} outside 0-100", data.health.score));
    }
    for factor in &data.health.factors {
        if !(0.0..=100.0).contains(&factor.score) {
            warnings.push(format!(
                "factor '{}': score {} outside 0-100",
                factor.label, factor.score
            ));
        }
    }

    warnings
}

fn pair(label: &str, value: &str) -> MetricPair {
    MetricPair {
        label: label.into(),
        value: value.into(),
    }
}

fn owner(name: &str) -> Owner {
    Owner {
        name: name.into(),
        avatar: None,
    }
}

/// The built-in sample payload behind `--demo`.
///
/// A mid-size fund administrator's quarter: one department running hot on
/// budget, one over, a mixed priority board and one risk per quadrant.
/// `generated_at` is left empty; the caller stamps it.
pub fn demo_data() -> DashboardData {
    DashboardData {
        headline: vec![
            HeadlineMetric {
                title: "Total AUM".into(),
                value: "$2.3B".into(),
                change: Some(5.2),
                change_label: Some("vs last quarter".into()),
                icon: IconKind::Currency,
                status: MetricStatus::Success,
                sparkline: Some(vec![
                    65.0, 68.0, 72.0, 70.0, 75.0, 78.0, 82.0, 85.0, 88.0, 92.0,
                ]),
            },
            HeadlineMetric {
                title: "Active Funds".into(),
                value: "8".into(),
                change: None,
                change_label: Some("2 launching in Q1".into()),
                icon: IconKind::Buildings,
                status: MetricStatus::Neutral,
                sparkline: None,
            },
            HeadlineMetric {
                title: "Team Members".into(),
                value: "47".into(),
                change: Some(4.4),
                change_label: Some("quarter over quarter".into()),
                icon: IconKind::Team,
                status: MetricStatus::Neutral,
                sparkline: None,
            },
            HeadlineMetric {
                title: "Client Satisfaction".into(),
                value: "92%".into(),
                change: Some(1.1),
                change_label: Some("vs last survey".into()),
                icon: IconKind::Trend,
                status: MetricStatus::Success,
                sparkline: Some(vec![
                    88.0, 89.0, 87.0, 90.0, 91.0, 89.0, 92.0, 91.0, 92.0, 92.0,
                ]),
            },
        ],
        departments: vec![
            DepartmentRecord {
                id: "fund-ops".into(),
                name: "Fund Operations".into(),
                status: StatusTier::Green,
                goals: GoalProgress {
                    completed: 8,
                    total: 8,
                },
                budget: BudgetUsage {
                    used: 2_208_000.0,
                    total: 2_400_000.0,
                },
                metrics: vec![pair("NAV accuracy", "99.98%"), pair("Settlement fails", "0.4%")],
                team_size: Some(12),
            },
            DepartmentRecord {
                id: "it".into(),
                name: "Information Technology".into(),
                status: StatusTier::Yellow,
                goals: GoalProgress {
                    completed: 5,
                    total: 7,
                },
                budget: BudgetUsage {
                    used: 1_650_000.0,
                    total: 1_500_000.0,
                },
                metrics: vec![pair("Uptime", "99.2%"), pair("Open tickets", "34")],
                team_size: Some(9),
            },
            DepartmentRecord {
                id: "legal".into(),
                name: "Legal & Compliance".into(),
                status: StatusTier::Green,
                goals: GoalProgress {
                    completed: 6,
                    total: 6,
                },
                budget: BudgetUsage {
                    used: 870_000.0,
                    total: 1_000_000.0,
                },
                metrics: vec![pair("Filings on time", "100%")],
                team_size: Some(6),
            },
            DepartmentRecord {
                id: "finance".into(),
                name: "Finance".into(),
                status: StatusTier::Green,
                goals: GoalProgress {
                    completed: 7,
                    total: 8,
                },
                budget: BudgetUsage {
                    used: 780_000.0,
                    total: 1_000_000.0,
                },
                metrics: vec![pair("Close cycle", "T+4")],
                team_size: Some(8),
            },
            DepartmentRecord {
                id: "client-service".into(),
                name: "Client Service".into(),
                status: StatusTier::Yellow,
                goals: GoalProgress {
                    completed: 4,
                    total: 6,
                },
                budget: BudgetUsage {
                    used: 450_000.0,
                    total: 500_000.0,
                },
                metrics: vec![pair("NPS", "62")],
                team_size: Some(7),
            },
            DepartmentRecord {
                id: "hr".into(),
                name: "Human Resources".into(),
                status: StatusTier::Green,
                goals: GoalProgress {
                    completed: 3,
                    total: 5,
                },
                budget: BudgetUsage {
                    used: 320_000.0,
                    total: 400_000.0,
                },
                metrics: vec![pair("Time to hire", "31d")],
                team_size: Some(5),
            },
        ],
        priorities: vec![
            PriorityItem {
                id: "prio-1".into(),
                title: "Complete Q4 fund performance reports".into(),
                progress: 75.0,
                owner: owner("Sarah Chen"),
                due_date: "Dec 12".into(),
                status: PriorityStatus::OnTrack,
            },
            PriorityItem {
                id: "prio-2".into(),
                title: "Finalize Meridian Growth Fund III close".into(),
                progress: 88.0,
                owner: owner("Marcus Webb"),
                due_date: "Dec 15".into(),
                status: PriorityStatus::AtRisk,
            },
            PriorityItem {
                id: "prio-3".into(),
                title: "Migrate client portal to new platform".into(),
                progress: 45.0,
                owner: owner("Elena Rodriguez"),
                due_date: "Dec 20".into(),
                status: PriorityStatus::Delayed,
            },
            PriorityItem {
                id: "prio-4".into(),
                title: "Complete annual compliance training".into(),
                progress: 92.0,
                owner: owner("David Park"),
                due_date: "Dec 10".into(),
                status: PriorityStatus::OnTrack,
            },
            PriorityItem {
                id: "prio-5".into(),
                title: "Renegotiate custodian fee schedule".into(),
                progress: 30.0,
                owner: owner("Amara Okafor"),
                due_date: "Jan 8".into(),
                status: PriorityStatus::AtRisk,
            },
        ],
        risks: vec![
            RiskItem {
                id: "compliance-1".into(),
                title: "Regulatory filing deadline".into(),
                category: RiskCategory::Compliance,
                severity: RiskSeverity::Critical,
                description: "Q4 regulatory filings due within two weeks; two funds still reconciling.".into(),
                impact: "Fines and potential censure if filed late.".into(),
                mitigation: "External counsel engaged; daily check-ins until filed.".into(),
            },
            RiskItem {
                id: "market-1".into(),
                title: "Rate-sensitive asset exposure".into(),
                category: RiskCategory::Market,
                severity: RiskSeverity::Moderate,
                description: "Duration risk concentrated in two fixed-income sleeves.".into(),
                impact: "NAV drawdown under a 50bp move.".into(),
                mitigation: "Hedging overlay under review with the investment committee.".into(),
            },
            RiskItem {
                id: "ops-1".into(),
                title: "Key person dependency".into(),
                category: RiskCategory::Operations,
                severity: RiskSeverity::Moderate,
                description: "Settlement process knowledge concentrated in one senior operator.".into(),
                impact: "Processing delays during any absence.".into(),
                mitigation: "Cross-training two analysts; runbook in progress.".into(),
            },
            RiskItem {
                id: "legal-1".into(),
                title: "Custodian contract renewal".into(),
                category: RiskCategory::Legal,
                severity: RiskSeverity::Low,
                description: "Custodian agreement renews in Q1 with changed liability terms.".into(),
                impact: "Unfavorable terms locked in for three years.".into(),
                mitigation: "Counsel reviewing; renewal gated on redlines.".into(),
            },
        ],
        health: HealthSummary {
            score: 92.0,
            trend: TrendDirection::Up,
            trend_label: Some("+2.3%".into()),
            factors: vec![
                HealthFactor {
                    label: "Fund Performance".into(),
                    score: 94.0,
                    weight: 0.3,
                },
                HealthFactor {
                    label: "Operational Efficiency".into(),
                    score: 88.0,
                    weight: 0.25,
                },
                HealthFactor {
                    label: "Client Retention".into(),
                    score: 91.0,
                    weight: 0.2,
                },
                HealthFactor {
                    label: "Team Utilization".into(),
                    score: 92.0,
                    weight: 0.15,
                },
                HealthFactor {
                    label: "Compliance Posture".into(),
                    score: 96.0,
                    weight: 0.1,
                },
            ],
        },
        queue: DecisionQueue {
            items: vec![
                ActionItem {
                    id: "act-1".into(),
                    title: "Approve Q1 budget reallocation".into(),
                    urgent: true,
                },
                ActionItem {
                    id: "act-2".into(),
                    title: "Review Fund III subscription documents".into(),
                    urgent: false,
                },
                ActionItem {
                    id: "act-3".into(),
                    title: "Confirm offsite dates with department heads".into(),
                    urgent: false,
                },
            ],
            totals: QueueTotals {
                action_items: 7,
                alerts: 2,
                completed: 12,
            },
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_is_well_formed() {
        let data = demo_data();
        assert_eq!(data.headline.len(), 4);
        assert_eq!(data.departments.len(), 6);
        assert_eq!(data.priorities.len(), 5);
        assert_eq!(data.risks.len(), 4);
        assert_eq!(data.health.factors.len(), 5);
        assert!(dataset_warnings(&data).is_empty());

        let weight_sum: f64 = data.health.factors.iter().map(|f| f.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn demo_data_roundtrips_as_json() {
        let data = demo_data();
        let json = data.to_json().expect("serialize demo");
        let back = DashboardData::from_json(&json).expect("reparse demo");
        assert_eq!(back.departments.len(), data.departments.len());
        assert_eq!(back.health.score, data.health.score);
    }

    #[test]
    fn warns_on_goal_overrun_and_score_range() {
        let mut data = DashboardData::default();
        data.departments.push(DepartmentRecord {
            id: "ops".into(),
            name: "Operations".into(),
            goals: GoalProgress {
                completed: 9,
                total: 5,
            },
            budget: BudgetUsage {
                used: 10_000.0,
                total: 100_000.0,
            },
            ..Default::default()
        });
        data.health.score = 120.0;

        let warnings = dataset_warnings(&data);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Operations"));
        assert!(warnings[0].contains("9 goals"));
        assert!(warnings[1].contains("120"));
    }

    #[test]
    fn load_dataset_reports_missing_file() {
        let err = load_dataset(Path::new("definitely-not-here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely-not-here.json"));
    }
}
