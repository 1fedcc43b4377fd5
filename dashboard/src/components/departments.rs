//! Department performance matrix

use leptos::prelude::*;

use super::Panel;
use crate::encode::progress::{bar_plan, fill_percent};
use crate::encode::status::{budget_percent, classify_budget};
use crate::format::compact_currency;
use crate::types::{DepartmentRecord, StatusTier};

fn meter_class(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Green => "meter-fill meter-green",
        StatusTier::Yellow => "meter-fill meter-yellow",
        StatusTier::Red => "meter-fill meter-red",
    }
}

fn pct_class(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Green => "value budget-pct-green",
        StatusTier::Yellow => "value budget-pct-yellow",
        StatusTier::Red => "value budget-pct-red",
    }
}

/// Grid of department cards: editorial status dot, goal progress and
/// derived budget status per department.
#[component]
pub fn DepartmentsPanel(departments: Vec<DepartmentRecord>) -> impl IntoView {
    let count = departments.len();
    view! {
        <Panel title="Department Performance" hint=format!("{count} tracked")>
            <div class="dept-grid">
                {departments.into_iter().enumerate().map(|(idx, dept)| {
                    view! { <DepartmentCard dept=dept index=idx /> }
                }).collect::<Vec<_>>()}
            </div>
        </Panel>
    }
}

/// One department card.
///
/// The status dot reflects the upstream editorial call; the budget tier is
/// derived here from the spend figures. The two can legitimately disagree.
#[component]
fn DepartmentCard(dept: DepartmentRecord, #[prop(default = 0)] index: usize) -> impl IntoView {
    let goals_pct = fill_percent(dept.goals.completed, dept.goals.total);
    let goals_plan = bar_plan(goals_pct, index);
    let goals_label = format!("{}/{}", dept.goals.completed, dept.goals.total);

    let budget_tier = classify_budget(&dept.budget);
    let budget_pct = budget_percent(&dept.budget);
    let budget_plan = bar_plan(f64::from(budget_pct), index);
    let budget_label = format!("{}% of {}", budget_pct, compact_currency(dept.budget.total));

    view! {
        <div class="dept-card rise-in" style=format!("--enter-delay:{}ms", goals_plan.delay_ms)>
            <div class="dept-head">
                <span class=format!("status-dot {}", dept.status.css_class())></span>
                <span class="dept-name">{dept.name}</span>
            </div>

            <div class="dept-block">
                <div class="meter-row">
                    <span>"Goals"</span>
                    <span class="value">{goals_label}</span>
                </div>
                <div class="meter">
                    <div class="meter-fill" style=goals_plan.css_vars()></div>
                </div>
            </div>

            <div class="dept-block">
                <div class="meter-row">
                    <span>"Budget"</span>
                    <span class=pct_class(budget_tier)>{budget_label}</span>
                </div>
                <div class="meter">
                    <div class=meter_class(budget_tier) style=budget_plan.css_vars()></div>
                </div>
            </div>

            {(dept.team_size.is_some() || !dept.metrics.is_empty()).then(|| view! {
                <div class="dept-stats">
                    {dept.team_size.map(|n| view! {
                        <span>"Team " <span class="value">{n.to_string()}</span></span>
                    })}
                    {dept.metrics.into_iter().map(|pair| view! {
                        <span>{pair.label} " " <span class="value">{pair.value}</span></span>
                    }).collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
}
