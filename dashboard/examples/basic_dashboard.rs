//! Basic dashboard generation example.
//!
//! Run with: `cargo run --example basic_dashboard`

use dashboard_leptos::render_dashboard;
use dashboard_leptos::types::{
    BudgetUsage, DashboardData, DepartmentRecord, GoalProgress, HealthSummary, StatusTier,
};

fn main() {
    // Build a small dataset by hand
    let data = DashboardData {
        generated_at: "Aug 24".into(),
        departments: vec![
            DepartmentRecord {
                id: "fund-ops".into(),
                name: "Fund Operations".into(),
                status: StatusTier::Green,
                goals: GoalProgress { completed: 8, total: 8 },
                budget: BudgetUsage { used: 2_208_000.0, total: 2_400_000.0 },
                ..Default::default()
            },
            DepartmentRecord {
                id: "it".into(),
                name: "IT & Infrastructure".into(),
                status: StatusTier::Red,
                goals: GoalProgress { completed: 4, total: 7 },
                budget: BudgetUsage { used: 1_650_000.0, total: 1_500_000.0 },
                ..Default::default()
            },
        ],
        health: HealthSummary { score: 92.0, ..Default::default() },
        ..Default::default()
    };

    // Render to HTML
    let html = render_dashboard(&data);

    // Write to file
    let output_path = "basic_dashboard.html";
    std::fs::write(output_path, &html).expect("Failed to write dashboard");

    println!("Dashboard written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
