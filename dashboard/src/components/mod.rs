//! Leptos UI components for rendering the HTML dashboard.
//!
//! This module contains modular, reusable components for building the
//! static dashboard. Each component is a Leptos `#[component]` function
//! that can be composed into custom layouts.
//!
//! # Component Hierarchy
//!
//! ```text
//! DashboardDocument
//! ├── TopBar
//! ├── MetricStrip
//! │   └── MetricCard (per headline metric)
//! ├── DepartmentsPanel
//! ├── PrioritiesPanel
//! ├── HealthPanel
//! ├── RiskRadarPanel
//! └── DecisionQueuePanel
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_dashboard`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use dashboard_leptos::components::{Panel, MetricCard};
//!
//! view! {
//!     <Panel title="Custom">
//!         <MetricCard metric=my_metric />
//!     </Panel>
//! }
//! ```

mod decisions;
mod departments;
mod document;
mod header;
mod health;
mod icons;
mod metric_card;
mod panel;
mod priorities;
mod risk_radar;

pub use decisions::DecisionQueuePanel;
pub use departments::DepartmentsPanel;
pub use document::DashboardDocument;
pub use header::TopBar;
pub use health::HealthPanel;
pub use icons::*;
pub use metric_card::{MetricCard, MetricStrip};
pub use panel::Panel;
pub use priorities::PrioritiesPanel;
pub use risk_radar::RiskRadarPanel;
