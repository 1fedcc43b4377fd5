//! Dashboard data types for structuring the injected dataset.
//!
//! These types define the data model for one dashboard render. They're
//! designed to be:
//!
//! - **Serializable** - the dataset arrives as JSON via serde
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - partial payloads work with `..Default::default()`
//!
//! Every record is an immutable snapshot for the lifetime of a single
//! render; nothing here is mutated after construction.
//!
//! # Example
//!
//! ```rust
//! use dashboard_leptos::types::{DashboardData, DepartmentRecord, GoalProgress, BudgetUsage};
//!
//! let data = DashboardData {
//!     departments: vec![DepartmentRecord {
//!         id: "fund-ops".into(),
//!         name: "Fund Operations".into(),
//!         goals: GoalProgress { completed: 8, total: 8 },
//!         budget: BudgetUsage { used: 2_208_000.0, total: 2_400_000.0 },
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(data.departments.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Editorial health status assigned upstream to a department.
///
/// This is NOT derived from goals or budget - the dataset carries it as-is.
/// Budget usage gets its own derived tier via
/// [`crate::encode::status::classify_budget`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    /// On track
    #[default]
    Green,
    /// Needs attention
    Yellow,
    /// Off track / overrun
    Red,
}

impl StatusTier {
    /// CSS class for the pulsing status dot.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTier::Green => "status-green",
            StatusTier::Yellow => "status-yellow",
            StatusTier::Red => "status-red",
        }
    }

    /// Theme color hex for inline SVG/style use.
    pub fn color(&self) -> &'static str {
        match self {
            StatusTier::Green => "#27ae60",
            StatusTier::Yellow => "#e67e22",
            StatusTier::Red => "#e74c3c",
        }
    }
}

/// Status accent for a headline metric card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    /// Green accent
    Success,
    /// Amber accent
    Warning,
    /// Red accent
    Danger,
    /// No accent
    #[default]
    Neutral,
}

impl MetricStatus {
    /// CSS class for the card accent border.
    pub fn css_class(&self) -> &'static str {
        match self {
            MetricStatus::Success => "metric-success",
            MetricStatus::Warning => "metric-warning",
            MetricStatus::Danger => "metric-danger",
            MetricStatus::Neutral => "metric-neutral",
        }
    }
}

/// Icon shown on a headline metric card.
///
/// Kept as a small closed set so the dataset stays declarative; the actual
/// SVG paths live in [`crate::components`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Currency / assets
    Currency,
    /// Buildings / funds
    Buildings,
    /// People / team
    Team,
    /// Trend arrow
    #[default]
    Trend,
}

/// One card in the top metrics strip.
///
/// `value` is pre-formatted display text ("$2.3B", "92%"); the dashboard
/// does no numeric reinterpretation of it. `change` is a signed percentage
/// against the prior period and drives the trend badge.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::types::{HeadlineMetric, IconKind, MetricStatus};
///
/// let aum = HeadlineMetric {
///     title: "Assets Under Management".into(),
///     value: "$2.3B".into(),
///     change: Some(5.2),
///     change_label: Some("vs last quarter".into()),
///     icon: IconKind::Currency,
///     status: MetricStatus::Success,
///     sparkline: Some(vec![65.0, 68.0, 72.0, 70.0, 75.0]),
/// };
/// assert!(aum.sparkline.is_some());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HeadlineMetric {
    /// Card title
    pub title: String,
    /// Pre-formatted display value
    pub value: String,
    /// Signed percentage change vs prior period
    pub change: Option<f64>,
    /// Context label for the change ("vs last quarter")
    pub change_label: Option<String>,
    /// Icon kind
    #[serde(default)]
    pub icon: IconKind,
    /// Card accent
    #[serde(default)]
    pub status: MetricStatus,
    /// Short trend series, scaled to its own maximum when rendered
    pub sparkline: Option<Vec<f64>>,
}

/// Goal completion for a department. `completed <= total` is expected but
/// not enforced; the progress encoder clamps.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goals done
    pub completed: u32,
    /// Goals planned
    pub total: u32,
}

/// Budget consumption for a department.
///
/// `used` may legitimately exceed `total` - that is an overrun and renders
/// as the red tier, not an error.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Spend to date
    pub used: f64,
    /// Allocated budget
    pub total: f64,
}

/// Free-form label/value pair shown in the department card footer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetricPair {
    /// Short label ("Funds")
    pub label: String,
    /// Pre-formatted display value
    pub value: String,
}

/// One department in the performance matrix.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Editorial status (upstream-assigned, not derived)
    #[serde(default)]
    pub status: StatusTier,
    /// Goal completion
    pub goals: GoalProgress,
    /// Budget consumption
    pub budget: BudgetUsage,
    /// Extra label/value metrics (optional section)
    #[serde(default)]
    pub metrics: Vec<MetricPair>,
    /// Headcount (optional row)
    pub team_size: Option<u32>,
}

/// Delivery status of a weekly priority.
///
/// Editorially assigned upstream; independent of the progress value
/// (a 92% item can still be delayed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityStatus {
    /// Delivering as planned
    #[default]
    OnTrack,
    /// Slipping, recoverable
    AtRisk,
    /// Behind schedule
    Delayed,
}

impl PriorityStatus {
    /// CSS class for the status chip.
    pub fn css_class(&self) -> &'static str {
        match self {
            PriorityStatus::OnTrack => "prio-on-track",
            PriorityStatus::AtRisk => "prio-at-risk",
            PriorityStatus::Delayed => "prio-delayed",
        }
    }

    /// Human label with the hyphen dropped ("on track").
    pub fn label(&self) -> &'static str {
        match self {
            PriorityStatus::OnTrack => "on track",
            PriorityStatus::AtRisk => "at risk",
            PriorityStatus::Delayed => "delayed",
        }
    }
}

/// Owner of a priority. Missing avatar renders a placeholder silhouette.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Owner {
    /// Display name
    pub name: String,
    /// Image reference (URL or data URI)
    pub avatar: Option<String>,
}

/// One tracked weekly priority.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PriorityItem {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Completion percentage in [0, 100]
    pub progress: f64,
    /// Who owns delivery
    pub owner: Owner,
    /// Free text, not parsed ("Dec 15")
    pub due_date: String,
    /// Editorial delivery status
    #[serde(default)]
    pub status: PriorityStatus,
}

/// Quadrant category of a risk. Exactly one per risk; determines where on
/// the radar the point anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    /// Regulatory and filing risk (top-left)
    #[default]
    Compliance,
    /// Market and portfolio risk (top-right)
    Market,
    /// Operational and process risk (bottom-left)
    Operations,
    /// Legal and contractual risk (bottom-right)
    Legal,
}

impl RiskCategory {
    /// Axis label printed on the radar edge.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Compliance => "Compliance",
            RiskCategory::Market => "Market",
            RiskCategory::Operations => "Operations",
            RiskCategory::Legal => "Legal",
        }
    }
}

/// Severity of a risk; determines point size and color on the radar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    /// Needs leadership attention now
    Critical,
    /// Being managed, watch it
    Moderate,
    /// Monitored, no action needed
    #[default]
    Low,
}

impl RiskSeverity {
    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Critical => "Critical",
            RiskSeverity::Moderate => "Moderate",
            RiskSeverity::Low => "Low",
        }
    }
}

/// One item on the risk radar.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RiskItem {
    /// Stable identifier; also seeds the radar jitter
    pub id: String,
    /// Display title
    pub title: String,
    /// Quadrant the risk belongs to
    #[serde(default)]
    pub category: RiskCategory,
    /// How bad it is
    #[serde(default)]
    pub severity: RiskSeverity,
    /// What is happening
    #[serde(default)]
    pub description: String,
    /// What it costs if it lands
    #[serde(default)]
    pub impact: String,
    /// What is being done about it
    #[serde(default)]
    pub mitigation: String,
}

/// Direction of the firm health trend badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Improving
    Up,
    /// Declining
    Down,
    /// Holding
    #[default]
    Stable,
}

/// One contributing factor under the health gauge.
///
/// `weight` is carried in the dataset but never aggregated - the overall
/// score is supplied independently, not computed from the factors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HealthFactor {
    /// Factor name ("Fund Performance")
    pub label: String,
    /// Factor score in [0, 100]
    pub score: f64,
    /// Relative weight in [0, 1]; display context only
    #[serde(default)]
    pub weight: f64,
}

/// Firm health panel payload: supplied overall score plus factor breakdown.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Overall score in [0, 100], supplied upstream
    pub score: f64,
    /// Trend direction for the badge
    #[serde(default)]
    pub trend: TrendDirection,
    /// Display delta for the trend badge ("+2.3%")
    pub trend_label: Option<String>,
    /// Contributing factors, in display order
    #[serde(default)]
    pub factors: Vec<HealthFactor>,
}

/// Pending decision in the queue panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionItem {
    /// Stable identifier
    pub id: String,
    /// What needs deciding
    pub title: String,
    /// Urgent items get the pulsing red dot
    #[serde(default)]
    pub urgent: bool,
}

/// Roll-up counters shown under the decision queue.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct QueueTotals {
    /// Open action items
    pub action_items: u32,
    /// Active alerts
    pub alerts: u32,
    /// Items closed this period
    pub completed: u32,
}

/// Decision queue panel payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecisionQueue {
    /// Pending decisions, in display order
    #[serde(default)]
    pub items: Vec<ActionItem>,
    /// Roll-up counters
    #[serde(default)]
    pub totals: QueueTotals,
}

fn default_title() -> String {
    "Operations Command Center".to_string()
}

fn default_subtitle() -> String {
    "Real-time operational intelligence".to_string()
}

/// The complete injected dataset for one dashboard render.
///
/// This is the main structure passed to [`crate::render_dashboard`]. The
/// dashboard is agnostic to how the payload was produced (API response,
/// static file, config) - only the shape matters. All collections render
/// in insertion order; no sorting or filtering is applied.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::types::DashboardData;
///
/// let json = r#"{ "headline": [], "departments": [], "priorities": [],
///                 "risks": [], "health": { "score": 92.0 } }"#;
/// let data = DashboardData::from_json(json).unwrap();
/// assert_eq!(data.health.score, 92.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardData {
    /// Header title
    #[serde(default = "default_title")]
    pub title: String,
    /// Header strapline
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Footer timestamp label; free text, filled by the caller
    #[serde(default)]
    pub generated_at: String,
    /// Top metrics strip
    #[serde(default)]
    pub headline: Vec<HeadlineMetric>,
    /// Department performance matrix
    #[serde(default)]
    pub departments: Vec<DepartmentRecord>,
    /// Weekly priorities
    #[serde(default)]
    pub priorities: Vec<PriorityItem>,
    /// Risk radar items
    #[serde(default)]
    pub risks: Vec<RiskItem>,
    /// Firm health panel
    #[serde(default)]
    pub health: HealthSummary,
    /// Decision queue panel
    #[serde(default)]
    pub queue: DecisionQueue,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            generated_at: String::new(),
            headline: Vec::new(),
            departments: Vec::new(),
            priorities: Vec::new(),
            risks: Vec::new(),
            health: HealthSummary::default(),
            queue: DecisionQueue::default(),
        }
    }
}

impl DashboardData {
    /// Parse a dataset from its JSON representation.
    ///
    /// The only fallible boundary in the library; everything downstream of
    /// a parsed dataset renders without errors.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize the dataset back to pretty JSON (used by tooling that
    /// wants to inspect or re-emit the normalized payload).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
