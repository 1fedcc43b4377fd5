//! Visual encoding layer: pure functions from dataset values to visual
//! parameters.
//!
//! Everything in this module is deterministic and side-effect free. The
//! components in [`crate::components`] call these functions and emit the
//! results as SVG attributes, inline styles and CSS custom properties;
//! the same functions back the wasm bindings so browser-side behavior
//! cannot drift from what the tests here pin down.

pub mod gauge;
pub mod progress;
pub mod radar;
pub mod spark;
pub mod status;

pub use gauge::{dash_offset, needs_attention, score_tier, ScoreTier};
pub use progress::{bar_plan, fill_percent, stagger_delay_ms, TransitionPlan};
pub use radar::{place_risk, place_risks, RadarSelection, RiskPoint};
pub use spark::{sparkline_area, sparkline_points};
pub use status::{budget_percent, classify_budget, classify_change, TrendTier};
