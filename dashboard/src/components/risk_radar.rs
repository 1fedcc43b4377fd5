//! Risk radar quadrant plot with per-risk detail panels

use leptos::prelude::*;

use super::Panel;
use crate::encode::radar::{place_risk, severity_color};
use crate::types::{RiskCategory, RiskItem, RiskSeverity};

/// Quadrant scatter of active risks.
///
/// Each point is a button carrying `data-risk-id`; the matching detail
/// panel carries `data-risk-panel` and starts hidden. The page script
/// toggles visibility so exactly one panel is open at a time.
#[component]
pub fn RiskRadarPanel(risks: Vec<RiskItem>) -> impl IntoView {
    view! {
        <Panel title="Risk Radar" hint="Click a point for detail">
            <div class="radar">
                <div class="radar-ring"></div>
                <div class="radar-axis-x"></div>
                <div class="radar-axis-y"></div>
                <span class="radar-label label-nw">{RiskCategory::Compliance.label()}</span>
                <span class="radar-label label-ne">{RiskCategory::Market.label()}</span>
                <span class="radar-label label-sw">{RiskCategory::Operations.label()}</span>
                <span class="radar-label label-se">{RiskCategory::Legal.label()}</span>
                {risks.iter().map(|risk| {
                    let point = place_risk(risk);
                    let style = format!(
                        "left:calc(50% + {:.1}px);top:calc(50% + {:.1}px);width:{}px;height:{}px;background:{}",
                        point.x, point.y, point.size_px, point.size_px, point.color
                    );
                    view! {
                        <button
                            class="radar-point"
                            data-risk-id=risk.id.clone()
                            style=style
                            title=risk.title.clone()
                            aria-label=risk.title.clone()
                        ></button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="radar-legend">
                <span>
                    <span class="legend-dot" style=format!("background:{}", severity_color(RiskSeverity::Critical))></span>
                    "Critical"
                </span>
                <span>
                    <span class="legend-dot" style=format!("background:{}", severity_color(RiskSeverity::Moderate))></span>
                    "Moderate"
                </span>
                <span>
                    <span class="legend-dot" style=format!("background:{}", severity_color(RiskSeverity::Low))></span>
                    "Low"
                </span>
            </div>

            {risks.into_iter().map(|risk| {
                view! { <RiskDetail risk=risk /> }
            }).collect::<Vec<_>>()}
        </Panel>
    }
}

/// Detail panel of one risk; hidden until its point is selected.
///
/// The close button carries `data-risk-close` for the page script, which
/// clears the selection the same way a second click on the point does.
#[component]
fn RiskDetail(risk: RiskItem) -> impl IntoView {
    let severity_style = format!("color:{}", severity_color(risk.severity));
    view! {
        <div class="risk-panel" data-risk-panel=risk.id hidden="hidden">
            <div class="risk-panel-head">
                <h3 class="risk-panel-title">{risk.title}</h3>
                <span class="risk-severity" style=severity_style>
                    {risk.severity.label()}
                </span>
                <button class="risk-close" data-risk-close="" aria-label="Close">
                    "\u{00D7}"
                </button>
            </div>
            {(!risk.description.is_empty()).then(|| view! {
                <div class="risk-field">
                    <span class="risk-field-label">"What"</span>
                    {risk.description}
                </div>
            })}
            {(!risk.impact.is_empty()).then(|| view! {
                <div class="risk-field">
                    <span class="risk-field-label">"Impact"</span>
                    {risk.impact}
                </div>
            })}
            {(!risk.mitigation.is_empty()).then(|| view! {
                <div class="risk-field">
                    <span class="risk-field-label">"Mitigation"</span>
                    {risk.mitigation}
                </div>
            })}
            <div class="risk-field">
                <span class="risk-field-label">"Category"</span>
                {risk.category.label()}
            </div>
        </div>
    }
}
