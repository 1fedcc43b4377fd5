//! Firm health gauge and factor breakdown

use leptos::prelude::*;

use super::{Icon, Panel, ICON_WARNING_CIRCLE};
use crate::encode::gauge::{
    circumference, clamp_score, dash_offset, needs_attention, score_tier, status_text,
    GAUGE_RADIUS, GAUGE_SIZE, GAUGE_STROKE, GAUGE_SWEEP_MS,
};
use crate::encode::progress::bar_plan;
use crate::types::{HealthSummary, TrendDirection};

/// Firm health panel: sweep-in gauge ring for the supplied overall score,
/// trend badge, attention advisory and the factor breakdown.
///
/// The overall score is taken as-is from the dataset. Factor weights are
/// carried but never aggregated here; if the upstream number disagrees
/// with its own factors, the dashboard shows the upstream number.
#[component]
pub fn HealthPanel(health: HealthSummary) -> impl IntoView {
    let score = clamp_score(health.score);
    let tier = score_tier(score);
    let circ = circumference();
    let offset = dash_offset(score);

    let center = GAUGE_SIZE / 2;
    let view_box = format!("0 0 {GAUGE_SIZE} {GAUGE_SIZE}");
    let arc_style = format!(
        "--gauge-circumference:{circ:.1};--gauge-offset:{offset:.1};--gauge-duration:{GAUGE_SWEEP_MS}ms"
    );

    view! {
        <Panel title="Firm Health">
            <div class="gauge-wrap">
                <svg class="gauge" viewBox=view_box width=GAUGE_SIZE.to_string() height=GAUGE_SIZE.to_string()>
                    <circle
                        class="gauge-track"
                        cx=center.to_string()
                        cy=center.to_string()
                        r=GAUGE_RADIUS.to_string()
                        stroke-width=GAUGE_STROKE.to_string()
                    />
                    <circle
                        class="gauge-arc"
                        cx=center.to_string()
                        cy=center.to_string()
                        r=GAUGE_RADIUS.to_string()
                        stroke=tier.color()
                        stroke-width=GAUGE_STROKE.to_string()
                        stroke-dasharray=format!("{circ:.1}")
                        stroke-dashoffset=format!("{offset:.1}")
                        transform=format!("rotate(-90 {center} {center})")
                        style=arc_style
                    />
                    <text
                        x=center.to_string()
                        y=(center - 4).to_string()
                        text-anchor="middle"
                        dominant-baseline="middle"
                        fill=tier.color()
                        font-size="36"
                        font-weight="600"
                        font-family="'JetBrains Mono', monospace"
                    >
                        {format!("{score:.0}")}
                    </text>
                    <text
                        x=center.to_string()
                        y=(center + 24).to_string()
                        text-anchor="middle"
                        dominant-baseline="middle"
                        fill="#707070"
                        font-size="11"
                        font-family="'JetBrains Mono', monospace"
                    >
                        {status_text(score)}
                    </text>
                </svg>

                {health.trend_label.map(|label| {
                    let (class, arrow) = match health.trend {
                        TrendDirection::Up => ("trend-pill trend-up", "\u{25B2}"),
                        TrendDirection::Down => ("trend-pill trend-down", "\u{25BC}"),
                        TrendDirection::Stable => ("trend-pill trend-flat", "\u{2022}"),
                    };
                    view! { <span class=class>{arrow}" "{label}</span> }
                })}

                {needs_attention(score).then(|| view! {
                    <span class="attention-chip">
                        <Icon path=ICON_WARNING_CIRCLE size="12" />
                        "Attention required"
                    </span>
                })}
            </div>

            <ul class="factor-list">
                {health.factors.into_iter().enumerate().map(|(idx, factor)| {
                    let plan = bar_plan(factor.score, idx);
                    view! {
                        <li class="factor-row">
                            <div class="meter-row">
                                <span>{factor.label}</span>
                                <span class="value">{format!("{:.0}", factor.score)}</span>
                            </div>
                            <div class="meter">
                                <div class="meter-fill" style=plan.css_vars()></div>
                            </div>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </Panel>
    }
}
