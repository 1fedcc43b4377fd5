//! Headline metric cards with trend badges and sparklines

use leptos::prelude::*;

use super::{metric_icon_path, Icon};
use crate::encode::progress::stagger_delay_ms;
use crate::encode::spark::{sparkline_area, sparkline_points};
use crate::encode::status::classify_change;
use crate::format::signed_percent;
use crate::types::HeadlineMetric;

/// Top strip of headline metric cards, entering with a stagger.
#[component]
pub fn MetricStrip(metrics: Vec<HeadlineMetric>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {metrics.into_iter().enumerate().map(|(idx, metric)| {
                view! { <MetricCard metric=metric index=idx /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// One headline metric card.
///
/// The value is shown verbatim; the optional change drives the trend badge
/// and the optional series draws a sparkline scaled to its own peak.
#[component]
pub fn MetricCard(metric: HeadlineMetric, #[prop(default = 0)] index: usize) -> impl IntoView {
    let class = format!("metric-card rise-in {}", metric.status.css_class());
    let style = format!("--enter-delay:{}ms", stagger_delay_ms(index));

    view! {
        <div class=class style=style>
            <div class="metric-head">
                <span class="metric-title">{metric.title}</span>
                <Icon path=metric_icon_path(metric.icon) size="18" class="metric-icon" />
            </div>
            <div class="metric-value">{metric.value}</div>
            {metric.change.map(|change| {
                let tier = classify_change(Some(change));
                view! {
                    <div class="metric-foot">
                        <span class=format!("trend-badge {}", tier.css_class())>
                            {tier.arrow()}" "{signed_percent(change)}
                        </span>
                        {metric.change_label.map(|label| view! {
                            <span class="trend-note">{label}</span>
                        })}
                    </div>
                }
            })}
            {metric.sparkline.filter(|s| !s.is_empty()).map(|series| {
                let area = sparkline_area(&series);
                let line = sparkline_points(&series);
                view! {
                    <svg class="metric-sparkline" viewBox="0 0 100 40" preserveAspectRatio="none">
                        <polygon class="spark-fill" points=area></polygon>
                        <polyline class="spark-line" points=line></polyline>
                    </svg>
                }
            })}
        </div>
    }
}
