//! Decision queue panel

use leptos::prelude::*;

use super::{Icon, Panel, ICON_CARET_RIGHT};
use crate::types::DecisionQueue;

/// Pending decisions with urgency flags, plus roll-up totals.
#[component]
pub fn DecisionQueuePanel(queue: DecisionQueue) -> impl IntoView {
    view! {
        <Panel title="Decision Queue">
            <ul class="queue-list">
                {queue.items.into_iter().map(|item| {
                    let dot_class = if item.urgent { "urgent-dot urgent" } else { "urgent-dot" };
                    view! {
                        <li class="queue-item">
                            <span class=dot_class></span>
                            <span style="flex:1">{item.title}</span>
                            <Icon path=ICON_CARET_RIGHT size="12" class="metric-icon" />
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
            <div class="queue-totals">
                <div>
                    <div class="total-num">{queue.totals.action_items.to_string()}</div>
                    <div class="total-label">"Pending"</div>
                </div>
                <div>
                    <div class="total-num">{queue.totals.alerts.to_string()}</div>
                    <div class="total-label">"Alerts"</div>
                </div>
                <div>
                    <div class="total-num">{queue.totals.completed.to_string()}</div>
                    <div class="total-label">"Done"</div>
                </div>
            </div>
        </Panel>
    }
}
