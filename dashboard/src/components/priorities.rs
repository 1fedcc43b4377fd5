//! Weekly priorities tracker

use leptos::prelude::*;

use super::{Icon, Panel, ICON_USER};
use crate::encode::progress::bar_plan;
use crate::types::PriorityItem;

/// Rows shown before the list collapses behind the "View All" control.
const VISIBLE_ROWS: usize = 4;

/// Ordered list of weekly priorities with owner, due date and a staggered
/// progress bar. Order is the dataset's; nothing is re-sorted.
///
/// Lists longer than [`VISIBLE_ROWS`] start collapsed and expose a
/// `data-role="view-all"` button the page script expands. Every row is in
/// the DOM either way; collapsing is display-only.
#[component]
pub fn PrioritiesPanel(priorities: Vec<PriorityItem>) -> impl IntoView {
    let overflow = priorities.len() > VISIBLE_ROWS;
    let list_class = if overflow {
        "prio-list collapsed"
    } else {
        "prio-list"
    };

    view! {
        <Panel title="This Week's Priorities">
            <ul class=list_class>
                {priorities.into_iter().enumerate().map(|(idx, item)| {
                    view! { <PriorityRow item=item index=idx /> }
                }).collect::<Vec<_>>()}
            </ul>
            {overflow.then(|| view! {
                <button class="view-all" data-role="view-all">"View All"</button>
            })}
        </Panel>
    }
}

#[component]
fn PriorityRow(item: PriorityItem, #[prop(default = 0)] index: usize) -> impl IntoView {
    let plan = bar_plan(item.progress, index);
    let pct_label = format!("{:.0}%", plan.target_pct);
    let chip_class = format!("prio-chip {}", item.status.css_class());

    view! {
        <li class="prio-row rise-in" style=format!("--enter-delay:{}ms", plan.delay_ms)>
            <div class="prio-top">
                <span class="prio-title">{item.title}</span>
                <span class=chip_class>{item.status.label()}</span>
            </div>
            <div class="meter">
                <div class="meter-fill" style=plan.css_vars()></div>
            </div>
            <div class="prio-foot">
                <span class="owner">
                    {match item.owner.avatar {
                        Some(src) => view! {
                            <img class="owner-avatar" src=src alt=item.owner.name.clone() />
                        }.into_any(),
                        None => view! {
                            <span class="owner-fallback">
                                <Icon path=ICON_USER size="10" />
                            </span>
                        }.into_any(),
                    }}
                    {item.owner.name}
                </span>
                <span>"Due " {item.due_date}</span>
                <span class="value">{pct_label}</span>
            </div>
        </li>
    }
}
