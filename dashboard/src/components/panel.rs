//! Shared panel chrome for dashboard sections

use leptos::prelude::*;

/// Bordered panel with a title row; every dashboard section sits in one.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    /// Small right-aligned hint text in the title row
    #[prop(optional, into)]
    hint: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="panel-head">
                <h2 class="panel-title">{title}</h2>
                {hint.map(|h| view! { <span class="panel-hint">{h}</span> })}
            </div>
            {children()}
        </section>
    }
}
