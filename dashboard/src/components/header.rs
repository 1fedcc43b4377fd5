//! Sticky top bar with title and freshness indicator

use leptos::prelude::*;

/// Dashboard top bar. The pulsing dot signals "live" without claiming a
/// connection; `generated_at` is whatever freshness text the caller chose.
#[component]
pub fn TopBar(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] generated_at: String,
) -> impl IntoView {
    view! {
        <nav class="dash-nav">
            <div class="container dash-nav-inner">
                <div>
                    <div class="dash-nav-title">{title}</div>
                    <div class="dash-nav-sub">{subtitle}</div>
                </div>
                <div class="dash-nav-meta">
                    <span class="live-dot"></span>
                    {if generated_at.is_empty() {
                        view! { <span>"Snapshot"</span> }.into_any()
                    } else {
                        view! { <span>{generated_at}</span> }.into_any()
                    }}
                </div>
            </div>
        </nav>
    }
}
