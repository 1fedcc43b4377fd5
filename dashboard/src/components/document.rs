//! Root document component - the complete HTML page
//!
//! Lays out the top bar, metric strip, the two-column panel grid and the
//! footer, then injects the page script that wires radar selection.

use leptos::prelude::*;

use super::{
    DecisionQueuePanel, DepartmentsPanel, HealthPanel, MetricStrip, PrioritiesPanel,
    RiskRadarPanel, TopBar,
};
use crate::styles::{CSP, DASHBOARD_CSS};
use crate::types::DashboardData;

/// The complete HTML document for one dashboard render.
#[component]
pub fn DashboardDocument(data: DashboardData) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{data.title.clone()}</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body>
                <div class="dash-page">
                    <TopBar
                        title=data.title
                        subtitle=data.subtitle
                        generated_at=data.generated_at.clone()
                    />

                    <main class="dash-main">
                        <div class="container">
                            <MetricStrip metrics=data.headline />

                            <div class="dash-columns">
                                <div class="dash-col">
                                    <DepartmentsPanel departments=data.departments />
                                    <PrioritiesPanel priorities=data.priorities />
                                </div>
                                <div class="dash-col">
                                    <HealthPanel health=data.health />
                                    <RiskRadarPanel risks=data.risks />
                                    <DecisionQueuePanel queue=data.queue />
                                </div>
                            </div>
                        </div>
                    </main>

                    <footer class="dash-footer">
                        <div class="container">
                            {if data.generated_at.is_empty() {
                                view! { <span>"Static snapshot"</span> }.into_any()
                            } else {
                                view! { <span>"Generated " {data.generated_at}</span> }.into_any()
                            }}
                        </div>
                    </footer>
                </div>

                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Page logic (radar point selection, priorities expand/collapse)
const APP_SCRIPT: &str = r#"
(() => {
  // Risk radar selection: clicking a point opens its detail panel,
  // clicking it again closes it, clicking another point switches.
  const points = document.querySelectorAll('.radar-point[data-risk-id]');
  const panels = document.querySelectorAll('.risk-panel[data-risk-panel]');

  let selected = null;

  const apply = () => {
      points.forEach(p => {
          p.classList.toggle('selected', p.dataset.riskId === selected);
      });
      panels.forEach(p => {
          if (p.dataset.riskPanel === selected) {
              p.removeAttribute('hidden');
          } else {
              p.setAttribute('hidden', '');
          }
      });
  };

  points.forEach(btn => {
      btn.addEventListener('click', () => {
          const id = btn.dataset.riskId;
          selected = selected === id ? null : id;
          apply();
      });
  });

  document.querySelectorAll('[data-risk-close]').forEach(btn => {
      btn.addEventListener('click', () => {
          selected = null;
          apply();
      });
  });

  // Priorities list starts collapsed when it overflows; the button flips it.
  document.querySelectorAll('[data-role="view-all"]').forEach(btn => {
      const list = btn.closest('.panel').querySelector('.prio-list');
      if (!list) return;
      btn.addEventListener('click', () => {
          const collapsed = list.classList.toggle('collapsed');
          btn.textContent = collapsed ? 'View All' : 'Show Less';
      });
  });
})();
"#;
