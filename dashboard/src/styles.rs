//! CSS styles for the HTML dashboard.
//!
//! This module contains the complete CSS for rendering the dashboard,
//! including the panel grid, meter animations, and the risk radar.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use dashboard_leptos::styles::DASHBOARD_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", DASHBOARD_CSS, my_css);
//! ```
//!
//! # Animation model
//!
//! Every animation is a stylesheet keyframe parameterized by CSS custom
//! properties that the components set inline (`--fill-target`,
//! `--gauge-offset`, `--enter-delay`). The Rust side decides *what*
//! animates and *to where*; this file alone decides *how it looks*.

/// Complete CSS for the dashboard - CRT-inspired dark theme.
///
/// This CSS provides:
/// - Base typography and spacing (monospace)
/// - Headline metric cards with sparklines
/// - Department / priority meter bars with staggered fill keyframes
/// - Risk radar quadrant plot and detail panel
/// - Health gauge ring with sweep-in animation
/// - Dark theme by default
pub const DASHBOARD_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0a0a0a;
    --bg-mid: #141414;
    --text-bright: #a8a8a8;
    --text-dim: #707070;
    --text-muted: #404040;
    --border-subtle: rgba(168, 168, 168, 0.1);
    --border-visible: rgba(168, 168, 168, 0.2);
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1200px;
    --accent-blue: #4f81e1;
    --status-green: #27ae60;
    --status-yellow: #e67e22;
    --status-red: #e74c3c;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-mono);
    background: var(--bg-black);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

::selection {
    background: rgba(168, 168, 168, 0.3);
    color: var(--text-bright);
}

::-webkit-scrollbar {
    width: 6px;
    height: 6px;
}

::-webkit-scrollbar-track {
    background: var(--bg-dark);
}

::-webkit-scrollbar-thumb {
    background: var(--text-muted);
    border-radius: 3px;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.dash-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

/* Top Bar */
.dash-nav {
    border-bottom: 1px solid var(--border-visible);
    background: var(--bg-black);
    padding: 12px 0;
    position: sticky;
    top: 0;
    z-index: 50;
}

.dash-nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
}

.dash-nav-title {
    font-weight: 600;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 13px;
    color: var(--text-bright);
}

.dash-nav-sub {
    font-size: 11px;
    color: var(--text-dim);
    margin-top: 2px;
}

.dash-nav-meta {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--text-dim);
    font-size: 11px;
}

.live-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--status-green);
    animation: pulse-dot 2s ease-in-out infinite;
}

/* Main */
.dash-main {
    flex: 1 0 auto;
    padding: 24px 0 60px;
}

/* Entry animation: components set --enter-delay per card */
.rise-in {
    animation: rise-in 500ms ease-out var(--enter-delay, 0ms) backwards;
}

/* Metric Strip */
.metric-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
    margin-bottom: 24px;
}

.metric-card {
    background: var(--bg-dark);
    border: 1px solid var(--border-visible);
    border-left: 3px solid var(--text-muted);
    border-radius: 8px;
    padding: 16px;
}

.metric-card.metric-success { border-left-color: var(--status-green); }
.metric-card.metric-warning { border-left-color: var(--status-yellow); }
.metric-card.metric-danger  { border-left-color: var(--status-red); }

.metric-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
    margin-bottom: 8px;
}

.metric-title {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-dim);
}

.metric-icon {
    color: var(--text-muted);
    flex-shrink: 0;
}

.metric-value {
    font-size: 26px;
    font-weight: 600;
    color: var(--text-bright);
    line-height: 1.2;
}

.metric-foot {
    display: flex;
    align-items: baseline;
    gap: 8px;
    margin-top: 6px;
    font-size: 11px;
}

.trend-badge {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    font-weight: 600;
}

.trend-up   { color: var(--status-green); }
.trend-down { color: var(--status-red); }
.trend-flat { color: var(--text-dim); }

.trend-note {
    color: var(--text-muted);
}

.metric-sparkline {
    display: block;
    width: 100%;
    height: 40px;
    margin-top: 10px;
}

.spark-line {
    fill: none;
    stroke: var(--accent-blue);
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.spark-fill {
    fill: rgba(79, 129, 225, 0.12);
    stroke: none;
}

/* Panel Grid */
.dash-columns {
    display: grid;
    grid-template-columns: minmax(0, 3fr) minmax(0, 2fr);
    gap: 16px;
    align-items: start;
}

.dash-col {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.panel {
    background: var(--bg-dark);
    border: 1px solid var(--border-visible);
    border-radius: 8px;
    padding: 16px 20px;
}

.panel-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    margin-bottom: 12px;
}

.panel-title {
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-bright);
    font-weight: 600;
    margin: 0;
}

.panel-hint {
    font-size: 11px;
    color: var(--text-muted);
}

/* Status Dots */
.status-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    flex-shrink: 0;
    animation: pulse-dot 2s ease-in-out infinite;
}

.status-green  { background: var(--status-green); }
.status-yellow { background: var(--status-yellow); }
.status-red    { background: var(--status-red); }

/* Meter Bars */
.meter {
    height: 6px;
    border-radius: 3px;
    background: var(--bg-mid);
    overflow: hidden;
}

.meter-fill {
    height: 100%;
    border-radius: 3px;
    background: var(--accent-blue);
    width: var(--fill-target, 0%);
    animation: bar-fill var(--fill-duration, 1000ms) var(--fill-ease, ease-out) var(--fill-delay, 0ms) backwards;
}

.meter-green  { background: var(--status-green); }
.meter-yellow { background: var(--status-yellow); }
.meter-red    { background: var(--status-red); }

.meter-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
    font-size: 11px;
    color: var(--text-dim);
    margin-bottom: 4px;
}

.meter-row .value {
    color: var(--text-bright);
}

/* Departments */
.dept-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 12px;
}

.dept-card {
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
    padding: 12px 14px;
    background: var(--bg-black);
}

.dept-head {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 10px;
}

.dept-name {
    font-size: 12px;
    font-weight: 600;
    color: var(--text-bright);
    flex: 1;
}

.dept-block {
    margin-bottom: 10px;
}

.budget-pct-green  { color: var(--status-green); }
.budget-pct-yellow { color: var(--status-yellow); }
.budget-pct-red    { color: var(--status-red); }

.dept-stats {
    display: flex;
    flex-wrap: wrap;
    gap: 4px 12px;
    font-size: 10px;
    color: var(--text-muted);
    border-top: 1px solid var(--border-subtle);
    padding-top: 8px;
}

.dept-stats .value {
    color: var(--text-dim);
}

/* Priorities */
.prio-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.prio-list.collapsed .prio-row:nth-child(n + 5) {
    display: none;
}

.view-all {
    display: block;
    width: 100%;
    margin-top: 10px;
    padding: 6px 0;
    background: transparent;
    border: 1px solid var(--border-subtle);
    border-radius: 3px;
    color: var(--text-dim);
    font-family: inherit;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    cursor: pointer;
}

.view-all:hover {
    border-color: var(--accent-blue);
    color: var(--text-bright);
}

.prio-row {
    padding: 10px 0;
    border-bottom: 1px solid var(--border-subtle);
}

.prio-row:last-child {
    border-bottom: none;
}

.prio-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 10px;
    margin-bottom: 6px;
}

.prio-title {
    font-size: 12px;
    color: var(--text-bright);
    flex: 1;
    min-width: 0;
}

.prio-chip {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    padding: 2px 8px;
    border-radius: 10px;
    border: 1px solid;
    white-space: nowrap;
}

.prio-on-track {
    color: var(--status-green);
    border-color: rgba(39, 174, 96, 0.4);
    background: rgba(39, 174, 96, 0.08);
}

.prio-at-risk {
    color: var(--status-yellow);
    border-color: rgba(230, 126, 34, 0.4);
    background: rgba(230, 126, 34, 0.08);
}

.prio-delayed {
    color: var(--status-red);
    border-color: rgba(231, 76, 60, 0.4);
    background: rgba(231, 76, 60, 0.08);
}

.prio-foot {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 10px;
    margin-top: 6px;
    font-size: 10px;
    color: var(--text-muted);
}

.prio-foot .value {
    color: var(--text-dim);
}

.owner {
    display: flex;
    align-items: center;
    gap: 6px;
}

.owner-avatar {
    width: 18px;
    height: 18px;
    border-radius: 50%;
    object-fit: cover;
    border: 1px solid var(--border-visible);
}

.owner-fallback {
    width: 18px;
    height: 18px;
    border-radius: 50%;
    background: var(--bg-mid);
    color: var(--text-dim);
    display: inline-flex;
    align-items: center;
    justify-content: center;
    font-size: 9px;
    border: 1px solid var(--border-visible);
}

/* Risk Radar */
.radar {
    position: relative;
    width: 100%;
    max-width: 260px;
    aspect-ratio: 1;
    margin: 0 auto 12px;
    border: 1px solid var(--border-visible);
    border-radius: 50%;
    background: radial-gradient(circle, rgba(79, 129, 225, 0.04), transparent 70%);
}

.radar-ring {
    position: absolute;
    border: 1px dashed var(--border-subtle);
    border-radius: 50%;
    inset: 25%;
}

.radar-axis-x,
.radar-axis-y {
    position: absolute;
    background: var(--border-subtle);
}

.radar-axis-x {
    left: 0;
    right: 0;
    top: 50%;
    height: 1px;
}

.radar-axis-y {
    top: 0;
    bottom: 0;
    left: 50%;
    width: 1px;
}

.radar-label {
    position: absolute;
    font-size: 9px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-muted);
}

.label-nw { top: 10%; left: 12%; }
.label-ne { top: 10%; right: 12%; }
.label-sw { bottom: 10%; left: 12%; }
.label-se { bottom: 10%; right: 12%; }

.radar-point {
    position: absolute;
    border: none;
    border-radius: 50%;
    padding: 0;
    cursor: pointer;
    transform: translate(-50%, -50%);
    transition: box-shadow 0.15s;
}

.radar-point:hover {
    box-shadow: 0 0 0 3px var(--border-visible);
}

.radar-point.selected {
    box-shadow: 0 0 0 3px rgba(79, 129, 225, 0.6);
}

.radar-legend {
    display: flex;
    justify-content: center;
    gap: 14px;
    font-size: 10px;
    color: var(--text-dim);
    margin-bottom: 8px;
}

.legend-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    display: inline-block;
    margin-right: 4px;
}

/* Risk Detail Panel */
.risk-panel {
    border: 1px solid var(--border-visible);
    border-radius: 8px;
    padding: 12px 14px;
    background: var(--bg-black);
    margin-top: 8px;
    font-size: 11px;
}

.risk-panel[hidden] {
    display: none;
}

.risk-panel-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
    margin-bottom: 8px;
}

.risk-panel-title {
    font-size: 12px;
    font-weight: 600;
    color: var(--text-bright);
    margin: 0;
}

.risk-severity {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-weight: 600;
    margin-left: auto;
}

.risk-close {
    background: transparent;
    border: none;
    color: var(--text-muted);
    font-family: inherit;
    font-size: 14px;
    line-height: 1;
    padding: 0 2px;
    cursor: pointer;
}

.risk-close:hover {
    color: var(--text-bright);
}

.risk-field {
    margin-bottom: 6px;
    color: var(--text-dim);
}

.risk-field-label {
    display: block;
    font-size: 9px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-muted);
    margin-bottom: 2px;
}

/* Health Gauge */
.gauge-wrap {
    display: flex;
    flex-direction: column;
    align-items: center;
    margin-bottom: 12px;
}

.gauge-track {
    fill: none;
    stroke: var(--bg-mid);
}

.gauge-arc {
    fill: none;
    stroke-linecap: round;
    stroke-dashoffset: var(--gauge-offset, 0);
    animation: gauge-sweep var(--gauge-duration, 1500ms) ease-out backwards;
}

.trend-pill {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    font-size: 11px;
    padding: 2px 10px;
    border-radius: 10px;
    border: 1px solid var(--border-visible);
    margin-top: 8px;
}

.attention-chip {
    display: inline-flex;
    align-items: center;
    gap: 5px;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--status-yellow);
    border: 1px solid rgba(230, 126, 34, 0.4);
    background: rgba(230, 126, 34, 0.08);
    padding: 3px 10px;
    border-radius: 10px;
    margin-top: 8px;
}

.factor-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.factor-row {
    padding: 6px 0;
}

/* Decision Queue */
.queue-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.queue-item {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 8px 0;
    border-bottom: 1px solid var(--border-subtle);
    font-size: 12px;
    color: var(--text-bright);
}

.queue-item:last-child {
    border-bottom: none;
}

.urgent-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    flex-shrink: 0;
    background: var(--text-muted);
}

.urgent-dot.urgent {
    background: var(--status-red);
    animation: pulse-dot 2s ease-in-out infinite;
}

.queue-totals {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 8px;
    margin-top: 12px;
    border-top: 1px solid var(--border-subtle);
    padding-top: 12px;
    text-align: center;
}

.total-num {
    font-size: 20px;
    font-weight: 600;
    color: var(--text-bright);
    line-height: 1.2;
}

.total-label {
    font-size: 9px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-muted);
}

/* Footer */
.dash-footer {
    border-top: 1px solid var(--border-visible);
    padding: 16px 0;
    font-size: 11px;
    color: var(--text-muted);
    flex-shrink: 0;
    margin-top: auto;
}

/* Keyframes */
@keyframes rise-in {
    from {
        opacity: 0;
        transform: translateY(8px);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

@keyframes bar-fill {
    from { width: 0; }
    to   { width: var(--fill-target, 0%); }
}

@keyframes gauge-sweep {
    from { stroke-dashoffset: var(--gauge-circumference, 0); }
    to   { stroke-dashoffset: var(--gauge-offset, 0); }
}

@keyframes pulse-dot {
    0%, 100% { opacity: 1; }
    50%      { opacity: 0.45; }
}

@media (prefers-reduced-motion: reduce) {
    .rise-in,
    .meter-fill,
    .gauge-arc,
    .status-dot,
    .live-dot,
    .urgent-dot.urgent {
        animation: none;
    }
}

/* Responsive */
@media (max-width: 960px) {
    .dash-columns {
        display: block;
    }
    .dash-col {
        margin-bottom: 16px;
    }
}
"#;

/// Content Security Policy header value
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
