//! CSS styles for the HTML report.
//!
//! The complete stylesheet is embedded as a constant and inlined into the
//! generated document, so reports stay a single self-contained file that
//! works offline.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use gitstat_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Complete CSS for the report - dark monospace theme.
///
/// Covers:
/// - Base typography and spacing
/// - Fixed summary panel, introduction panel, and main content layout
/// - Table styling with zebra stripes and hover highlighting
/// - Sort-direction arrows on sortable headers
/// - Pie sector highlighting and the minor-rows footer toggle
/// - Collapsible section headers with rotating caret
pub const REPORT_CSS: &str = r#"
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
    --accent-blue: #4f81e1;
    --accent-orange: #e67e22;
    --accent-red: #dc2626;
    --accent-green: #059669;
    --summary-width: 240px;
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

/* Fixed summary panel */
#summary_div {
    position: fixed;
    top: 0;
    left: 0;
    bottom: 0;
    width: var(--summary-width);
    border-right: 1px solid var(--border-visible);
    background: var(--bg-dark);
    padding: 20px 16px;
    font-size: 12px;
    overflow: auto;
}

#summary_div .logo {
    display: flex;
    align-items: center;
    gap: 10px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border-subtle);
    margin-bottom: 16px;
}

#summary_div .logo .logo-title {
    font-weight: 600;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 11px;
}

#summary_div .logo .logo-project {
    color: var(--text-dim);
    font-size: 11px;
}

#summary_ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

#summary_ul li {
    margin-bottom: 2px;
}

#summary_ul a {
    color: var(--text-dim);
    text-decoration: none;
    display: block;
    padding: 4px 8px;
    border-radius: 3px;
    transition: all 0.15s;
}

#summary_ul a:hover {
    color: var(--text-bright);
    background: var(--bg-mid);
}

/* Introduction and main panels; left offset is recomputed on resize */
#introduction_div {
    margin-left: calc(var(--summary-width) + 32px);
    padding: 24px 24px 0 0;
    color: var(--text-dim);
    max-width: 900px;
}

#introduction_div h1 {
    color: var(--text-bright);
    font-size: 18px;
    margin: 0 0 8px;
}

#report_main {
    margin-left: calc(var(--summary-width) + 32px);
    padding: 8px 24px 48px 0;
    max-width: 1100px;
}

/* Collapsible sections */
.report-section {
    margin-top: 28px;
}

.section-header {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 14px;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    cursor: pointer;
    user-select: none;
    margin: 0 0 12px;
}

.section-header .caret {
    transition: transform 0.15s;
    transform: rotate(-90deg);
}

.section-header.open .caret {
    transform: rotate(0deg);
}

.section-box {
    border: 1px solid var(--border-subtle);
    border-radius: 4px;
    padding: 16px;
    background: var(--bg-dark);
}

.panel-flex {
    display: flex;
    gap: 24px;
    align-items: flex-start;
    flex-wrap: wrap;
}

.panel-flex .table-wrap {
    flex: 1 1 420px;
    min-width: 0;
    overflow-x: auto;
}

/* Tables */
table.stat {
    border-collapse: collapse;
    width: 100%;
    font-size: 12px;
}

table.stat th,
table.stat td {
    padding: 6px 10px;
    text-align: left;
    border-bottom: 1px solid var(--border-subtle);
}

table.stat thead th {
    color: var(--text-dim);
    font-weight: 600;
    text-transform: uppercase;
    font-size: 10px;
    letter-spacing: 0.15em;
    white-space: nowrap;
}

table.stat thead th.sortable {
    cursor: pointer;
    user-select: none;
}

table.stat thead th.sortable:hover {
    color: var(--text-bright);
}

table.stat thead th.sortable::after {
    content: ' ';
    display: inline-block;
    width: 10px;
    opacity: 0.6;
}

table.stat thead th.sortable.asc::after {
    content: ' \2227';
}

table.stat thead th.sortable.desc::after {
    content: ' \2228';
}

table.stat tbody tr.odd {
    background: var(--bg-mid);
}

table.stat tbody tr:hover,
table.stat tbody tr.hovered {
    background: rgba(79, 129, 225, 0.18);
}

table.stat td.indicator {
    width: 34px;
    padding: 2px 4px;
}

table.stat td.severity-high {
    color: var(--accent-red);
}

table.stat td.severity-medium {
    color: var(--accent-orange);
}

table.stat td.severity-low {
    color: var(--accent-green);
}

/* Minor-rows footer toggle */
table.stat tfoot td.minor-toggle {
    cursor: pointer;
    user-select: none;
    color: var(--accent-blue);
    border-bottom: none;
    padding-top: 10px;
}

table.stat tfoot td.minor-toggle:hover {
    text-decoration: underline;
}

/* Pie chart */
.chart-wrap {
    flex: 0 0 auto;
}

.chart-wrap svg {
    display: block;
}

.chart-wrap path.sector {
    stroke: var(--bg-black);
    stroke-width: 1.5;
    transition: filter 0.1s;
}

.chart-wrap path.sector.lit {
    filter: brightness(1.4);
}

.muted {
    color: var(--text-dim);
    font-size: 12px;
}

@media (max-width: 960px) {
    #summary_div {
        display: none;
    }

    #introduction_div,
    #report_main {
        margin-left: 0;
        padding-left: 24px;
    }
}
"#;

/// Content Security Policy for the generated document.
///
/// Reports are fully self-contained: inline styles and the inline app
/// script are allowed, all network directions are closed.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
