//! # gitstat-report
//!
//! Leptos SSR renderer for interactive repository statistics reports.
//!
//! This crate turns already-computed statistics (per-author tables,
//! categorical breakdowns) into a single self-contained HTML file:
//! sortable tables, proportional sector charts with bidirectional hover
//! highlighting, collapsible sections, and a minor-contributor filter.
//! All the statistics themselves are computed elsewhere; this is the
//! presentation layer only.
//!
//! ## Features
//!
//! - **Self-contained output** - inline CSS and script, works offline
//! - **Component-Based** - modular, reusable UI components
//! - **Type-Safe** - validated column sets instead of duck-typed rows
//! - **Testable interaction model** - sorting, filtering, and striping are
//!   pure functions in [`view`], baked into the SSR output and mirrored by
//!   the in-page script
//!
//! ## Quick Start
//!
//! ```rust
//! use gitstat_report::{RenderOptions, render_report, types::Report};
//!
//! let report = Report {
//!     project: "my-repo".into(),
//!     intro: vec!["Statistics for the current branch.".into()],
//!     ..Default::default()
//! };
//!
//! let html = render_report(&report, &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for report content
//! - [`view`] - Presentation state (visibility, sort order, stripes, angles)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML
//! generation, with runtime interactivity wired by a small inline script.

#![doc(html_root_url = "https://docs.rs/gitstat-report/0.3.2")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;
pub mod view;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::Report;

/// Render configuration for a report.
///
/// # Example
///
/// ```rust
/// use gitstat_report::RenderOptions;
///
/// // Hide contributors below half a percent
/// let options = RenderOptions {
///     minor_threshold: 0.5,
/// };
/// assert!(options.minor_threshold < RenderOptions::default().minor_threshold);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Contribution percentage below which a record is classified minor
    /// and hidden until revealed. Records at the threshold stay visible.
    pub minor_threshold: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            minor_threshold: 1.0,
        }
    }
}

/// Render a complete HTML report.
///
/// This is the main entry point. It takes a [`Report`] and produces a
/// complete HTML document as a string, including `<!DOCTYPE html>`.
///
/// Rendering never fails: empty datasets produce empty tables and charts,
/// and panels are independent of one another.
///
/// # Example
///
/// ```rust
/// use gitstat_report::{RenderOptions, render_report, types::Report};
///
/// let report = Report {
///     project: "demo".into(),
///     ..Default::default()
/// };
///
/// let html = render_report(&report, &RenderOptions::default());
/// assert!(html.contains("demo"));
/// ```
pub fn render_report(report: &Report, options: &RenderOptions) -> String {
    let doc = view! {
        <ReportDocument report=report.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{
        Category, ChartedPanel, Column, Dataset, FieldValue, Panel, PlainCell, PlainPanel, Record,
        Severity,
    };

    fn author_record(name: &str, commits: i64, pct: f64, color: &str) -> Record {
        Record {
            values: vec![
                FieldValue::text(name),
                FieldValue::Int(commits),
                FieldValue::Float(pct),
            ],
            contribution: pct,
            color: Some(color.into()),
        }
    }

    fn changes_panel() -> ChartedPanel {
        let dataset = Dataset::new(
            vec![
                Column::new("author", "Author"),
                Column::new("commits", "Commits"),
                Column::new("pct", "% of changes"),
            ],
            vec![
                author_record("Ada", 120, 80.0, "#4f81e1"),
                author_record("Grace", 30, 19.5, "#e67e22"),
                author_record("Drive-by", 1, 0.5, "#dc2626"),
            ],
        )
        .unwrap();

        ChartedPanel {
            id: "changes".into(),
            title: "Changes".into(),
            dataset,
            categories: vec![
                Category {
                    label: "Ada".into(),
                    value: 80.0,
                    color: "#4f81e1".into(),
                },
                Category {
                    label: "Grace".into(),
                    value: 19.5,
                    color: "#e67e22".into(),
                },
                Category {
                    label: "Minor authors".into(),
                    value: 0.5,
                    color: "#404040".into(),
                },
            ],
        }
    }

    fn sample_report() -> Report {
        Report {
            project: "test-repo".into(),
            intro: vec!["Statistics for the default branch.".into()],
            panels: vec![
                Panel::Charted(changes_panel()),
                Panel::Plain(PlainPanel {
                    id: "metrics".into(),
                    title: "Metrics".into(),
                    rows: vec![
                        vec![
                            PlainCell::new("src/big_module.rs"),
                            PlainCell::severe("1200 lines", Severity::High),
                        ],
                        vec![
                            PlainCell::new("src/ok_module.rs"),
                            PlainCell::severe("300 lines", Severity::Low),
                        ],
                    ],
                }),
            ],
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = Report::default();
        let html = render_report(&report, &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("summary_div"));
        assert!(html.contains("summary_ul"));
        assert!(html.contains("introduction_div"));
    }

    #[test]
    fn renders_one_row_per_record_in_input_order() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert_eq!(html.matches("id=\"changes-row-").count(), 3);
        let ada = html.find("id=\"changes-row-0\"").unwrap();
        let grace = html.find("id=\"changes-row-1\"").unwrap();
        let minor = html.find("id=\"changes-row-2\"").unwrap();
        assert!(ada < grace && grace < minor);
    }

    #[test]
    fn minor_rows_are_hidden_and_unstriped() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        // Drive-by is below the default 1.0 threshold
        let row = html.find("id=\"changes-row-2\"").unwrap();
        let row_tag = &html[..html[row..].find('>').unwrap() + row];
        let row_tag = &row_tag[row_tag.rfind("<tr").unwrap()..];
        assert!(row_tag.contains("display:none"));
        assert!(row_tag.contains("data-minor=\"true\""));
        assert!(!row_tag.contains("even") && !row_tag.contains("odd"));
    }

    #[test]
    fn visible_rows_stripe_alternately() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("id=\"changes-row-0\" class=\"even\""));
        assert!(html.contains("id=\"changes-row-1\" class=\"odd\""));
    }

    #[test]
    fn footer_shows_hidden_count() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("minor-toggle"));
        assert!(html.contains("Display minor authors (1)"));
        assert!(html.contains("Hide minor authors"));
    }

    #[test]
    fn no_footer_when_nothing_is_hidden() {
        let options = RenderOptions {
            minor_threshold: 0.0,
        };
        let html = render_report(&sample_report(), &options);
        assert!(!html.contains("<tfoot"));
        assert!(!html.contains("Display minor authors"));
    }

    #[test]
    fn headers_are_sortable() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("class=\"sortable\" data-col=\"0\" data-key=\"author\""));
        assert!(html.contains("data-key=\"commits\""));
        assert!(html.contains("data-key=\"pct\""));
    }

    #[test]
    fn chart_sectors_are_positional_and_last_is_aggregate() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert_eq!(html.matches("id=\"changes-sector-").count(), 3);
        assert!(html.contains("id=\"changes-sector-0\" data-index=\"0\" data-aggregate=\"false\""));
        assert!(html.contains("id=\"changes-sector-2\" data-index=\"2\" data-aggregate=\"true\""));
        assert!(html.contains("data-chart=\"changes\""));
    }

    #[test]
    fn indicator_squares_use_record_colors() {
        let html = render_report(&sample_report(), &RenderOptions::default());
        assert!(html.contains("class=\"indicator\""));
        assert!(html.contains("fill=\"#4f81e1\""));
    }

    #[test]
    fn summary_panel_links_every_section() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("href=\"#changes_section\""));
        assert!(html.contains("href=\"#metrics_section\""));
        assert!(html.contains("id=\"changes_section\""));
        assert!(html.contains("data-toggle=\"changes_box\""));
        assert!(html.contains("id=\"changes_box\""));
    }

    #[test]
    fn plain_table_colors_severity_cells() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("id=\"metrics_table\""));
        assert!(html.contains("class=\"severity-high\""));
        assert!(html.contains("class=\"severity-low\""));
    }

    #[test]
    fn markup_cells_are_injected_verbatim() {
        let dataset = Dataset::new(
            vec![Column::new("file", "File")],
            vec![Record {
                values: vec![FieldValue::markup("<code>main.rs</code>")],
                contribution: 100.0,
                ..Default::default()
            }],
        )
        .unwrap();
        let report = Report {
            project: "markup".into(),
            panels: vec![Panel::Charted(ChartedPanel {
                id: "files".into(),
                title: "Files".into(),
                dataset,
                categories: vec![],
            })],
            ..Default::default()
        };

        let html = render_report(&report, &RenderOptions::default());
        assert!(html.contains("<code>main.rs</code>"));
    }

    #[test]
    fn document_is_self_contained() {
        let html = render_report(&sample_report(), &RenderOptions::default());

        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        // No external asset references
        assert!(!html.contains("src=\"http"));
    }
}
