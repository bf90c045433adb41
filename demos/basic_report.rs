//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use gitstat_report::types::{
    Category, ChartedPanel, Column, Dataset, FieldValue, Panel, PlainCell, PlainPanel, Record,
    Report, Severity,
};
use gitstat_report::{RenderOptions, render_report};

fn author(name: &str, commits: i64, insertions: i64, pct: f64, color: &str) -> Record {
    Record {
        values: vec![
            FieldValue::text(name),
            FieldValue::Int(commits),
            FieldValue::Int(insertions),
            FieldValue::Float(pct),
        ],
        contribution: pct,
        color: Some(color.into()),
    }
}

fn main() {
    let columns = vec![
        Column::new("author", "Author"),
        Column::new("commits", "Commits"),
        Column::new("insertions", "Insertions"),
        Column::new("pct", "% of changes"),
    ];

    let dataset = Dataset::new(
        columns,
        vec![
            author("Ada Lovelace", 240, 12800, 61.0, "#4f81e1"),
            author("Grace Hopper", 151, 7400, 36.5, "#e67e22"),
            author("One-off Contributor", 3, 90, 0.4, "#dc2626"),
        ],
    )
    .expect("record arity matches columns");

    let changes = ChartedPanel {
        id: "changes".into(),
        title: "Changes".into(),
        dataset,
        categories: vec![
            Category {
                label: "Ada Lovelace".into(),
                value: 61.0,
                color: "#4f81e1".into(),
            },
            Category {
                label: "Grace Hopper".into(),
                value: 36.5,
                color: "#e67e22".into(),
            },
            Category {
                label: "Minor authors".into(),
                value: 0.4,
                color: "#404040".into(),
            },
        ],
    };

    let metrics = PlainPanel {
        id: "metrics".into(),
        title: "Metrics".into(),
        rows: vec![
            vec![
                PlainCell::new("src/renderer.rs"),
                PlainCell::severe("1450 lines", Severity::High),
            ],
            vec![
                PlainCell::new("src/model.rs"),
                PlainCell::severe("620 lines", Severity::Medium),
            ],
        ],
    };

    let report = Report {
        project: "demo-repo".into(),
        intro: vec![
            "Repository statistics for the default branch.".into(),
            "Contributors below the minor threshold are hidden; use the table footer to reveal them.".into(),
        ],
        panels: vec![Panel::Charted(changes), Panel::Plain(metrics)],
    };

    let html = render_report(&report, &RenderOptions::default());

    let output_path = "basic_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
