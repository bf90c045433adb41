//! Report data types for structuring statistics results.
//!
//! These types define the data model for reports. They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Create partial reports with `..Default::default()`
//!
//! The column set of a table is fixed and validated up front: a [`Dataset`]
//! refuses records whose arity disagrees with its columns, so components can
//! index cells positionally without runtime lookups by field name.
//!
//! # Example
//!
//! ```rust
//! use gitstat_report::types::{Column, Dataset, FieldValue, Record};
//!
//! let dataset = Dataset::new(
//!     vec![
//!         Column::new("author", "Author"),
//!         Column::new("commits", "Commits"),
//!     ],
//!     vec![Record {
//!         values: vec![FieldValue::text("Ada"), FieldValue::Int(42)],
//!         contribution: 97.5,
//!         color: Some("#4f81e1".into()),
//!     }],
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.records().len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when report input data is malformed.
#[derive(Debug, Error)]
pub enum DataError {
    /// A record's value count doesn't match the column set.
    #[error("record {index} has {got} values but the table defines {expected} columns")]
    ColumnArity {
        /// Zero-based index of the offending record
        index: usize,
        /// Number of columns the table defines
        expected: usize,
        /// Number of values the record carries
        got: usize,
    },
    /// Two columns share the same key.
    #[error("duplicate column key `{0}`")]
    DuplicateColumn(String),
}

/// A single cell value: number, text, or pre-rendered markup.
///
/// Markup cells are injected into the table verbatim (via `inner_html`), so
/// they must come from a trusted producer. For sorting, numeric values
/// compare numerically and everything else compares as case-insensitive
/// text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value
    Int(i64),
    /// Floating-point value (percentages, averages)
    Float(f64),
    /// Plain text, HTML-escaped on render
    Text(String),
    /// Pre-rendered HTML fragment, injected verbatim
    Markup {
        /// The raw HTML fragment
        html: String,
    },
}

impl FieldValue {
    /// Shorthand for a text value.
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Shorthand for a markup value.
    pub fn markup(html: impl Into<String>) -> Self {
        FieldValue::Markup { html: html.into() }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// True if the cell should be rendered with `inner_html`.
    pub fn is_markup(&self) -> bool {
        matches!(self, FieldValue::Markup { .. })
    }

    /// Sort comparator: numeric when both sides are numeric, otherwise
    /// case-insensitive text. NaN compares equal rather than poisoning the
    /// sort.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self
                .to_string()
                .to_lowercase()
                .cmp(&other.to_string().to_lowercase()),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Markup { html } => f.write_str(html),
        }
    }
}

/// A displayed table column: stable key plus header label.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Column {
    /// Stable field key (used in DOM data attributes)
    pub key: String,
    /// Header label shown to the reader
    pub label: String,
}

impl Column {
    /// Create a column from key and label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One data row: one value per column plus the major/minor classifier.
///
/// `contribution` is the record's contribution percentage; rows below the
/// configured threshold are classified as minor and hidden initially.
/// `color` matches the record to its chart sector (and fills the trailing
/// indicator square).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Record {
    /// Cell values, positionally aligned with the dataset's columns
    pub values: Vec<FieldValue>,
    /// Contribution percentage used for major/minor classification
    pub contribution: f64,
    /// Indicator/sector color (CSS color value)
    #[serde(default)]
    pub color: Option<String>,
}

/// A validated table: fixed column set plus records of matching arity.
///
/// Records keep their input order for the lifetime of the dataset; sorting
/// and filtering are view-level permutations and never reorder the backing
/// array (the positional row-to-sector binding depends on that).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, validating column keys and record arity.
    pub fn new(columns: Vec<Column>, records: Vec<Record>) -> Result<Self, DataError> {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.key == col.key) {
                return Err(DataError::DuplicateColumn(col.key.clone()));
            }
        }
        for (index, record) in records.iter().enumerate() {
            if record.values.len() != columns.len() {
                return Err(DataError::ColumnArity {
                    index,
                    expected: columns.len(),
                    got: record.values.len(),
                });
            }
        }
        Ok(Dataset { columns, records })
    }

    /// The displayed columns, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The records, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

/// A labeled chart sector: value decides its angular share, color its fill.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Category {
    /// Sector label (shown in the tooltip title)
    pub label: String,
    /// Numeric value; the sector's angle is proportional to it
    pub value: f64,
    /// Fill color (CSS color value)
    pub color: String,
}

/// Severity attached to a plain-table cell, colors the cell text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational
    Low,
    /// Worth reviewing
    Medium,
    /// Needs attention
    High,
}

impl Severity {
    /// CSS class for this severity.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// One cell of a plain (non-sortable) table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlainCell {
    /// Cell text
    pub text: String,
    /// Optional severity coloring
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl PlainCell {
    /// Plain cell without severity.
    pub fn new(text: impl Into<String>) -> Self {
        PlainCell {
            text: text.into(),
            severity: None,
        }
    }

    /// Cell colored by severity.
    pub fn severe(text: impl Into<String>, severity: Severity) -> Self {
        PlainCell {
            text: text.into(),
            severity: Some(severity),
        }
    }
}

/// A headerless, non-sortable table panel (e.g. metrics findings).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlainPanel {
    /// DOM id stem for the panel's table
    pub id: String,
    /// Section title
    pub title: String,
    /// Rows of cells; rows may have differing arity
    pub rows: Vec<Vec<PlainCell>>,
}

/// A sortable table paired with a proportional sector chart.
///
/// The chart's categories are positionally bound to the dataset's records:
/// sector *i* belongs to record *i*. The categories array may carry one
/// trailing aggregate slot (the "minor authors" remainder) with no matching
/// row; that last index is exempt from hover highlighting.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChartedPanel {
    /// DOM id stem for the panel's table and chart
    pub id: String,
    /// Section title
    pub title: String,
    /// The table data
    pub dataset: Dataset,
    /// Chart sectors, positionally bound to the records
    pub categories: Vec<Category>,
}

/// One report section: either a table/chart pair or a plain table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Sortable table with linked pie chart
    Charted(ChartedPanel),
    /// Plain severity-colored table
    Plain(PlainPanel),
}

impl Panel {
    /// The panel's DOM id stem.
    pub fn id(&self) -> &str {
        match self {
            Panel::Charted(p) => &p.id,
            Panel::Plain(p) => &p.id,
        }
    }

    /// The panel's section title.
    pub fn title(&self) -> &str {
        match self {
            Panel::Charted(p) => &p.title,
            Panel::Plain(p) => &p.title,
        }
    }
}

/// A complete report: project identity, introduction, and panels.
///
/// This is the main data structure passed to [`crate::render_report`].
///
/// # Example
///
/// ```rust
/// use gitstat_report::types::Report;
///
/// let report = Report {
///     project: "my-repo".into(),
///     intro: vec!["Statistics for the last 12 months.".into()],
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Report {
    /// Project name shown in the header and summary panel
    pub project: String,
    /// Introduction paragraphs
    #[serde(default)]
    pub intro: Vec<String>,
    /// Report sections in display order
    #[serde(default)]
    pub panels: Vec<Panel>,
}
