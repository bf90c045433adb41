//! Leptos UI components for rendering HTML reports.
//!
//! Each component is a Leptos `#[component]` function; they compose into
//! the full report page but can also be used directly for custom layouts.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── summary panel (navigation over sections)
//! ├── introduction panel
//! └── CollapsibleSection (per report panel)
//!     ├── SortableTable + PieChart   (charted panels)
//!     └── PlainTable                 (plain panels)
//! ```

mod chart;
mod document;
mod icons;
mod section;
mod table;

pub use chart::PieChart;
pub use document::ReportDocument;
pub use icons::*;
pub use section::CollapsibleSection;
pub use table::{PlainTable, SortableTable};
