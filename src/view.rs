//! View state for rendered tables and charts.
//!
//! The original report kept its presentation state in the DOM (row classes,
//! header sort flags, a module-level stripe counter). Here that state lives
//! in [`TableState`], an explicit value computed per table: the renderer
//! bakes it into the SSR output, and the in-page script re-derives the same
//! transitions on user events. Sorting and filtering only permute the view;
//! the backing record array is never reordered, so the positional
//! row-to-sector binding stays stable.

use std::f64::consts::PI;

use crate::types::{Category, Dataset};

/// Sort direction for a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// CSS class used on the sorted header cell.
    pub fn class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Zebra-stripe class assigned to a visible row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stripe {
    /// First, third, ... visible row
    Even,
    /// Second, fourth, ... visible row
    Odd,
}

impl Stripe {
    /// CSS class for this stripe.
    pub fn class(self) -> &'static str {
        match self {
            Stripe::Even => "even",
            Stripe::Odd => "odd",
        }
    }
}

/// Presentation state for one rendered table.
///
/// Tracks which rows are visible (major rows, plus minor rows once
/// revealed), the current sort permutation, and nothing else. All methods
/// are synchronous and idempotent per the latest toggled state.
#[derive(Clone, Debug)]
pub struct TableState {
    /// Per-record major flag, in backing-array order
    major: Vec<bool>,
    /// Visual order as a permutation of record indices
    order: Vec<usize>,
    /// Currently sorted column and direction, if any
    sort: Option<(usize, SortDirection)>,
    /// Whether minor rows are currently revealed
    minor_revealed: bool,
}

impl TableState {
    /// Initial state for a dataset: input order, minor rows hidden.
    ///
    /// A record is major iff its contribution percentage is at or above
    /// `threshold`.
    pub fn new(dataset: &Dataset, threshold: f64) -> Self {
        let major = dataset
            .records()
            .iter()
            .map(|r| r.contribution >= threshold)
            .collect::<Vec<_>>();
        let order = (0..major.len()).collect();
        TableState {
            major,
            order,
            sort: None,
            minor_revealed: false,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.major.len()
    }

    /// True when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.major.is_empty()
    }

    /// Number of minor rows (hidden while not revealed).
    pub fn hidden_count(&self) -> usize {
        self.major.iter().filter(|m| !**m).count()
    }

    /// Whether the record at `index` is classified major.
    pub fn is_major(&self, index: usize) -> bool {
        self.major.get(index).copied().unwrap_or(false)
    }

    /// Whether the record at `index` is currently displayed.
    pub fn is_visible(&self, index: usize) -> bool {
        self.minor_revealed || self.is_major(index)
    }

    /// Whether minor rows are currently revealed.
    pub fn minor_revealed(&self) -> bool {
        self.minor_revealed
    }

    /// Toggle minor-row visibility; returns the new revealed flag.
    pub fn toggle_minor(&mut self) -> bool {
        self.minor_revealed = !self.minor_revealed;
        self.minor_revealed
    }

    /// The current sort, if any.
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// Sort by `column`, toggling direction on a repeated sort.
    ///
    /// All rows participate (hidden ones included); visibility is not
    /// affected. Descending simply reverses the comparator, so sorting the
    /// same column twice yields the exact reverse order.
    pub fn sort_by(&mut self, dataset: &Dataset, column: usize) {
        let direction = match self.sort {
            Some((col, dir)) if col == column => dir.flipped(),
            _ => SortDirection::Ascending,
        };
        let records = dataset.records();
        self.order.sort_by(|&a, &b| {
            let cmp = records[a].values[column].compare(&records[b].values[column]);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
        self.sort = Some((column, direction));
    }

    /// Record indices in visual order (hidden rows included).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Record indices of the displayed rows, in visual order.
    pub fn visible_order(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&i| self.is_visible(i))
            .collect()
    }

    /// Stripe assignment per record index: alternating classes over the
    /// displayed rows in visual order, `None` for hidden rows.
    pub fn stripes(&self) -> Vec<Option<Stripe>> {
        let mut stripes = vec![None; self.major.len()];
        for (pos, idx) in self.visible_order().into_iter().enumerate() {
            stripes[idx] = Some(if pos % 2 == 0 {
                Stripe::Even
            } else {
                Stripe::Odd
            });
        }
        stripes
    }
}

/// Proportional sector angles for a chart, as (start, end) radians.
///
/// Sectors start at twelve o'clock and run clockwise; each one's span is
/// its value's share of the total. A non-positive total yields zero-span
/// sectors so an empty chart still renders without error.
pub fn sector_angles(categories: &[Category]) -> Vec<(f64, f64)> {
    let total: f64 = categories.iter().map(|c| c.value.max(0.0)).sum();
    let mut angle = -PI / 2.0;
    categories
        .iter()
        .map(|c| {
            let span = if total > 0.0 {
                c.value.max(0.0) / total * 2.0 * PI
            } else {
                0.0
            };
            let start = angle;
            angle += span;
            (start, angle)
        })
        .collect()
}

/// Cross-highlight target for the positional index `index` out of `len`
/// sectors. The last index is the aggregate slot and never highlights.
pub fn hover_target(index: usize, len: usize) -> Option<usize> {
    if index + 1 < len { Some(index) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, FieldValue, Record};

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        Dataset::new(
            vec![Column::new("name", "Name"), Column::new("pct", "Pct")],
            rows.iter()
                .map(|(name, pct)| Record {
                    values: vec![FieldValue::text(*name), FieldValue::Float(*pct)],
                    contribution: *pct,
                    ..Default::default()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn threshold_hides_minor_rows() {
        // The worked example: A at 2.0, B at 0.5, threshold 1.0
        let ds = dataset(&[("A", 2.0), ("B", 0.5)]);
        let state = TableState::new(&ds, 1.0);

        assert!(state.is_visible(0));
        assert!(!state.is_visible(1));
        assert_eq!(state.hidden_count(), 1);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let ds = dataset(&[("A", 1.0)]);
        let state = TableState::new(&ds, 1.0);
        assert!(state.is_visible(0));
        assert_eq!(state.hidden_count(), 0);
    }

    #[test]
    fn toggle_twice_restores_visible_set() {
        let ds = dataset(&[("A", 2.0), ("B", 0.5), ("C", 0.2)]);
        let mut state = TableState::new(&ds, 1.0);
        let before = state.visible_order();

        assert!(state.toggle_minor());
        assert_eq!(state.visible_order(), vec![0, 1, 2]);
        assert!(!state.toggle_minor());
        assert_eq!(state.visible_order(), before);
    }

    #[test]
    fn sorting_same_column_twice_reverses() {
        let ds = dataset(&[("b", 3.0), ("a", 1.0), ("c", 2.0)]);
        let mut state = TableState::new(&ds, 0.0);

        state.sort_by(&ds, 0);
        assert_eq!(state.order(), &[1, 0, 2]);
        assert_eq!(state.sort(), Some((0, SortDirection::Ascending)));

        state.sort_by(&ds, 0);
        assert_eq!(state.order(), &[2, 0, 1]);
        assert_eq!(state.sort(), Some((0, SortDirection::Descending)));
    }

    #[test]
    fn sorting_numeric_column_uses_numeric_order() {
        let ds = dataset(&[("ten", 10.0), ("two", 2.0)]);
        let mut state = TableState::new(&ds, 0.0);
        state.sort_by(&ds, 1);
        assert_eq!(state.order(), &[1, 0]);
    }

    #[test]
    fn switching_columns_resets_to_ascending() {
        let ds = dataset(&[("b", 1.0), ("a", 2.0)]);
        let mut state = TableState::new(&ds, 0.0);
        state.sort_by(&ds, 0);
        state.sort_by(&ds, 0); // now descending on column 0
        state.sort_by(&ds, 1);
        assert_eq!(state.sort(), Some((1, SortDirection::Ascending)));
        assert_eq!(state.order(), &[0, 1]);
    }

    #[test]
    fn sorting_keeps_visibility() {
        let ds = dataset(&[("b", 2.0), ("a", 0.5)]);
        let mut state = TableState::new(&ds, 1.0);
        state.sort_by(&ds, 0);
        assert_eq!(state.order(), &[1, 0]);
        assert!(!state.is_visible(1));
        assert_eq!(state.visible_order(), vec![0]);
    }

    #[test]
    fn stripes_alternate_over_visible_rows_only() {
        let ds = dataset(&[("a", 2.0), ("b", 0.5), ("c", 3.0), ("d", 4.0)]);
        let state = TableState::new(&ds, 1.0);
        let stripes = state.stripes();

        assert_eq!(stripes[0], Some(Stripe::Even));
        assert_eq!(stripes[1], None); // hidden row carries no stripe
        assert_eq!(stripes[2], Some(Stripe::Odd));
        assert_eq!(stripes[3], Some(Stripe::Even));
    }

    #[test]
    fn stripes_restart_after_reveal() {
        let ds = dataset(&[("a", 2.0), ("b", 0.5), ("c", 3.0)]);
        let mut state = TableState::new(&ds, 1.0);
        state.toggle_minor();
        let stripes = state.stripes();
        assert_eq!(stripes[0], Some(Stripe::Even));
        assert_eq!(stripes[1], Some(Stripe::Odd));
        assert_eq!(stripes[2], Some(Stripe::Even));
    }

    #[test]
    fn sector_angles_are_proportional() {
        let categories = vec![
            Category {
                label: "a".into(),
                value: 1.0,
                color: "#111".into(),
            },
            Category {
                label: "b".into(),
                value: 3.0,
                color: "#222".into(),
            },
        ];
        let angles = sector_angles(&categories);

        assert_eq!(angles.len(), 2);
        let span0 = angles[0].1 - angles[0].0;
        let span1 = angles[1].1 - angles[1].0;
        assert!((span0 - PI / 2.0).abs() < 1e-9);
        assert!((span1 - 3.0 * PI / 2.0).abs() < 1e-9);
        // Contiguous: each sector starts where the previous ended
        assert!((angles[1].0 - angles[0].1).abs() < 1e-9);
    }

    #[test]
    fn sector_angles_survive_zero_total() {
        let categories = vec![Category::default(), Category::default()];
        for (start, end) in sector_angles(&categories) {
            assert_eq!(start, end);
        }
        assert!(sector_angles(&[]).is_empty());
    }

    #[test]
    fn hover_skips_last_index() {
        assert_eq!(hover_target(0, 3), Some(0));
        assert_eq!(hover_target(1, 3), Some(1));
        assert_eq!(hover_target(2, 3), None);
        assert_eq!(hover_target(0, 1), None);
        assert_eq!(hover_target(0, 0), None);
    }
}
