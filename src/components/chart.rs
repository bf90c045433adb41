//! Proportional sector chart component - SVG donut rendering.

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::types::Category;
use crate::view::{hover_target, sector_angles};

const CHART_SIZE: f64 = 220.0;
const OUTER_RADIUS: f64 = 100.0;
// Donut hole: inner radius is outer/2.5
const INNER_RADIUS: f64 = OUTER_RADIUS / 2.5;

/// Donut chart with one sector per category.
///
/// Sector *i* carries the DOM id `{id}-sector-{i}` so the app script can
/// link it to row `{id}-row-{i}` of the matching table. The last sector is
/// marked as the aggregate slot and is exempt from hover highlighting.
#[component]
pub fn PieChart(
    /// Id stem shared with the matching table
    id: String,
    /// Sectors, positionally bound to the table's records
    categories: Vec<Category>,
) -> impl IntoView {
    let count = categories.len();
    let angles = sector_angles(&categories);
    let center = CHART_SIZE / 2.0;

    view! {
        <div class="chart-wrap">
            <svg
                viewBox=format!("0 0 {CHART_SIZE} {CHART_SIZE}")
                width="220"
                height="220"
                data-chart=id.clone()
            >
                {categories
                    .into_iter()
                    .zip(angles)
                    .enumerate()
                    .map(|(i, (category, (start, end)))| {
                        let aggregate = hover_target(i, count).is_none();
                        view! {
                            <path
                                class="sector"
                                id=format!("{id}-sector-{i}")
                                data-index=i.to_string()
                                data-aggregate=if aggregate { "true" } else { "false" }
                                fill=category.color.clone()
                                fill-rule="evenodd"
                                d=donut_slice_path(center, center, OUTER_RADIUS, INNER_RADIUS, start, end)
                            >
                                <title>{format!("{} ({})", category.label, category.value)}</title>
                            </path>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </div>
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for one donut slice from `start` to `end` radians.
///
/// A full-circle span cannot be drawn as a single arc command, so it is
/// rendered as two concentric circles under the evenodd fill rule. A
/// zero-span slice yields an empty path (invisible, but the DOM node still
/// exists to keep positional ids stable).
pub(crate) fn donut_slice_path(
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    let span = end - start;
    if span <= 0.0 {
        return String::new();
    }
    if span >= 2.0 * PI - 1e-9 {
        return format!(
            "M{:.2} {:.2} a{o:.2} {o:.2} 0 1 0 {d:.2} 0 a{o:.2} {o:.2} 0 1 0 -{d:.2} 0 \
             M{:.2} {:.2} a{i:.2} {i:.2} 0 1 0 {e:.2} 0 a{i:.2} {i:.2} 0 1 0 -{e:.2} 0 Z",
            cx - outer,
            cy,
            cx - inner,
            cy,
            o = outer,
            d = outer * 2.0,
            i = inner,
            e = inner * 2.0,
        );
    }

    let large = if span > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M{x0:.2} {y0:.2} A{outer:.2} {outer:.2} 0 {large} 1 {x1:.2} {y1:.2} \
         L{x2:.2} {y2:.2} A{inner:.2} {inner:.2} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_path_uses_arc_commands() {
        let d = donut_slice_path(110.0, 110.0, 100.0, 40.0, -PI / 2.0, 0.0);
        assert!(d.starts_with('M'));
        assert_eq!(d.matches('A').count(), 2);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn wide_slice_sets_large_arc_flag() {
        let narrow = donut_slice_path(110.0, 110.0, 100.0, 40.0, 0.0, PI / 2.0);
        let wide = donut_slice_path(110.0, 110.0, 100.0, 40.0, 0.0, 1.5 * PI);
        assert!(narrow.contains(" 0 1 "));
        assert!(wide.contains(" 1 1 "));
    }

    #[test]
    fn full_circle_renders_as_ring() {
        let d = donut_slice_path(110.0, 110.0, 100.0, 40.0, -PI / 2.0, 1.5 * PI);
        // Two subpaths (outer and inner circle), no straight edges
        assert_eq!(d.matches('M').count(), 2);
        assert!(!d.contains('L'));
    }

    #[test]
    fn zero_span_yields_empty_path() {
        assert!(donut_slice_path(110.0, 110.0, 100.0, 40.0, 1.0, 1.0).is_empty());
    }
}
