//! Table components - sortable/filterable dataset tables and plain tables.

use leptos::prelude::*;

use crate::types::{Dataset, PlainCell};
use crate::view::TableState;

/// Sortable, filterable table over a validated dataset.
///
/// Renders one row per record in input order, plus a trailing indicator
/// column colored per record. Rows the state classifies as minor are hidden
/// immediately and excluded from the initial stripe pass; when any exist,
/// the footer gains a toggle control labeled with the hidden count. Column
/// headers carry `data-col` so the app script can re-sort, flipping
/// direction on repeated clicks.
#[component]
pub fn SortableTable(
    /// DOM id of the table; rows get `{id}-row-{index}`
    id: String,
    /// Table data
    dataset: Dataset,
    /// Initial presentation state (visibility, stripes)
    state: TableState,
    /// Noun used in the footer toggle labels
    #[prop(default = "minor authors")]
    minor_noun: &'static str,
) -> impl IntoView {
    let column_count = dataset.columns().len() + 1;
    let hidden = state.hidden_count();
    let stripes = state.stripes();
    let show_label = format!("Display {minor_noun} ({hidden})");
    let hide_label = format!("Hide {minor_noun}");

    view! {
        <table class="stat" id=id.clone()>
            <thead>
                <tr>
                    {dataset
                        .columns()
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            // Built with the element API: the view! macro
                            // hoists `class` after the data-* attributes,
                            // but the emitted order is part of the output
                            // contract.
                            leptos::html::th()
                                .attr("class", "sortable")
                                .attr("data-col", i.to_string())
                                .attr("data-key", column.key.clone())
                                .child(column.label.clone())
                        })
                        .collect::<Vec<_>>()}
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {dataset
                    .records()
                    .iter()
                    .enumerate()
                    .map(|(i, record)| {
                        let visible = state.is_visible(i);
                        let stripe = stripes[i].map(|s| s.class()).unwrap_or("");
                        let cells = record
                            .values
                            .iter()
                            .map(|value| {
                                let text = value.to_string();
                                if value.is_markup() {
                                    view! {
                                        <td data-sort=text.clone() inner_html=text.clone()></td>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <td data-sort=text.clone()>{text.clone()}</td>
                                    }
                                        .into_any()
                                }
                            })
                            .collect::<Vec<_>>();
                        let indicator = view! {
                            <td class="indicator">
                                {record.color.clone().map(|color| view! {
                                    <svg width="30" height="30">
                                        <rect x="5" y="5" width="15" height="15" fill=color></rect>
                                    </svg>
                                })}
                            </td>
                        };
                        // Built with the element API: the view! macro hoists
                        // `class` after the data-* attributes, but the
                        // emitted order is part of the output contract.
                        leptos::html::tr()
                            .attr("id", format!("{id}-row-{i}"))
                            .attr("class", stripe)
                            .attr("data-index", i.to_string())
                            .attr("data-minor", (!state.is_major(i)).then_some("true"))
                            .attr("style", (!visible).then_some("display:none"))
                            .child(cells)
                            .child(indicator)
                    })
                    .collect::<Vec<_>>()}
            </tbody>
            {(hidden > 0).then(|| view! {
                <tfoot>
                    <tr>
                        <td
                            class="minor-toggle"
                            colspan=column_count.to_string()
                            data-count=hidden.to_string()
                            data-label-show=show_label.clone()
                            data-label-hide=hide_label.clone()
                        >
                            {show_label.clone()}
                        </td>
                    </tr>
                </tfoot>
            })}
        </table>
    }
}

/// Headerless, non-sortable table with severity-colored cells.
///
/// Used for findings lists where each row is free-form; rows are striped
/// once at render time and never re-sorted.
#[component]
pub fn PlainTable(
    /// DOM id of the table
    id: String,
    /// Rows of cells; arity may vary per row
    rows: Vec<Vec<PlainCell>>,
) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="muted">"None"</p> }.into_any();
    }

    view! {
        <table class="stat" id=id>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, cells)| {
                        let stripe = if i % 2 == 0 { "even" } else { "odd" };
                        view! {
                            <tr class=stripe>
                                {cells
                                    .into_iter()
                                    .map(|cell| {
                                        let class = cell
                                            .severity
                                            .map(|s| format!("severity-{}", s.class()))
                                            .unwrap_or_default();
                                        view! { <td class=class>{cell.text}</td> }
                                    })
                                    .collect::<Vec<_>>()}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
