//! Collapsible report section - clickable header plus hideable panel.

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon};

/// A titled section whose body collapses when the header is clicked.
///
/// Open/closed state lives as an `open` class flag on the header; the caret
/// icon rotates with it. Sections render open, with the body panel id
/// `{id}_box` wired to the header via `data-toggle` for the app script.
#[component]
pub fn CollapsibleSection(
    /// Id stem; the section gets `{id}_section`, the body `{id}_box`
    id: String,
    /// Section title
    title: String,
    children: Children,
) -> impl IntoView {
    let box_id = format!("{id}_box");

    view! {
        <section class="report-section" id=format!("{id}_section")>
            <h2 class="section-header open" data-toggle=box_id.clone()>
                <Icon path=ICON_CARET_DOWN size="16" class="caret" />
                {title}
            </h2>
            <div class="section-box" id=box_id>
                {children()}
            </div>
        </section>
    }
}
