use dioxus::prelude::*;

use crate::domain::{SortField, SortSpec};

/// One toggle button per sortable field; the active one carries an arrow.
#[component]
pub fn SortControls(sort: SortSpec, on_toggle: EventHandler<SortField>) -> Element {
    rsx! {
        div {
            class: "sort-controls",
            style: "display: flex; gap: 8px;",

            for field in SortField::ALL {
                SortButton {
                    key: "{field.key()}",
                    field,
                    sort,
                    on_toggle,
                }
            }
        }
    }
}

#[component]
fn SortButton(field: SortField, sort: SortSpec, on_toggle: EventHandler<SortField>) -> Element {
    let arrow = sort.direction_for(field).map(|d| d.arrow()).unwrap_or("");
    let active = !arrow.is_empty();

    rsx! {
        button {
            class: if active { "sort-button active" } else { "sort-button" },
            style: format!(
                "padding: 6px 12px; border: 1px solid #e5e7eb; border-radius: 6px; cursor: pointer; background: {};",
                if active { "#eef2ff" } else { "white" }
            ),
            onclick: move |_| on_toggle.call(field),
            "Sort {field} {arrow}"
        }
    }
}
