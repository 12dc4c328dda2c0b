use dioxus::prelude::*;
use tracing::debug;

use crate::domain::PAGE_SIZE_OPTIONS;
use crate::services::PageView;

#[component]
pub fn Pagination(
    page: PageView,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_select: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let summary = match page.row_span() {
        Some((first, last)) => format!("Showing {} to {} of {} entries", first, last, page.matching_count),
        None => "Showing 0 to 0 of 0 entries".to_string(),
    };
    let current = page.current_page;

    rsx! {
        div {
            class: "pagination",
            style: "display: flex; justify-content: space-between; align-items: center; margin-top: 16px;",

            span { class: "entry-summary", style: "color: #6b7280;", "{summary}" }

            div {
                style: "display: flex; align-items: center; gap: 6px;",

                button {
                    disabled: !page.has_prev(),
                    onclick: move |_| on_prev.call(()),
                    "Prev"
                }

                for n in page.page_numbers() {
                    button {
                        key: "{n}",
                        class: if n == current { "page-number current" } else { "page-number" },
                        style: if n == current {
                            "padding: 4px 10px; border: 1px solid #272a4b; border-radius: 4px; background: #272a4b; color: white;"
                        } else {
                            "padding: 4px 10px; border: 1px solid #e5e7eb; border-radius: 4px; background: white;"
                        },
                        onclick: move |_| on_select.call(n),
                        "{n}"
                    }
                }

                button {
                    disabled: !page.has_next(),
                    onclick: move |_| on_next.call(()),
                    "Next"
                }

                label { style: "margin-left: 12px;", r#for: "page-size", "Show" }
                select {
                    id: "page-size",
                    style: "padding: 4px 8px; border: 1px solid #e5e7eb; border-radius: 4px;",
                    value: "{page.page_size}",
                    onchange: move |e| match e.value().parse::<usize>() {
                        Ok(size) => on_page_size.call(size),
                        Err(_) => debug!(value = %e.value(), "Ignoring non-numeric page size"),
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == page.page_size,
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }
        }
    }
}
