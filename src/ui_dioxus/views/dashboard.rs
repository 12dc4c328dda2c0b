use dioxus::prelude::*;

use crate::services::{ListView, RecordSource, UserErrorFormatter};
use crate::ui_dioxus::app::AppServices;
use crate::ui_dioxus::components::{Pagination, RecordTable, SearchBar, SortControls};

#[component]
pub fn Dashboard() -> Element {
    let services = use_context::<AppServices>();
    let mut list = use_signal({
        let store = services.preferences.clone();
        let page_size = services.config.default_page_size;
        move || ListView::rehydrate(store, page_size)
    });
    let mut attempt = use_signal(|| 0u32);

    // Fetch on mount, and again whenever Retry bumps the attempt counter
    use_effect({
        let source = services.records.clone();
        move || {
            let _ = attempt();
            let source = source.clone();
            spawn(async move {
                list.write().begin_fetch();
                let outcome = source.fetch_all().await;
                list.write().finish_fetch(outcome);
            });
        }
    });

    let (page, sort, query, loading, failure) = {
        let view = list.read();
        (
            view.page(),
            view.sort(),
            view.query().to_string(),
            view.is_loading(),
            view.error().map(UserErrorFormatter::format_fetch_error),
        )
    };

    rsx! {
        div {
            class: "dashboard",
            style: "max-width: 1200px; margin: 0 auto;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 16px; margin-bottom: 16px;",
                SortControls {
                    sort,
                    on_toggle: move |field| list.write().toggle_sort(field),
                }
                SearchBar {
                    query,
                    on_change: move |q: String| list.write().set_query(q),
                }
            }

            if let Some(message) = failure {
                div {
                    class: "fetch-error",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px; background: #fee2e2; border: 1px solid #fca5a5; border-radius: 6px; color: #991b1b; margin-bottom: 16px;",
                    span { "{message}" }
                    button {
                        style: "padding: 6px 12px; border: 1px solid #991b1b; border-radius: 6px; background: white; color: #991b1b; cursor: pointer;",
                        onclick: move |_| *attempt.write() += 1,
                        "Retry"
                    }
                }
            } else if loading {
                div {
                    style: "text-align: center; padding: 40px; color: #6b7280;",
                    "Loading comments..."
                }
            } else {
                RecordTable { rows: page.rows.clone() }
                Pagination {
                    page,
                    on_prev: move |_| list.write().prev_page(),
                    on_next: move |_| list.write().next_page(),
                    on_select: move |n| list.write().go_to_page(n),
                    on_page_size: move |size| list.write().set_page_size(size),
                }
            }
        }
    }
}
