use dioxus::prelude::*;

#[component]
pub fn SearchBar(query: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            style: "padding: 8px 12px; min-width: 280px; border: 1px solid #e5e7eb; border-radius: 6px;",
            placeholder: "Search name, email, comment",
            value: "{query}",
            oninput: move |e| on_change.call(e.value()),
        }
    }
}
