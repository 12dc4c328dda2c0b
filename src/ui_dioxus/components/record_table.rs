use dioxus::prelude::*;

use crate::domain::Record;

#[component]
pub fn RecordTable(rows: Vec<Record>) -> Element {
    rsx! {
        table {
            class: "record-table",
            style: "width: 100%; border-collapse: collapse; background: white;",

            thead {
                tr {
                    style: "text-align: left; background: #f3f4f6;",
                    th { style: "padding: 10px;", "Post ID" }
                    th { style: "padding: 10px;", "Name" }
                    th { style: "padding: 10px;", "Email" }
                    th { style: "padding: 10px;", "Comment" }
                }
            }

            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            colspan: "4",
                            style: "padding: 24px; text-align: center; color: #6b7280;",
                            "No matching comments"
                        }
                    }
                }
                for record in rows {
                    tr {
                        key: "{record.id}",
                        style: "border-top: 1px solid #e5e7eb;",
                        td { style: "padding: 10px;", "{record.group_id}" }
                        td { style: "padding: 10px;", "{record.display_name}" }
                        td { style: "padding: 10px;", "{record.contact_email}" }
                        td { style: "padding: 10px; color: #4b5563;", "{record.body}" }
                    }
                }
            }
        }
    }
}
