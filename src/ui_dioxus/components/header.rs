use dioxus::prelude::*;

use crate::domain::UserProfile;

#[component]
pub fn Header(profile: UserProfile) -> Element {
    let initials = profile.initials();

    rsx! {
        header {
            class: "header",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #272a4b; color: white;",

            div {
                class: "brand",
                style: "font-size: 1.4rem; font-weight: bold; letter-spacing: 2px;",
                "SWIFT"
            }

            div {
                class: "user-badge",
                style: "display: flex; align-items: center; gap: 10px;",

                span {
                    style: "display: inline-flex; align-items: center; justify-content: center; width: 36px; height: 36px; border-radius: 50%; background: #d9d9d9; color: #272a4b; font-weight: 600;",
                    "{initials}"
                }
                span { "{profile.name}" }
            }
        }
    }
}
