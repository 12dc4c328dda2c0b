use dioxus::prelude::*;

use crate::ui_dioxus::app::AppServices;

#[component]
pub fn Profile() -> Element {
    let profile = use_context::<AppServices>().profile;
    let initials = profile.initials();

    rsx! {
        div {
            class: "profile-view",
            style: "max-width: 900px; margin: 0 auto;",

            h1 { style: "font-size: 1.4rem; margin-bottom: 16px;", "Welcome, {profile.name}" }

            div {
                class: "profile-card",
                style: "padding: 24px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

                div {
                    style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
                    span {
                        style: "display: inline-flex; align-items: center; justify-content: center; width: 64px; height: 64px; border-radius: 50%; background: #d9d9d9; font-size: 1.4rem; font-weight: 600;",
                        "{initials}"
                    }
                    div {
                        div { style: "font-weight: 600;", "{profile.name}" }
                        div { style: "color: #6b7280;", "{profile.email}" }
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    ProfileField { label: "User ID", value: profile.user_id.clone() }
                    ProfileField { label: "Name", value: profile.name.clone() }
                    ProfileField { label: "Email ID", value: profile.email.clone() }
                    ProfileField { label: "Address", value: profile.address.clone() }
                    ProfileField { label: "Phone", value: profile.phone.clone() }
                }
            }
        }
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 0.85rem; color: #6b7280; margin-bottom: 4px;", "{label}" }
            input {
                style: "width: 100%; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px; background: #f9fafb;",
                readonly: true,
                value: "{value}",
            }
        }
    }
}
