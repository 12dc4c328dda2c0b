use dioxus::prelude::*;
use tracing::debug;

use crate::ui_dioxus::app::AppServices;
use crate::ui_dioxus::components::Header;
use crate::ui_dioxus::views::{Dashboard, Profile};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/dashboard")]
        Dashboard {},

        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[redirect("/", || Route::Dashboard {})]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn NavBar() -> Element {
    let services = use_context::<AppServices>();

    rsx! {
        div {
            class: "app-container",
            style: "min-height: 100vh; background: #f5f6fa; font-family: sans-serif;",

            Header { profile: services.profile.clone() }

            nav {
                class: "navbar",
                style: "display: flex; gap: 8px; padding: 10px 24px; background: white; border-bottom: 1px solid #e5e7eb;",

                Link {
                    class: "nav-item",
                    active_class: "active",
                    to: Route::Dashboard {},
                    "Dashboard"
                }
                Link {
                    class: "nav-item",
                    active_class: "active",
                    to: Route::Profile {},
                    "Profile"
                }
            }

            main {
                class: "main-content",
                style: "padding: 24px;",
                Outlet::<Route> {}
            }
        }
    }
}

/// Any unknown path lands on the dashboard.
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let navigator = navigator();

    use_effect(move || {
        debug!(path = ?segments, "Unknown route, redirecting to dashboard");
        navigator.replace(Route::Dashboard {});
    });

    None
}
