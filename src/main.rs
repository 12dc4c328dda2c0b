use swift_dashboard::ui_dioxus::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dioxus_desktop::{Config, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::default().with_window(
        WindowBuilder::new()
            .with_title("SWIFT Dashboard")
            .with_inner_size(dioxus_desktop::LogicalSize::new(1280.0, 860.0)),
    );

    // Launch the Dioxus desktop app
    dioxus_desktop::launch::launch(App, vec![], config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    dioxus_web::launch::launch(App, vec![], dioxus_web::Config::default());
}
