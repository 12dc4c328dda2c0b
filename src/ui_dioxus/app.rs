use dioxus::prelude::*;
use std::rc::Rc;
use tracing::info;

use crate::config::DashboardConfig;
use crate::domain::UserProfile;
use crate::repository::{open_preference_store, PreferenceStore};
use crate::services::{HttpRecordSource, RecordSource};
use crate::ui_dioxus::router::Route;

/// Everything the views pull from context.
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<DashboardConfig>,
    pub preferences: Rc<dyn PreferenceStore>,
    pub records: Rc<dyn RecordSource>,
    pub profile: UserProfile,
}

impl AppServices {
    pub fn new(
        config: DashboardConfig,
        preferences: Rc<dyn PreferenceStore>,
        records: Rc<dyn RecordSource>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            preferences,
            records,
            profile: UserProfile::default(),
        }
    }

    /// Wires the real HTTP source and the platform preference store.
    pub fn from_environment() -> Self {
        let config = DashboardConfig::load_or_default();
        info!(endpoint = %config.endpoint, page_size = config.default_page_size, "Starting dashboard");

        let preferences = open_preference_store(&config);
        let records: Rc<dyn RecordSource> = Rc::new(HttpRecordSource::from_config(&config));
        Self::new(config, preferences, records)
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppServices::from_environment);

    rsx! {
        Router::<Route> {}
    }
}
