//! Weather Service Admin
//!
//! Browser entry point for the weather service admin widget. Mounts
//! `AdminWidget` under `#weather-admin-root` and points it at the
//! `ajaxcontroller` endpoint next to the hosting page.
//!
//! Data flow:
//! 1. On mount, an `init` request loads the service configuration form, the
//!    add-location dialog body, the service list and the location table.
//! 2. Every button sends one request to the same endpoint; the response is
//!    classified once and applied to the screen and forms.

use dioxus::prelude::*;
use wx_admin::ClientConfig;
use wx_admin_ui::components::AdminWidget;
use wx_admin_ui::dom_bridge;
use wx_admin_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-admin-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(ClientConfig::default(), dom_bridge::page_location()));

    rsx! {
        AdminWidget {}
    }
}
