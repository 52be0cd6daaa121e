//! The complete admin widget.

use crate::components::{AddLocationDialog, ConfigPanel, ErrorPanel, LocationTable, ResultPanel};
use crate::dispatch::send_intent;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_admin::Intent;

/// Error panel, configuration, location table, result panel and dialog.
/// Expects an `AppState` in context and loads the initial state on mount.
#[component]
pub fn AdminWidget() -> Element {
    let state = use_context::<AppState>();

    // Runs once; the containers for the server markup exist by now
    use_effect(move || {
        log::info!("[WX] loading initial state");
        send_intent(state, Intent::PageLoad);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            ErrorPanel {}
            ConfigPanel {}
            LocationTable {}
            ResultPanel {}
            AddLocationDialog {}
        }
    }
}
