//! Service configuration region.

use crate::dispatch::send_intent;
use crate::state::{AppState, CONFIG_FORM_ID};
use crate::components::ServiceSelector;
use dioxus::prelude::*;
use wx_admin::Intent;

/// Service selector, the server supplied configuration form and its buttons.
///
/// The form container has no RSX children; its body is injected by
/// `DomForm` whenever a response carries new configuration markup.
#[component]
pub fn ConfigPanel() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin-bottom: 16px;",
            ServiceSelector {}
            div {
                id: CONFIG_FORM_ID,
                style: "margin: 8px 0;",
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    id: "submitconfig",
                    onclick: move |_| send_intent(state, Intent::ApplyConfig),
                    "Apply"
                }
                button {
                    id: "refresh",
                    onclick: move |_| send_intent(state, Intent::Refresh),
                    "Refresh"
                }
            }
        }
    }
}
