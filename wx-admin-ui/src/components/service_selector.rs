//! Dropdown selector for the active weather service.

use crate::dispatch::send_intent;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_admin::Intent;

/// Weather service dropdown. Choosing a service asks the server to switch.
#[component]
pub fn ServiceSelector() -> Element {
    let state = use_context::<AppState>();
    let selector = state.controller.read().screen().services.clone();
    let selected = selector.selected.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        send_intent(state, Intent::ChangeService(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "service-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Weather Service: "
            }
            select {
                id: "service-select",
                onchange: on_change,
                for service in selector.options.iter() {
                    option {
                        value: "{service.key}",
                        selected: service.key == selected,
                        "{service.display}"
                    }
                }
            }
        }
    }
}
