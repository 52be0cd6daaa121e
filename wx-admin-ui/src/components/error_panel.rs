//! Error panel component.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the global error messages of the last failed request, one line
/// each, plus a note when the last intent was refused locally.
#[component]
pub fn ErrorPanel() -> Element {
    let state = use_context::<AppState>();
    let panel = state.controller.read().screen().error_panel.clone();
    let notice = (state.notice)();

    rsx! {
        if panel.visible {
            div {
                id: "error",
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                for message in panel.messages.iter() {
                    div { class: "error-line", "{message}" }
                }
            }
        }
        if let Some(notice) = notice {
            div {
                style: "padding: 8px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E63; border-radius: 4px;",
                "{notice}"
            }
        }
    }
}
