//! Modal add-location dialog.

use crate::dispatch::send_intent;
use crate::dom_bridge::clicked_lookup;
use crate::state::{AppState, ADD_FORM_ID};
use dioxus::prelude::*;
use wx_admin::{DialogState, Intent};

/// Modal wrapper around the server supplied dialog body.
///
/// The overlay stays mounted while closed so the body container keeps the
/// injected markup; only its visibility follows the dialog state.
#[component]
pub fn AddLocationDialog() -> Element {
    let state = use_context::<AppState>();
    let open = state.controller.read().dialog_state() == DialogState::Open;
    let config = state.config.read().clone();

    let overlay_style = format!(
        "display: {}; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.3); align-items: center; justify-content: center;",
        if open { "flex" } else { "none" }
    );
    let dialog_style = format!(
        "min-width: {}px; background: white; border-radius: 4px; padding: 12px 16px;",
        config.dialog_min_width
    );

    // Lookup buttons in the injected body are not known to the virtual DOM.
    let on_body_click = move |evt: Event<MouseData>| {
        let clicked = evt
            .data()
            .downcast::<web_sys::MouseEvent>()
            .and_then(|event| event.target());
        if let Some((action, target)) = clicked_lookup(clicked) {
            send_intent(state, Intent::DialogLookup { action, target });
        }
    };

    rsx! {
        div {
            style: "{overlay_style}",
            div {
                role: "dialog",
                style: "{dialog_style}",
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "{config.dialog_title}" }
                div {
                    id: ADD_FORM_ID,
                    onclick: on_body_click,
                }
                div {
                    style: "display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;",
                    button {
                        onclick: move |_| send_intent(state, Intent::ConfirmAddDialog),
                        "OK"
                    }
                    button {
                        onclick: move |_| send_intent(state, Intent::CancelAddDialog),
                        "Cancel"
                    }
                }
            }
        }
    }
}
