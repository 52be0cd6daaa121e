//! Sending intents from event handlers.
//!
//! The controller is written synchronously and the response applied in a
//! spawned task, so no signal borrow is held across the request.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_admin::{Intent, Transport, TransportError};

/// Dispatch `intent`; if it produces a request, send it in the background and
/// apply the response when it arrives.
pub fn send_intent(mut state: AppState, intent: Intent) {
    let dispatched = state.controller.write().dispatch(intent);
    let request = match dispatched {
        Ok(Some(request)) => request,
        Ok(None) => {
            state.notice.set(None);
            return;
        }
        Err(e) => {
            log::warn!("[WX] intent refused: {}", e);
            state.notice.set(Some(e.to_string()));
            return;
        }
    };
    state.notice.set(None);

    let transport = state.transport.peek().clone();
    spawn(async move {
        let response = match transport {
            Some(transport) => transport.send(&request).await,
            None => Err(TransportError::Endpoint("no endpoint configured".to_string())),
        };
        state.controller.write().complete(&request, response);
    });
}
