//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the controller and the transport into signals provided
//! via `use_context_provider`. Components read the controller's `Screen` and
//! send intents through [`crate::dispatch::send_intent`].

use crate::dom_bridge::DomForm;
use dioxus::prelude::*;
use wx_admin::{ClientConfig, Controller, HttpTransport};

/// DOM id of the container holding the service configuration form.
pub const CONFIG_FORM_ID: &str = "wx-service-config";
/// DOM id of the container holding the add-location dialog body.
pub const ADD_FORM_ID: &str = "wx-add-dialog";

/// Shared state for the admin widget.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Owns the screen model and both server supplied forms
    pub controller: Signal<Controller<DomForm>>,
    /// None when the endpoint could not be resolved
    pub transport: Signal<Option<HttpTransport>>,
    pub config: Signal<ClientConfig>,
    /// Why the last intent was refused, if it was
    pub notice: Signal<Option<String>>,
}

impl AppState {
    pub fn new(config: ClientConfig, base_url: Option<String>) -> Self {
        let transport = match config.resolve_endpoint(base_url.as_deref()) {
            Ok(url) => {
                log::info!("[WX] endpoint {}", url);
                Some(HttpTransport::new(url))
            }
            Err(e) => {
                log::error!("[WX] {}", e);
                None
            }
        };
        Self {
            controller: Signal::new(Controller::new(
                DomForm::new(CONFIG_FORM_ID),
                DomForm::new(ADD_FORM_ID),
            )),
            transport: Signal::new(transport),
            config: Signal::new(config),
            notice: Signal::new(None),
        }
    }
}
