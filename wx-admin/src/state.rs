//! Explicit application state owned by the controller.

use crate::dialog::DialogLifecycle;
use crate::error_panel::ErrorPanel;
use crate::result_panel::ResultPanel;
use crate::table::{LocationTable, ServiceSelector};

/// Everything the widget displays outside the server supplied forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub error_panel: ErrorPanel,
    pub services: ServiceSelector,
    /// Disabled after a service change until the new config is applied.
    pub add_location_enabled: bool,
    pub locations: LocationTable,
    pub result: ResultPanel,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            error_panel: ErrorPanel::default(),
            services: ServiceSelector::default(),
            add_location_enabled: true,
            locations: LocationTable::default(),
            result: ResultPanel::default(),
        }
    }
}

/// Client state between requests.
#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    /// Column headers from the last UI definition.
    pub headers: Vec<String>,
    pub dialog: DialogLifecycle,
    /// Table mutating requests sent but not yet completed.
    pub pending_mutations: usize,
    /// Select list that receives the choices of an outstanding dialog lookup.
    pub lookup_target: Option<String>,
}

impl AppState {
    /// Whether row ids of the rendered table still identify server rows.
    pub fn rows_current(&self) -> bool {
        self.pending_mutations == 0
    }
}
