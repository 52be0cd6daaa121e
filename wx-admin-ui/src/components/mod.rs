//! Dioxus RSX components for the admin widget.

mod add_location_dialog;
mod admin_widget;
mod config_panel;
mod error_panel;
mod location_table;
mod result_panel;
mod service_selector;

pub use add_location_dialog::AddLocationDialog;
pub use admin_widget::AdminWidget;
pub use config_panel::ConfigPanel;
pub use error_panel::ErrorPanel;
pub use location_table::LocationTable;
pub use result_panel::ResultPanel;
pub use service_selector::ServiceSelector;
