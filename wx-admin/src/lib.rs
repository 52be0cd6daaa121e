//! Client-side synchronization controller for the weather service admin widget.
//!
//! The widget has three regions (service configuration form, location table,
//! result detail panel) plus a shared error panel and an add-location dialog.
//! All of them are driven by responses from one endpoint. This crate holds
//! that logic without touching a real DOM:
//!
//! - `form`: the `FormSurface` seam over server supplied forms, `FormBinder`
//!   operations on top of it, and an in-memory `MemoryForm`
//! - `table`, `result_panel`, `error_panel`: clear-then-write renderers
//! - `dialog`: add-location dialog lifecycle with an injectable cleanup
//! - `state`: the explicit `AppState` owned by the controller
//! - `controller`: turns user intents into requests and applies responses
//! - `transport`: async `Transport` trait and its `reqwest` implementation
//!
//! # Usage
//!
//! ```rust
//! use wx_admin::{Controller, Intent, MemoryForm};
//!
//! let mut controller = Controller::new(MemoryForm::new(), MemoryForm::new());
//! let request = controller.dispatch(Intent::PageLoad).unwrap().unwrap();
//! controller.complete(
//!     &request,
//!     Ok(r#"{"locations":[["a","12345","t0"]],"entryheaders":["Path","Zip"]}"#.to_string()),
//! );
//! assert_eq!(controller.screen().locations.rows.len(), 1);
//! assert_eq!(controller.screen().locations.headers.len(), 3);
//! ```

pub mod config;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod error_panel;
pub mod form;
pub mod result_panel;
pub mod state;
pub mod table;
pub mod transport;

pub use config::ClientConfig;
pub use controller::{Controller, Intent};
pub use dialog::{Cleanup, DialogLifecycle, DialogState};
pub use error::{ControllerError, TransportError};
pub use form::{FieldKind, FormBinder, FormSurface, MemoryForm};
pub use state::{AppState, Screen};
pub use transport::{round_trip, HttpTransport, Transport};
