//! Wire protocol for the weather service administration endpoint.
//!
//! The admin widget talks to a single endpoint. Every request carries an
//! `action` discriminator and every response is a flat JSON object whose
//! keys signal what happened:
//!
//! - `error` (a plain string) is a fatal/licensing failure
//! - `errors` (a list) carries field validation and global errors
//! - anything else is a success payload
//!
//! This crate decodes that envelope once, at the boundary, into a tagged
//! [`Outcome`] so the rest of the client never inspects raw keys.
//!
//! # Usage
//!
//! ```rust
//! use wx_protocol::{decode, Outcome};
//!
//! let outcome = decode(r#"{"locations":[["a","12345","t0"]],"entryheaders":["Path","Zip"]}"#).unwrap();
//! match outcome {
//!     Outcome::Success(payload) => assert_eq!(payload.locations.unwrap().len(), 1),
//!     _ => unreachable!(),
//! }
//! ```

pub mod action;
pub mod envelope;
pub mod error;
mod lenient;
pub mod outcome;

pub use action::{Action, ActionKind, Method, Request};
pub use envelope::{
    join_units, Choice, Envelope, FieldValue, ForecastCell, FormDataMap, ServiceOption, WireError,
};
pub use error::ProtocolError;
pub use outcome::{classify, decode, ErrorEntry, Outcome, Payload, ResultDetail, UiDefinition};

/// Relative path of the single server endpoint.
pub const ENDPOINT: &str = "ajaxcontroller";

/// Message shown for any transport level failure, independent of body content.
pub const COMMUNICATION_ERROR: &str = "Error communicating with server";

/// Trailing location table column appended by the client.
pub const LAST_UPDATE_HEADER: &str = "Last Update";
