//! Response classification.
//!
//! The server signals failure through the presence of keys rather than a
//! status code. [`classify`] maps an [`Envelope`] onto exactly one of three
//! variants, with `error` taking precedence over `errors`.

use crate::envelope::{Choice, Envelope, FieldValue, ForecastCell, FormDataMap, ServiceOption, WireError};
use crate::error::Result;
use log::debug;

const VALIDATION_TYPE: &str = "validation";

/// A classified response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No failure channel present.
    Success(Box<Payload>),
    /// The response carried an `errors` collection, possibly empty.
    Failure(Vec<ErrorEntry>),
    /// The response carried a top-level `error` string.
    Fatal(String),
}

impl Outcome {
    /// True when the response carried an `errors` collection.
    ///
    /// An absent collection is "no errors", never malformed input.
    pub fn has_errors(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Error entries of a `Failure`, empty otherwise.
    pub fn errors(&self) -> &[ErrorEntry] {
        match self {
            Outcome::Failure(entries) => entries,
            _ => &[],
        }
    }
}

/// One classified error entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// Scoped to a named form field.
    Validation { field: String, message: String },
    /// Scoped to the whole request; shown in the shared error panel.
    Global { message: String },
}

impl ErrorEntry {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorEntry::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn global(message: impl Into<String>) -> Self {
        ErrorEntry::Global {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorEntry::Validation { message, .. } | ErrorEntry::Global { message } => message,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, ErrorEntry::Global { .. })
    }
}

impl From<WireError> for ErrorEntry {
    /// Entries typed "validation" target their field; everything else,
    /// including a validation entry without a field, is global.
    fn from(wire: WireError) -> Self {
        match (wire.error_type.as_deref(), wire.field) {
            (Some(VALIDATION_TYPE), Some(field)) if !field.is_empty() => ErrorEntry::Validation {
                field,
                message: wire.message,
            },
            _ => ErrorEntry::Global {
                message: wire.message,
            },
        }
    }
}

/// Server supplied UI fragments, re-sent whenever the active service changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiDefinition {
    pub add_dialog: Option<String>,
    pub service_config: Option<String>,
    pub entry_headers: Option<Vec<String>>,
    pub services: Option<Vec<ServiceOption>>,
}

impl UiDefinition {
    pub fn is_empty(&self) -> bool {
        self.add_dialog.is_none()
            && self.service_config.is_none()
            && self.entry_headers.is_none()
            && self.services.is_none()
    }
}

/// Weather data retrieved for one location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultDetail {
    pub name: Option<String>,
    pub station: Vec<FieldValue>,
    pub current: Vec<FieldValue>,
    pub forecast_headers: Vec<String>,
    pub forecast: Vec<Vec<ForecastCell>>,
    pub icon: Vec<FieldValue>,
}

/// The success half of a response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub data: Option<FormDataMap>,
    pub locations: Option<Vec<Vec<String>>>,
    pub current_service: Option<String>,
    pub ui: UiDefinition,
    pub detail: ResultDetail,
    pub list: Option<Vec<Choice>>,
}

impl From<Envelope> for Payload {
    fn from(envelope: Envelope) -> Self {
        let Envelope {
            data,
            locations,
            current_service,
            add_dialog,
            service_config,
            entry_headers,
            services,
            name,
            station,
            current,
            forecast,
            forecast_headers,
            icon,
            list,
            errors: _,
            error: _,
        } = envelope;

        Payload {
            data,
            locations,
            current_service,
            ui: UiDefinition {
                add_dialog,
                service_config,
                entry_headers,
                services,
            },
            detail: ResultDetail {
                name,
                station: station.unwrap_or_default(),
                current: current.unwrap_or_default(),
                forecast_headers: forecast_headers.unwrap_or_default(),
                forecast: forecast.unwrap_or_default(),
                icon: icon.unwrap_or_default(),
            },
            list,
        }
    }
}

/// Classify a decoded envelope.
pub fn classify(envelope: Envelope) -> Outcome {
    if let Some(message) = envelope.error {
        debug!("fatal response: {}", message);
        return Outcome::Fatal(message);
    }
    if let Some(errors) = envelope.errors {
        debug!("response carries {} error entries", errors.len());
        return Outcome::Failure(errors.into_iter().map(ErrorEntry::from).collect());
    }
    Outcome::Success(Box::new(Payload::from(envelope)))
}

/// Decode a response body and classify it.
pub fn decode(body: &str) -> Result<Outcome> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(classify(envelope))
}
