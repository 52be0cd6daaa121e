//! Raw response envelope as written by the server.
//!
//! Every key is optional. Which keys are present depends on the action and
//! on whether the request failed; [`crate::outcome::classify`] turns the
//! envelope into a tagged [`crate::Outcome`].

use crate::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to value mapping, used both for form data coming from the
/// server and for serialized forms going to it.
pub type FormDataMap = BTreeMap<String, String>;

/// The decoded JSON object returned by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Values for the service configuration form.
    #[serde(default, deserialize_with = "lenient::opt_string_map")]
    pub data: Option<FormDataMap>,
    /// One row of display values per monitored location, in server order.
    #[serde(default, deserialize_with = "lenient::opt_rows")]
    pub locations: Option<Vec<Vec<String>>>,
    /// Key of the weather service currently in use.
    #[serde(default, rename = "currentservice", deserialize_with = "lenient::opt_string")]
    pub current_service: Option<String>,

    // UI definition
    /// Markup for the body of the add-location dialog.
    #[serde(default, rename = "adddialog")]
    pub add_dialog: Option<String>,
    /// Markup for the body of the service configuration form.
    #[serde(default, rename = "serviceconfig")]
    pub service_config: Option<String>,
    /// Column headers for the location table.
    #[serde(default, rename = "entryheaders", deserialize_with = "lenient::opt_strings")]
    pub entry_headers: Option<Vec<String>>,
    /// Selectable weather services.
    #[serde(default)]
    pub services: Option<Vec<ServiceOption>>,

    // Show data
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub station: Option<Vec<FieldValue>>,
    #[serde(default)]
    pub current: Option<Vec<FieldValue>>,
    #[serde(default)]
    pub forecast: Option<Vec<Vec<ForecastCell>>>,
    #[serde(default, rename = "forecastheaders", deserialize_with = "lenient::opt_strings")]
    pub forecast_headers: Option<Vec<String>>,
    #[serde(default)]
    pub icon: Option<Vec<FieldValue>>,

    /// Choices produced by a dialog action (city or station lookup).
    #[serde(default)]
    pub list: Option<Vec<Choice>>,

    // Failure channels
    #[serde(default)]
    pub errors: Option<Vec<WireError>>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub error: Option<String>,
}

/// A selectable weather data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    #[serde(deserialize_with = "lenient::string")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub display: String,
}

/// One `{field, value, units}` entry of the station, current conditions or
/// icon lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default, deserialize_with = "lenient::string")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
    #[serde(default, alias = "unit", deserialize_with = "lenient::opt_string")]
    pub units: Option<String>,
}

impl FieldValue {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            units: None,
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// A forecast grid cell: either already formatted text or a value with an
/// optional unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastCell {
    Measured {
        #[serde(deserialize_with = "lenient::string")]
        value: String,
        #[serde(default, alias = "unit", deserialize_with = "lenient::opt_string")]
        units: Option<String>,
    },
    Text(#[serde(deserialize_with = "lenient::string")] String),
}

impl ForecastCell {
    /// Text shown in the grid: `"value unit"`, or just the value.
    pub fn display(&self) -> String {
        match self {
            ForecastCell::Measured { value, units } => join_units(value, units.as_deref()),
            ForecastCell::Text(text) => text.clone(),
        }
    }
}

/// Appends a unit suffix when one is supplied and non-empty.
pub fn join_units(value: &str, units: Option<&str>) -> String {
    match units.map(str::trim) {
        Some(units) if !units.is_empty() => format!("{} {}", value, units),
        _ => value.to_string(),
    }
}

/// A `{key, name}` option returned by a dialog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(deserialize_with = "lenient::string")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// An entry of the `errors` list, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    #[serde(default, rename = "errortype", deserialize_with = "lenient::opt_string")]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_row_values_become_empty_text() {
        let env: Envelope =
            serde_json::from_str(r#"{"locations":[["a/b", null, 12]]}"#).unwrap();
        assert_eq!(
            env.locations,
            Some(vec![vec!["a/b".to_string(), String::new(), "12".to_string()]])
        );
    }

    #[test]
    fn numeric_form_data_is_stringified() {
        let env: Envelope =
            serde_json::from_str(r#"{"data":{"conditionrefresh":15,"units":"english"}}"#).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data["conditionrefresh"], "15");
        assert_eq!(data["units"], "english");
    }

    #[test]
    fn forecast_cells_accept_text_and_objects() {
        let env: Envelope = serde_json::from_str(
            r#"{"forecast":[["High", {"value":"80","unit":"F"}, {"value":3}]]}"#,
        )
        .unwrap();
        let row: Vec<String> = env.forecast.unwrap()[0].iter().map(ForecastCell::display).collect();
        assert_eq!(row, vec!["High", "80 F", "3"]);
    }

    #[test]
    fn units_accept_both_spellings() {
        let a: FieldValue = serde_json::from_str(r#"{"field":"Temp","value":"72","units":"F"}"#).unwrap();
        let b: FieldValue = serde_json::from_str(r#"{"field":"Temp","value":"72","unit":"F"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, FieldValue::new("Temp", "72").with_units("F"));
    }

    #[test]
    fn join_units_skips_blank_units() {
        assert_eq!(join_units("72", Some("F")), "72 F");
        assert_eq!(join_units("72", Some("  ")), "72");
        assert_eq!(join_units("72", None), "72");
    }

    #[test]
    fn empty_object_decodes_to_default() {
        let env: Envelope = serde_json::from_str("{}").unwrap();
        assert_eq!(env, Envelope::default());
    }
}
