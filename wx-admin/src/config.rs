//! Client configuration.

use crate::error::TransportError;
use reqwest::Url;
use wx_protocol::ENDPOINT;

pub const DEFAULT_DIALOG_TITLE: &str = "Add New Location";
pub const DEFAULT_DIALOG_MIN_WIDTH: u32 = 400;

/// Where the widget talks to and how its dialog is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint path or URL. Relative values are resolved against a base URL
    /// (the page location in the browser).
    pub endpoint: String,
    pub dialog_title: String,
    /// Minimum dialog width in pixels
    pub dialog_min_width: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            dialog_title: DEFAULT_DIALOG_TITLE.to_string(),
            dialog_min_width: DEFAULT_DIALOG_MIN_WIDTH,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Absolute endpoint URL.
    ///
    /// An absolute `endpoint` is used as is; a relative one is joined onto
    /// `base`, which must then be absolute.
    pub fn resolve_endpoint(&self, base: Option<&str>) -> Result<Url, TransportError> {
        if let Ok(url) = Url::parse(&self.endpoint) {
            return Ok(url);
        }
        let base = base.ok_or_else(|| {
            TransportError::Endpoint(format!("relative endpoint '{}' needs a base URL", self.endpoint))
        })?;
        Url::parse(base)
            .and_then(|base| base.join(&self.endpoint))
            .map_err(|e| TransportError::Endpoint(format!("{}: {}", self.endpoint, e)))
    }
}
