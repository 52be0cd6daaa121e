//! Sending encoded requests to the endpoint.

use crate::controller::{Controller, Intent};
use crate::error::{ControllerError, TransportError};
use crate::form::FormSurface;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use wx_protocol::{Method, Request};

/// Delivers a request and returns the raw response body.
///
/// Futures are not required to be `Send` so that the browser's fetch based
/// client can implement this as well.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &Request) -> Result<String, TransportError>;
}

/// `reqwest` backed transport. GET parameters go in the query string, POST
/// parameters in a url-encoded form body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<String, TransportError> {
        debug!("{:?} {} {:?}", request.method, self.endpoint, request.params);
        let builder = match request.method {
            Method::Get => self.client.get(self.endpoint.clone()).query(&request.params),
            Method::Post => self.client.post(self.endpoint.clone()).form(&request.params),
        };
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Dispatch an intent, send the resulting request and apply the response.
///
/// Only for callers that may hold the controller across the await; the UI
/// splits these steps so that no borrow outlives a render.
pub async fn round_trip<F, T>(
    controller: &mut Controller<F>,
    transport: &T,
    intent: Intent,
) -> Result<(), ControllerError>
where
    F: FormSurface,
    T: Transport + ?Sized,
{
    if let Some(request) = controller.dispatch(intent)? {
        let response = transport.send(&request).await;
        controller.complete(&request, response);
    }
    Ok(())
}
