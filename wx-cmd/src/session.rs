//! Headless admin session.
//!
//! Drives the same controller the browser uses, with permissive in-memory
//! forms standing in for the server markup. Field values arrive from the
//! command line instead of from inputs.

use log::info;
use wx_admin::{round_trip, ClientConfig, Controller, FormSurface, HttpTransport, Intent, MemoryForm, Transport};

pub struct Session<T> {
    controller: Controller<MemoryForm>,
    transport: T,
}

impl Session<HttpTransport> {
    /// Session against an absolute endpoint URL.
    pub fn connect(endpoint: &str) -> anyhow::Result<Self> {
        let url = ClientConfig::default()
            .with_endpoint(endpoint)
            .resolve_endpoint(None)?;
        info!("Using endpoint {}", url);
        Ok(Self::new(HttpTransport::new(url)))
    }
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self {
            controller: Controller::new(MemoryForm::permissive(), MemoryForm::permissive()),
            transport,
        }
    }

    pub fn controller(&self) -> &Controller<MemoryForm> {
        &self.controller
    }

    pub async fn perform(&mut self, intent: Intent) -> anyhow::Result<()> {
        round_trip(&mut self.controller, &self.transport, intent).await?;
        Ok(())
    }

    /// Load the widget's initial state.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        self.perform(Intent::PageLoad).await
    }

    /// Overwrite configuration fields, then submit the form.
    pub async fn apply(&mut self, settings: &[(String, String)]) -> anyhow::Result<()> {
        let form = self.controller.config_form_mut();
        for (name, value) in settings {
            form.set_value(name, value);
        }
        self.perform(Intent::ApplyConfig).await
    }

    /// Open the add dialog, fill it in and confirm.
    pub async fn add(&mut self, settings: &[(String, String)]) -> anyhow::Result<()> {
        self.perform(Intent::OpenAddDialog).await?;
        let form = self.controller.add_form_mut();
        for (name, value) in settings {
            form.set_value(name, value);
        }
        self.perform(Intent::ConfirmAddDialog).await
    }

    pub async fn lookup(&mut self, action: &str, target: &str, settings: &[(String, String)]) -> anyhow::Result<()> {
        self.perform(Intent::OpenAddDialog).await?;
        let form = self.controller.add_form_mut();
        for (name, value) in settings {
            form.set_value(name, value);
        }
        self.perform(Intent::DialogLookup {
            action: action.to_string(),
            target: target.to_string(),
        })
        .await
    }
}
