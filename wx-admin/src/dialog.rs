//! Add-location dialog lifecycle.
//!
//! CLOSED -> OPEN on the add-location button, OPEN -> CLOSED on confirm or
//! cancel. Both transitions back to CLOSED run the cleanup strategy on the
//! dialog form, whatever happens to the request.

use crate::error::ControllerError;
use crate::form::{FormBinder, FormSurface};
use std::fmt;
use wx_protocol::FormDataMap;

/// Strategy run on the dialog form whenever the dialog closes.
pub type Cleanup = Box<dyn Fn(&mut dyn FormSurface)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

pub struct DialogLifecycle {
    state: DialogState,
    content_loaded: bool,
    cleanup: Cleanup,
}

impl fmt::Debug for DialogLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogLifecycle")
            .field("state", &self.state)
            .field("content_loaded", &self.content_loaded)
            .finish_non_exhaustive()
    }
}

impl Default for DialogLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogLifecycle {
    /// Dialog that clears its inputs on close.
    pub fn new() -> Self {
        Self::with_cleanup(Box::new(|form: &mut dyn FormSurface| form.clear_inputs()))
    }

    pub fn with_cleanup(cleanup: Cleanup) -> Self {
        Self {
            state: DialogState::Closed,
            content_loaded: false,
            cleanup,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn has_content(&self) -> bool {
        self.content_loaded
    }

    /// New dialog markup was injected; any open instance is stale.
    pub fn content_replaced(&mut self) {
        self.content_loaded = true;
        self.state = DialogState::Closed;
    }

    pub fn open(&mut self) -> Result<(), ControllerError> {
        if !self.content_loaded {
            return Err(ControllerError::DialogUnavailable);
        }
        self.state = DialogState::Open;
        Ok(())
    }

    /// Serialize the form for submission, then clean up and close.
    pub fn confirm(&mut self, form: &mut dyn FormSurface) -> Result<FormDataMap, ControllerError> {
        if !self.is_open() {
            return Err(ControllerError::DialogClosed);
        }
        let data = form.serialize();
        self.close(form);
        Ok(data)
    }

    /// Clean up and close without submitting anything.
    pub fn cancel(&mut self, form: &mut dyn FormSurface) {
        self.close(form);
    }

    fn close(&mut self, form: &mut dyn FormSurface) {
        (self.cleanup)(form);
        self.state = DialogState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;
    use std::cell::Cell;
    use std::rc::Rc;

    fn dialog_form() -> MemoryForm {
        MemoryForm::new().text("path", "").text("location", "")
    }

    #[test]
    fn cannot_open_before_content_arrives() {
        let mut dialog = DialogLifecycle::new();
        assert_eq!(dialog.open(), Err(ControllerError::DialogUnavailable));
        dialog.content_replaced();
        assert_eq!(dialog.open(), Ok(()));
        assert!(dialog.is_open());
    }

    #[test]
    fn confirm_serializes_then_clears_and_closes() {
        let mut dialog = DialogLifecycle::new();
        dialog.content_replaced();
        dialog.open().unwrap();
        let mut form = dialog_form();
        form.set_value("path", "#site/bldg");

        let data = dialog.confirm(&mut form).unwrap();
        assert_eq!(data.get("path").map(String::as_str), Some("#site/bldg"));
        assert_eq!(form.value("path").as_deref(), Some(""));
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn confirm_requires_open_dialog() {
        let mut dialog = DialogLifecycle::new();
        dialog.content_replaced();
        let mut form = dialog_form();
        assert_eq!(dialog.confirm(&mut form), Err(ControllerError::DialogClosed));
    }

    #[test]
    fn cancel_clears_without_payload() {
        let mut dialog = DialogLifecycle::new();
        dialog.content_replaced();
        dialog.open().unwrap();
        let mut form = dialog_form();
        form.set_value("location", "27601");
        dialog.cancel(&mut form);
        assert_eq!(form.value("location").as_deref(), Some(""));
        assert!(!dialog.is_open());
    }

    #[test]
    fn injected_cleanup_replaces_default() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut dialog = DialogLifecycle::with_cleanup(Box::new(move |_form: &mut dyn FormSurface| {
            counter.set(counter.get() + 1);
        }));
        dialog.content_replaced();
        dialog.open().unwrap();
        let mut form = dialog_form();
        form.set_value("path", "#keep");
        dialog.cancel(&mut form);
        assert_eq!(calls.get(), 1);
        assert_eq!(form.value("path").as_deref(), Some("#keep"));
    }
}
