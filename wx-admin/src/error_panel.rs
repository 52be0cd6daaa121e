//! Shared error panel.

/// Request scoped error messages, one block per message.
///
/// Stays visible until the next successful response hides it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPanel {
    pub visible: bool,
    pub messages: Vec<String>,
}

impl ErrorPanel {
    pub fn show(&mut self, messages: Vec<String>) {
        self.messages = messages;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.messages.clear();
        self.visible = false;
    }
}
