//! Server supplied forms.
//!
//! The configuration form and the add-location dialog body are markup owned
//! by the server. [`FormSurface`] is the narrow view the controller needs of
//! such a form: named fields, their values and an error marker per field.
//! [`FormBinder`] builds the widget's form operations on top of it and is
//! implemented for every surface.

use std::collections::BTreeMap;
use wx_protocol::{Choice, FormDataMap};

/// How a named field takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Hidden input; serialized but never cleared.
    Hidden,
    /// Radio group; the value is the checked option's value.
    Radio,
    /// Single select list.
    Choice,
}

/// Primitive access to one form.
pub trait FormSurface {
    /// Replace the form body with a server supplied fragment.
    fn load_markup(&mut self, markup: &str);

    /// Distinct field names, in document order.
    fn field_names(&self) -> Vec<String>;

    fn field_kind(&self, name: &str) -> Option<FieldKind>;

    /// Current value; `None` for a radio group or select with nothing chosen.
    fn value(&self, name: &str) -> Option<String>;

    /// Set a text, hidden or choice field.
    fn set_value(&mut self, name: &str, value: &str);

    /// Option values of a radio group.
    fn radio_options(&self, name: &str) -> Vec<String>;

    fn set_radio_checked(&mut self, name: &str, option: &str, checked: bool);

    /// Replace the options of a select list.
    fn replace_choices(&mut self, name: &str, choices: &[Choice]);

    /// Show (`Some`) or remove (`None`) the error marker and tooltip.
    fn set_field_error(&mut self, name: &str, message: Option<&str>);

    fn field_error(&self, name: &str) -> Option<String>;
}

/// Form operations used by the controller.
pub trait FormBinder: FormSurface {
    /// Set every field named in `data`. Fields not in the map are left alone.
    ///
    /// Radio groups are cleared first, then the option whose value equals the
    /// map entry is checked.
    fn apply_data(&mut self, data: &FormDataMap) {
        for (name, value) in data {
            match self.field_kind(name) {
                Some(FieldKind::Radio) => {
                    for option in self.radio_options(name) {
                        self.set_radio_checked(name, &option, false);
                    }
                    self.set_radio_checked(name, value, true);
                }
                Some(_) => self.set_value(name, value),
                None => {}
            }
        }
    }

    /// Current field values keyed by name, used verbatim as a request payload.
    fn serialize(&self) -> FormDataMap {
        self.field_names()
            .into_iter()
            .filter_map(|name| self.value(&name).map(|value| (name, value)))
            .collect()
    }

    /// Reset every non-hidden field to empty.
    fn clear_inputs(&mut self) {
        for name in self.field_names() {
            match self.field_kind(&name) {
                Some(FieldKind::Radio) => {
                    for option in self.radio_options(&name) {
                        self.set_radio_checked(&name, &option, false);
                    }
                }
                Some(FieldKind::Text) | Some(FieldKind::Choice) => self.set_value(&name, ""),
                Some(FieldKind::Hidden) | None => {}
            }
        }
    }

    fn mark_field_error(&mut self, name: &str, message: &str) {
        self.set_field_error(name, Some(message));
    }

    fn clear_field_errors(&mut self) {
        for name in self.field_names() {
            self.set_field_error(&name, None);
        }
    }

    /// Fields currently carrying an error marker, with their tooltip text.
    fn field_errors(&self) -> BTreeMap<String, String> {
        self.field_names()
            .into_iter()
            .filter_map(|name| self.field_error(&name).map(|message| (name, message)))
            .collect()
    }
}

impl<S: FormSurface + ?Sized> FormBinder for S {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldState {
    Text { value: String, hidden: bool },
    Radio { options: Vec<String>, checked: Option<String> },
    Choice { choices: Vec<Choice>, selected: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryField {
    name: String,
    state: FieldState,
    error: Option<String>,
}

/// A form held entirely in memory.
///
/// Fields are declared up front with the builder methods. Loading markup
/// only records it; the declared fields stand in for whatever the fragment
/// contains. A permissive form also accepts values for undeclared names,
/// declaring them as text fields on first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    fields: Vec<MemoryField>,
    markup: Option<String>,
    permissive: bool,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Self::default()
        }
    }

    pub fn text(self, name: &str, value: &str) -> Self {
        self.declare(
            name,
            FieldState::Text {
                value: value.to_string(),
                hidden: false,
            },
        )
    }

    pub fn hidden(self, name: &str, value: &str) -> Self {
        self.declare(
            name,
            FieldState::Text {
                value: value.to_string(),
                hidden: true,
            },
        )
    }

    pub fn radio(self, name: &str, options: &[&str]) -> Self {
        self.declare(
            name,
            FieldState::Radio {
                options: options.iter().map(|o| o.to_string()).collect(),
                checked: None,
            },
        )
    }

    pub fn choice(self, name: &str) -> Self {
        self.declare(
            name,
            FieldState::Choice {
                choices: Vec::new(),
                selected: None,
            },
        )
    }

    /// Last markup loaded into this form.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Options currently offered by a select list.
    pub fn choices(&self, name: &str) -> Vec<Choice> {
        match self.field(name).map(|f| &f.state) {
            Some(FieldState::Choice { choices, .. }) => choices.clone(),
            _ => Vec::new(),
        }
    }

    fn declare(mut self, name: &str, state: FieldState) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(MemoryField {
            name: name.to_string(),
            state,
            error: None,
        });
        self
    }

    fn field(&self, name: &str) -> Option<&MemoryField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut MemoryField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

impl FormSurface for MemoryForm {
    fn load_markup(&mut self, markup: &str) {
        self.markup = Some(markup.to_string());
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        match self.field(name).map(|f| &f.state) {
            Some(FieldState::Text { hidden: true, .. }) => Some(FieldKind::Hidden),
            Some(FieldState::Text { hidden: false, .. }) => Some(FieldKind::Text),
            Some(FieldState::Radio { .. }) => Some(FieldKind::Radio),
            Some(FieldState::Choice { .. }) => Some(FieldKind::Choice),
            None if self.permissive => Some(FieldKind::Text),
            None => None,
        }
    }

    fn value(&self, name: &str) -> Option<String> {
        match &self.field(name)?.state {
            FieldState::Text { value, .. } => Some(value.clone()),
            FieldState::Radio { checked, .. } => checked.clone(),
            FieldState::Choice { selected, .. } => selected.clone(),
        }
    }

    fn set_value(&mut self, name: &str, value: &str) {
        if self.field(name).is_none() && self.permissive {
            *self = std::mem::take(self).text(name, value);
            return;
        }
        let Some(field) = self.field_mut(name) else {
            return;
        };
        match &mut field.state {
            FieldState::Text { value: current, .. } => *current = value.to_string(),
            FieldState::Choice { choices, selected } => {
                *selected = choices
                    .iter()
                    .any(|c| c.key == value)
                    .then(|| value.to_string());
            }
            FieldState::Radio { .. } => {}
        }
    }

    fn radio_options(&self, name: &str) -> Vec<String> {
        match self.field(name).map(|f| &f.state) {
            Some(FieldState::Radio { options, .. }) => options.clone(),
            _ => Vec::new(),
        }
    }

    fn set_radio_checked(&mut self, name: &str, option: &str, checked: bool) {
        if let Some(FieldState::Radio {
            options,
            checked: current,
        }) = self.field_mut(name).map(|f| &mut f.state)
        {
            if checked {
                if options.iter().any(|o| o == option) {
                    *current = Some(option.to_string());
                }
            } else if current.as_deref() == Some(option) {
                *current = None;
            }
        }
    }

    fn replace_choices(&mut self, name: &str, new_choices: &[Choice]) {
        if let Some(FieldState::Choice { choices, selected }) = self.field_mut(name).map(|f| &mut f.state) {
            *choices = new_choices.to_vec();
            *selected = new_choices.first().map(|c| c.key.clone());
        }
    }

    fn set_field_error(&mut self, name: &str, message: Option<&str>) {
        if let Some(field) = self.field_mut(name) {
            field.error = message.map(str::to_string);
        }
    }

    fn field_error(&self, name: &str) -> Option<String> {
        self.field(name)?.error.clone()
    }
}
