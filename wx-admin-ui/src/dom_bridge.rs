//! DOM access for server supplied markup.
//!
//! The configuration form and the dialog body are HTML fragments owned by
//! the server. Dioxus renders an empty container for each, and [`DomForm`]
//! injects the fragment with `innerHTML` and then reads and writes the named
//! controls inside it through `web_sys`, outside the virtual DOM.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};
use wx_admin::{FieldKind, FormSurface};
use wx_protocol::Choice;

/// Class toggled on a control that failed server side validation.
pub const FIELD_ERROR_CLASS: &str = "field-error";

/// Attribute naming the dialog action a lookup button triggers.
pub const DIALOG_ACTION_ATTR: &str = "data-dialogaction";
/// Attribute naming the select list that receives a lookup's choices.
pub const LOOKUP_TARGET_ATTR: &str = "data-target";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Full URL of the current page, used as the base for a relative endpoint.
pub fn page_location() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Dialog lookup requested by a click, as `(action, target)`.
///
/// Lookup buttons inside the dialog markup carry `data-dialogaction` and
/// `data-target`. The click may land on a child of the button, so the
/// nearest carrying ancestor of the event target is used.
pub fn clicked_lookup(target: Option<EventTarget>) -> Option<(String, String)> {
    let clicked = target?.dyn_into::<Element>().ok()?;
    let button = match clicked.closest(&format!("[{}]", DIALOG_ACTION_ATTR)) {
        Ok(button) => button?,
        Err(e) => {
            log::warn!("[WX] lookup selector failed: {:?}", e);
            return None;
        }
    };
    lookup_attributes(|attr| button.get_attribute(attr))
}

fn lookup_attributes(attribute: impl Fn(&str) -> Option<String>) -> Option<(String, String)> {
    let action = attribute(DIALOG_ACTION_ATTR).filter(|a| !a.is_empty())?;
    let Some(target) = attribute(LOOKUP_TARGET_ATTR).filter(|t| !t.is_empty()) else {
        log::warn!("[WX] lookup button {} has no {}", action, LOOKUP_TARGET_ATTR);
        return None;
    };
    Some((action, target))
}

/// A server supplied form living in the container element `container_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomForm {
    container_id: String,
}

impl DomForm {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    fn container(&self) -> Option<Element> {
        document()?.get_element_by_id(&self.container_id)
    }

    fn query(&self, selector: &str) -> Vec<Element> {
        let Some(container) = self.container() else {
            log::warn!("[WX] form container #{} is not mounted", self.container_id);
            return Vec::new();
        };
        match container.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(e) => {
                log::warn!("[WX] bad selector {}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    /// Controls named `name`, in document order.
    fn controls(&self, name: &str) -> Vec<Element> {
        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        self.query(&format!("[name=\"{}\"]", escaped))
            .into_iter()
            .filter(|el| kind_of(el).is_some())
            .collect()
    }
}

fn kind_of(el: &Element) -> Option<FieldKind> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return match input.type_().to_ascii_lowercase().as_str() {
            "hidden" => Some(FieldKind::Hidden),
            "radio" | "checkbox" => Some(FieldKind::Radio),
            "button" | "submit" | "reset" | "image" | "file" => None,
            _ => Some(FieldKind::Text),
        };
    }
    if el.is_instance_of::<HtmlSelectElement>() {
        return Some(FieldKind::Choice);
    }
    if el.is_instance_of::<HtmlTextAreaElement>() {
        return Some(FieldKind::Text);
    }
    None
}

impl FormSurface for DomForm {
    fn load_markup(&mut self, markup: &str) {
        match self.container() {
            Some(container) => container.set_inner_html(markup),
            None => log::warn!("[WX] cannot load markup, #{} is not mounted", self.container_id),
        }
    }

    fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for el in self.query("[name]") {
            if kind_of(&el).is_none() {
                continue;
            }
            if let Some(name) = el.get_attribute("name") {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.controls(name).first().and_then(kind_of)
    }

    fn value(&self, name: &str) -> Option<String> {
        let controls = self.controls(name);
        let first = controls.first()?;
        match kind_of(first)? {
            FieldKind::Radio => controls
                .iter()
                .filter_map(|el| el.dyn_ref::<HtmlInputElement>())
                .find(|input| input.checked())
                .map(|input| input.value()),
            FieldKind::Choice => {
                let select = first.dyn_ref::<HtmlSelectElement>()?;
                (select.selected_index() >= 0).then(|| select.value())
            }
            FieldKind::Text | FieldKind::Hidden => {
                if let Some(input) = first.dyn_ref::<HtmlInputElement>() {
                    Some(input.value())
                } else {
                    first.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
                }
            }
        }
    }

    fn set_value(&mut self, name: &str, value: &str) {
        for el in self.controls(name) {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                if !matches!(kind_of(&el), Some(FieldKind::Radio)) {
                    input.set_value(value);
                }
            } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                select.set_value(value);
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                area.set_value(value);
            }
        }
    }

    fn radio_options(&self, name: &str) -> Vec<String> {
        self.controls(name)
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlInputElement>())
            .map(|input| input.value())
            .collect()
    }

    fn set_radio_checked(&mut self, name: &str, option: &str, checked: bool) {
        for el in self.controls(name) {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                if input.value() == option {
                    input.set_checked(checked);
                }
            }
        }
    }

    fn replace_choices(&mut self, name: &str, choices: &[Choice]) {
        let Some(select) = self
            .controls(name)
            .into_iter()
            .find_map(|el| el.dyn_into::<HtmlSelectElement>().ok())
        else {
            log::warn!("[WX] no select list named {} for lookup results", name);
            return;
        };
        select.set_inner_html("");
        for choice in choices {
            match HtmlOptionElement::new_with_text_and_value(&choice.name, &choice.key) {
                Ok(option) => {
                    if let Err(e) = select.append_child(&option) {
                        log::warn!("[WX] failed to add option {}: {:?}", choice.key, e);
                    }
                }
                Err(e) => log::warn!("[WX] failed to create option {}: {:?}", choice.key, e),
            }
        }
        select.set_selected_index(if choices.is_empty() { -1 } else { 0 });
    }

    fn set_field_error(&mut self, name: &str, message: Option<&str>) {
        for el in self.controls(name) {
            if let Err(e) = el.class_list().toggle_with_force(FIELD_ERROR_CLASS, message.is_some()) {
                log::warn!("[WX] failed to toggle error marker on {}: {:?}", name, e);
            }
            let tooltip = match message {
                Some(message) => el.set_attribute("title", message),
                None => el.remove_attribute("title"),
            };
            if let Err(e) = tooltip {
                log::warn!("[WX] failed to update tooltip on {}: {:?}", name, e);
            }
        }
    }

    fn field_error(&self, name: &str) -> Option<String> {
        self.controls(name)
            .into_iter()
            .find(|el| el.class_list().contains(FIELD_ERROR_CLASS))
            .map(|el| el.get_attribute("title").unwrap_or_default())
    }
}
