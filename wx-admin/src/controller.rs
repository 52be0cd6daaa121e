//! Request dispatch and response handling.
//!
//! The controller is synchronous. [`Controller::dispatch`] turns a user
//! intent into an encoded [`Request`] (or handles it locally), the caller
//! sends it with whatever transport it has, and [`Controller::complete`]
//! classifies the result and updates the screen and forms. Responses are
//! applied in arrival order; a late response overwrites newer state.

use crate::dialog::{Cleanup, DialogLifecycle, DialogState};
use crate::error::{ControllerError, TransportError};
use crate::form::{FormBinder, FormSurface};
use crate::state::{AppState, Screen};
use log::{error, info, warn};
use wx_protocol::action::SERVICE_PARAM;
use wx_protocol::{decode, Action, ActionKind, ErrorEntry, Outcome, Payload, Request, COMMUNICATION_ERROR};

/// Something the operator did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PageLoad,
    Refresh,
    ApplyConfig,
    OpenAddDialog,
    ConfirmAddDialog,
    CancelAddDialog,
    DeleteRow(usize),
    ShowData(usize),
    SelectRow(usize),
    ChangeService(String),
    /// Service specific lookup from inside the dialog; the returned choices
    /// replace the options of the `target` select list.
    DialogLookup { action: String, target: String },
}

pub struct Controller<F> {
    state: AppState,
    config_form: F,
    add_form: F,
}

impl<F: FormSurface> Controller<F> {
    pub fn new(config_form: F, add_form: F) -> Self {
        Self {
            state: AppState::default(),
            config_form,
            add_form,
        }
    }

    /// Replace the default clear-inputs behaviour run when the dialog closes.
    pub fn with_dialog_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.state.dialog = DialogLifecycle::with_cleanup(cleanup);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.state.screen
    }

    pub fn dialog_state(&self) -> DialogState {
        self.state.dialog.state()
    }

    pub fn config_form(&self) -> &F {
        &self.config_form
    }

    pub fn config_form_mut(&mut self) -> &mut F {
        &mut self.config_form
    }

    pub fn add_form(&self) -> &F {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut F {
        &mut self.add_form
    }

    /// Handle an intent. Returns the request to send, if any.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<Request>, ControllerError> {
        let action = match intent {
            Intent::PageLoad => Action::Init,
            Intent::Refresh => Action::Refresh,
            Intent::ApplyConfig => {
                // the server saves the service named in the payload
                let mut form = self.config_form.serialize();
                if let Some(service) = &self.state.screen.services.selected {
                    form.entry(SERVICE_PARAM.to_string())
                        .or_insert_with(|| service.clone());
                }
                Action::ApplyConfig(form)
            }
            Intent::OpenAddDialog => {
                if !self.state.screen.add_location_enabled {
                    return Err(ControllerError::AddLocationDisabled);
                }
                self.state.dialog.open()?;
                return Ok(None);
            }
            Intent::ConfirmAddDialog => Action::AddLocation(self.state.dialog.confirm(&mut self.add_form)?),
            Intent::CancelAddDialog => {
                self.state.dialog.cancel(&mut self.add_form);
                return Ok(None);
            }
            Intent::DeleteRow(row) => Action::DeleteRow(self.current_row(row)?),
            Intent::ShowData(row) => Action::ShowData(self.current_row(row)?),
            Intent::SelectRow(row) => {
                let row = self.current_row(row)?;
                self.state.screen.locations.select(row);
                return Ok(None);
            }
            Intent::ChangeService(service) => Action::ChangeService(service),
            Intent::DialogLookup { action, target } => {
                if !self.state.dialog.is_open() {
                    return Err(ControllerError::DialogClosed);
                }
                self.state.lookup_target = Some(target);
                Action::DialogAction {
                    name: action,
                    form: self.add_form.serialize(),
                }
            }
        };

        let request = action.into_request();
        if request.kind.mutates_table() {
            self.state.pending_mutations += 1;
        }
        info!("[WX] dispatch: {} ({} params)", request.kind, request.params.len());
        Ok(Some(request))
    }

    /// Apply the transport result of a request produced by [`Self::dispatch`].
    pub fn complete(&mut self, request: &Request, response: Result<String, TransportError>) {
        let kind = request.kind;
        if kind.mutates_table() {
            self.state.pending_mutations = self.state.pending_mutations.saturating_sub(1);
        }
        self.finish(kind, response);
        if kind == ActionKind::DialogAction {
            self.state.lookup_target = None;
        }
    }

    fn finish(&mut self, kind: ActionKind, response: Result<String, TransportError>) {
        let body = match response {
            Ok(body) => body,
            Err(e) => {
                error!("[WX] {} failed: {}", kind, e);
                self.communication_failure();
                return;
            }
        };
        match decode(&body) {
            Ok(outcome) => self.apply(kind, outcome),
            Err(e) => {
                error!("[WX] {} returned an undecodable body: {}", kind, e);
                self.communication_failure();
            }
        }
    }

    /// Apply an already classified response.
    pub fn apply(&mut self, kind: ActionKind, outcome: Outcome) {
        match outcome {
            Outcome::Fatal(message) => {
                warn!("[WX] {} fatal: {}", kind, message);
                self.state.screen.error_panel.show(vec![message]);
            }
            Outcome::Failure(entries) => {
                warn!("[WX] {} returned {} errors", kind, entries.len());
                self.show_errors(kind, &entries);
            }
            Outcome::Success(payload) => {
                info!("[WX] {} succeeded", kind);
                self.render(kind, *payload);
            }
        }
    }

    fn current_row(&self, row: usize) -> Result<usize, ControllerError> {
        if self.state.rows_current() && self.state.screen.locations.row(row).is_some() {
            Ok(row)
        } else {
            Err(ControllerError::StaleRow(row))
        }
    }

    fn communication_failure(&mut self) {
        self.state
            .screen
            .error_panel
            .show(vec![COMMUNICATION_ERROR.to_string()]);
    }

    fn show_errors(&mut self, kind: ActionKind, entries: &[ErrorEntry]) {
        let form = match kind {
            ActionKind::AddLocation | ActionKind::DialogAction => &mut self.add_form,
            _ => &mut self.config_form,
        };
        let mut globals = Vec::new();
        for entry in entries {
            match entry {
                ErrorEntry::Validation { field, message } => form.mark_field_error(field, message),
                ErrorEntry::Global { message } => globals.push(message.clone()),
            }
        }
        if !globals.is_empty() {
            self.state.screen.error_panel.show(globals);
        }
    }

    fn render(&mut self, kind: ActionKind, payload: Payload) {
        let Payload {
            data,
            locations,
            current_service,
            ui,
            detail,
            list,
        } = payload;
        let state = &mut self.state;

        state.screen.error_panel.hide();
        self.config_form.clear_field_errors();
        self.add_form.clear_field_errors();

        if let Some(markup) = ui.service_config {
            self.config_form.load_markup(&markup);
        }
        if let Some(markup) = ui.add_dialog {
            self.add_form.load_markup(&markup);
            state.dialog.content_replaced();
        }
        if let Some(headers) = ui.entry_headers {
            state.headers = headers;
        }
        if let Some(services) = ui.services {
            state.screen.services.populate(services);
        }
        if let Some(data) = data {
            self.config_form.apply_data(&data);
        }

        let rows = match locations {
            Some(rows) => Some(rows),
            None if kind.returns_location_table() => Some(Vec::new()),
            None => None,
        };
        if let Some(rows) = rows {
            state.screen.locations.render(&state.headers, &rows);
            state.screen.result.hide();
        }

        if let Some(key) = current_service {
            state.screen.services.select(&key);
        }

        if let Some(choices) = list {
            if let Some(target) = state.lookup_target.take() {
                self.add_form.replace_choices(&target, &choices);
            }
        }

        match kind {
            ActionKind::ShowData => state.screen.result.render(&detail),
            ActionKind::ChangeService => state.screen.add_location_enabled = false,
            ActionKind::ApplyConfig => state.screen.add_location_enabled = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;
    use serde_json::json;
    use wx_protocol::action::ROW_PARAM;
    use wx_protocol::Method;

    fn controller() -> Controller<MemoryForm> {
        Controller::new(
            MemoryForm::new()
                .text("conditionrefresh", "")
                .text("forecastrefresh", "")
                .text("zip", "")
                .radio("units", &["english", "metric"]),
            MemoryForm::new()
                .text("path", "")
                .text("location", "")
                .choice("locationlist"),
        )
    }

    fn run(c: &mut Controller<MemoryForm>, intent: Intent, body: serde_json::Value) -> Request {
        let request = c.dispatch(intent).unwrap().unwrap();
        c.complete(&request, Ok(body.to_string()));
        request
    }

    fn init_body() -> serde_json::Value {
        json!({
            "adddialog": "<input name='path'>",
            "serviceconfig": "<input name='conditionrefresh'>",
            "services": [{"key": "a", "display": "A"}, {"key": "b", "display": "B"}],
            "currentservice": "a",
            "entryheaders": ["Path", "Zip"],
            "data": {"conditionrefresh": "15", "forecastrefresh": "60", "units": "metric"},
            "locations": [["a", "12345", "t0"], ["b", "54321", "t1"]]
        })
    }

    fn initialized() -> Controller<MemoryForm> {
        let mut c = controller();
        run(&mut c, Intent::PageLoad, init_body());
        c
    }

    #[test]
    fn init_renders_table_with_trailing_last_update() {
        let mut c = controller();
        let request = run(
            &mut c,
            Intent::PageLoad,
            json!({"locations": [["a", "12345", "t0"]], "entryheaders": ["Path", "Zip"]}),
        );
        assert_eq!(request.method, Method::Get);
        let table = &c.screen().locations;
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.headers, vec!["Path", "Zip", "Last Update"]);
        assert_eq!(table.rows[0].id, 0);
    }

    #[test]
    fn init_applies_ui_definition_and_form_data() {
        let c = initialized();
        assert_eq!(c.config_form().value("conditionrefresh").as_deref(), Some("15"));
        assert_eq!(c.config_form().value("units").as_deref(), Some("metric"));
        assert_eq!(c.config_form().markup(), Some("<input name='conditionrefresh'>"));
        assert_eq!(c.add_form().markup(), Some("<input name='path'>"));
        assert_eq!(c.screen().services.options.len(), 2);
        assert_eq!(c.screen().services.selected.as_deref(), Some("a"));
        assert!(c.state().dialog.has_content());
    }

    #[test]
    fn validation_error_marks_field_and_skips_rendering() {
        let mut c = initialized();
        let before = c.screen().locations.clone();
        c.config_form_mut().set_value("zip", "abc");
        run(
            &mut c,
            Intent::ApplyConfig,
            json!({"errors": [{"errortype": "validation", "field": "zip", "message": "Invalid zip"}]}),
        );
        assert_eq!(c.config_form().field_error("zip").as_deref(), Some("Invalid zip"));
        assert_eq!(c.screen().locations, before);
        assert!(!c.screen().error_panel.visible);
    }

    #[test]
    fn global_errors_show_one_message_each_and_persist_until_success() {
        let mut c = initialized();
        run(
            &mut c,
            Intent::ApplyConfig,
            json!({"errors": [
                {"errortype": "validation", "field": "conditionrefresh", "message": "bad"},
                {"message": "first"},
                {"message": "second"}
            ]}),
        );
        assert!(c.screen().error_panel.visible);
        assert_eq!(c.screen().error_panel.messages, vec!["first", "second"]);

        // another failing cycle keeps the older field marker
        run(&mut c, Intent::ApplyConfig, json!({"errors": [{"message": "third"}]}));
        assert_eq!(c.screen().error_panel.messages, vec!["third"]);
        assert_eq!(c.config_form().field_error("conditionrefresh").as_deref(), Some("bad"));

        run(&mut c, Intent::Refresh, json!({"locations": []}));
        assert!(!c.screen().error_panel.visible);
        assert!(c.config_form().field_errors().is_empty());
    }

    #[test]
    fn show_data_renders_only_supplied_sections() {
        let mut c = initialized();
        let request = run(
            &mut c,
            Intent::ShowData(1),
            json!({"name": "Home", "current": [{"field": "Temp", "value": "72", "units": "F"}]}),
        );
        assert_eq!(request.param(ROW_PARAM), Some("1"));
        let panel = &c.screen().result;
        assert!(panel.visible);
        assert_eq!(panel.current.len(), 1);
        assert_eq!(panel.current[0].field, "Temp");
        assert_eq!(panel.current[0].value, "72 F");
        assert!(panel.station.is_empty());
        assert!(panel.forecast_rows.is_empty());
        assert!(panel.icons.is_empty());
        // the table is untouched by show-data
        assert_eq!(c.screen().locations.rows.len(), 2);
    }

    #[test]
    fn change_service_selects_option_and_disables_add_until_applied() {
        let mut c = initialized();
        let request = run(
            &mut c,
            Intent::ChangeService("b".into()),
            json!({
                "services": [{"key": "a", "display": "A"}, {"key": "b", "display": "B"}],
                "currentservice": "b",
                "adddialog": "<input name='path'><input name='location'>",
                "entryheaders": ["Location Path", "City"]
            }),
        );
        assert_eq!(request.param(SERVICE_PARAM), Some("b"));
        assert_eq!(c.screen().services.selected.as_deref(), Some("b"));
        assert!(!c.screen().add_location_enabled);
        assert_eq!(c.dispatch(Intent::OpenAddDialog), Err(ControllerError::AddLocationDisabled));
        assert!(c.screen().locations.is_empty());
        assert_eq!(c.screen().locations.headers, vec!["Location Path", "City", "Last Update"]);

        run(&mut c, Intent::ApplyConfig, json!({"data": {"conditionrefresh": "5"}}));
        assert!(c.screen().add_location_enabled);
        assert_eq!(c.dispatch(Intent::OpenAddDialog), Ok(None));
    }

    #[test]
    fn transport_failure_shows_fixed_message_and_changes_nothing_else() {
        let mut c = initialized();
        let screen_before = c.screen().clone();
        let request = c.dispatch(Intent::DeleteRow(0)).unwrap().unwrap();
        c.complete(&request, Err(TransportError::Status(500)));
        assert!(c.screen().error_panel.visible);
        assert_eq!(c.screen().error_panel.messages, vec!["Error communicating with server"]);
        assert_eq!(c.screen().locations, screen_before.locations);
        assert_eq!(c.screen().result, screen_before.result);
        assert_eq!(c.screen().services, screen_before.services);
    }

    #[test]
    fn undecodable_body_is_a_communication_failure() {
        let mut c = initialized();
        let request = c.dispatch(Intent::Refresh).unwrap().unwrap();
        c.complete(&request, Ok("<html>oops</html>".to_string()));
        assert_eq!(c.screen().error_panel.messages, vec![COMMUNICATION_ERROR]);
        assert_eq!(c.screen().locations.rows.len(), 2);
    }

    #[test]
    fn fatal_error_short_circuits_rendering() {
        let mut c = initialized();
        run(
            &mut c,
            Intent::Refresh,
            json!({"error": "This add-on is not licensed", "locations": []}),
        );
        assert_eq!(c.screen().error_panel.messages, vec!["This add-on is not licensed"]);
        assert_eq!(c.screen().locations.rows.len(), 2);
    }

    #[test]
    fn confirm_add_submits_dialog_form_and_resets_regardless_of_outcome() {
        let mut c = initialized();
        c.dispatch(Intent::OpenAddDialog).unwrap();
        c.add_form_mut().set_value("path", "#site/bldg");
        c.add_form_mut().set_value("location", "27601");

        let request = c.dispatch(Intent::ConfirmAddDialog).unwrap().unwrap();
        assert_eq!(request.kind, ActionKind::AddLocation);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.param("path"), Some("#site/bldg"));
        assert_eq!(c.dialog_state(), DialogState::Closed);
        assert_eq!(c.add_form().value("path").as_deref(), Some(""));

        c.complete(
            &request,
            Ok(json!({"errors": [{"message": "An entry for #site/bldg has already been configured"}]})
                .to_string()),
        );
        assert_eq!(c.add_form().value("path").as_deref(), Some(""));
        assert!(c.screen().error_panel.visible);
    }

    #[test]
    fn cancel_add_issues_no_request() {
        let mut c = initialized();
        c.dispatch(Intent::OpenAddDialog).unwrap();
        c.add_form_mut().set_value("path", "#x");
        assert_eq!(c.dispatch(Intent::CancelAddDialog), Ok(None));
        assert_eq!(c.add_form().value("path").as_deref(), Some(""));
        assert_eq!(c.dialog_state(), DialogState::Closed);
    }

    #[test]
    fn add_location_renders_new_table() {
        let mut c = initialized();
        c.dispatch(Intent::OpenAddDialog).unwrap();
        run(
            &mut c,
            Intent::ConfirmAddDialog,
            json!({"locations": [["a", "1", "t0"], ["b", "2", "t1"], ["c", "3", "t2"]]}),
        );
        assert_eq!(c.screen().locations.rows.len(), 3);
        assert_eq!(c.screen().locations.rows[2].id, 2);
    }

    #[test]
    fn row_ids_are_rejected_while_a_mutation_is_in_flight() {
        let mut c = initialized();
        let delete = c.dispatch(Intent::DeleteRow(0)).unwrap().unwrap();
        assert_eq!(c.dispatch(Intent::DeleteRow(0)), Err(ControllerError::StaleRow(0)));
        assert_eq!(c.dispatch(Intent::ShowData(1)), Err(ControllerError::StaleRow(1)));

        c.complete(&delete, Ok(json!({"locations": [["b", "54321", "t1"]]}).to_string()));
        assert_eq!(c.dispatch(Intent::ShowData(1)), Err(ControllerError::StaleRow(1)));
        assert!(c.dispatch(Intent::ShowData(0)).unwrap().is_some());
    }

    #[test]
    fn failed_mutation_restores_row_ids() {
        let mut c = initialized();
        let delete = c.dispatch(Intent::DeleteRow(1)).unwrap().unwrap();
        c.complete(&delete, Err(TransportError::Status(503)));
        assert!(c.dispatch(Intent::DeleteRow(1)).unwrap().is_some());
    }

    #[test]
    fn table_render_hides_result_panel_and_clears_selection() {
        let mut c = initialized();
        c.dispatch(Intent::SelectRow(1)).unwrap();
        assert_eq!(c.screen().locations.selected, Some(1));
        run(&mut c, Intent::ShowData(0), json!({"name": "Home"}));
        assert!(c.screen().result.visible);

        run(&mut c, Intent::Refresh, init_body());
        assert!(!c.screen().result.visible);
        assert_eq!(c.screen().locations.selected, None);
    }

    #[test]
    fn refresh_without_locations_key_renders_empty_table() {
        let mut c = initialized();
        run(&mut c, Intent::Refresh, json!({"data": {"conditionrefresh": "15"}}));
        assert!(c.screen().locations.is_empty());
        assert_eq!(c.screen().locations.headers.len(), 3);
    }

    #[test]
    fn dialog_lookup_fills_target_choice_list() {
        let mut c = initialized();
        assert_eq!(
            c.dispatch(Intent::DialogLookup {
                action: "findcity".into(),
                target: "locationlist".into()
            }),
            Err(ControllerError::DialogClosed)
        );
        c.dispatch(Intent::OpenAddDialog).unwrap();
        c.add_form_mut().set_value("location", "Raleigh");
        let request = run(
            &mut c,
            Intent::DialogLookup {
                action: "findcity".into(),
                target: "locationlist".into(),
            },
            json!({"list": [{"key": "Z27601", "name": "Raleigh, NC (27601)"}]}),
        );
        assert_eq!(request.param("dialogaction"), Some("findcity"));
        assert_eq!(request.param("location"), Some("Raleigh"));
        assert_eq!(c.add_form().choices("locationlist").len(), 1);
        assert_eq!(c.add_form().value("locationlist").as_deref(), Some("Z27601"));
        // lookups never touch the table
        assert_eq!(c.screen().locations.rows.len(), 2);
        assert!(c.state().dialog.is_open());
    }

    #[test]
    fn apply_after_service_change_names_the_selected_service() {
        let mut c = initialized();
        run(
            &mut c,
            Intent::ChangeService("b".into()),
            json!({"currentservice": "b", "entryheaders": ["Path", "City"]}),
        );
        c.config_form_mut().set_value("conditionrefresh", "5");
        let apply = c.dispatch(Intent::ApplyConfig).unwrap().unwrap();
        assert_eq!(apply.param(SERVICE_PARAM), Some("b"));
        assert_eq!(apply.param("conditionrefresh"), Some("5"));
    }

    #[test]
    fn service_field_in_the_form_wins() {
        let mut c = Controller::new(
            MemoryForm::new().hidden("service", "a").text("conditionrefresh", ""),
            MemoryForm::new(),
        );
        run(&mut c, Intent::PageLoad, init_body());
        run(&mut c, Intent::ChangeService("b".into()), json!({"currentservice": "b"}));
        let apply = c.dispatch(Intent::ApplyConfig).unwrap().unwrap();
        assert_eq!(apply.param(SERVICE_PARAM), Some("a"));
    }

    #[test]
    fn failed_lookup_forgets_its_target() {
        let mut c = initialized();
        c.dispatch(Intent::OpenAddDialog).unwrap();
        let lookup = Intent::DialogLookup {
            action: "findcity".into(),
            target: "locationlist".into(),
        };

        run(&mut c, lookup.clone(), json!({"errors": [{"message": "No matching cities"}]}));
        assert_eq!(c.state().lookup_target, None);

        let request = c.dispatch(lookup).unwrap().unwrap();
        assert_eq!(c.state().lookup_target.as_deref(), Some("locationlist"));
        c.complete(&request, Err(TransportError::Status(502)));
        assert_eq!(c.state().lookup_target, None);

        // a later list without an outstanding lookup is ignored
        run(
            &mut c,
            Intent::Refresh,
            json!({"list": [{"key": "Z27601", "name": "Raleigh, NC (27601)"}]}),
        );
        assert!(c.add_form().choices("locationlist").is_empty());
    }

    #[test]
    fn custom_dialog_cleanup_is_used() {
        let mut c = controller().with_dialog_cleanup(Box::new(|form: &mut dyn FormSurface| {
            form.set_value("path", "#default");
        }));
        run(&mut c, Intent::PageLoad, init_body());
        c.dispatch(Intent::OpenAddDialog).unwrap();
        c.dispatch(Intent::CancelAddDialog).unwrap();
        assert_eq!(c.add_form().value("path").as_deref(), Some("#default"));
    }

    #[test]
    fn reapplying_same_init_is_idempotent() {
        let mut c = initialized();
        let screen = c.screen().clone();
        let form = c.config_form().clone();
        run(&mut c, Intent::PageLoad, init_body());
        assert_eq!(c.screen(), &screen);
        assert_eq!(c.config_form(), &form);
    }
}
