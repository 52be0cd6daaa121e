//! Action catalog and request encoding.
//!
//! Every request goes to the same endpoint; the `action` parameter selects
//! what the server does. Reads are sent as GET query parameters, writes as
//! POST form bodies.

use crate::envelope::FormDataMap;
use crate::error::ProtocolError;
use std::fmt;
use std::str::FromStr;

pub const ACTION_PARAM: &str = "action";
pub const ROW_PARAM: &str = "rownum";
pub const SERVICE_PARAM: &str = "service";
pub const DIALOG_ACTION_PARAM: &str = "dialogaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Discriminator of a request, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Init,
    Refresh,
    ApplyConfig,
    AddLocation,
    DeleteRow,
    ShowData,
    ChangeService,
    DialogAction,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Init,
        ActionKind::Refresh,
        ActionKind::ApplyConfig,
        ActionKind::AddLocation,
        ActionKind::DeleteRow,
        ActionKind::ShowData,
        ActionKind::ChangeService,
        ActionKind::DialogAction,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ActionKind::Init => "init",
            ActionKind::Refresh => "update",
            ActionKind::ApplyConfig => "postconfig",
            ActionKind::AddLocation => "addrow",
            ActionKind::DeleteRow => "deleterow",
            ActionKind::ShowData => "showdata",
            ActionKind::ChangeService => "changeservice",
            ActionKind::DialogAction => "ui",
        }
    }

    pub fn method(self) -> Method {
        match self {
            ActionKind::Init | ActionKind::Refresh | ActionKind::ShowData | ActionKind::DialogAction => {
                Method::Get
            }
            ActionKind::ApplyConfig
            | ActionKind::AddLocation
            | ActionKind::DeleteRow
            | ActionKind::ChangeService => Method::Post,
        }
    }

    /// Whether a successful response replaces the location table.
    ///
    /// The server omits `locations` entirely when nothing is configured, so
    /// for these actions an absent key means an empty table.
    pub fn returns_location_table(self) -> bool {
        !matches!(self, ActionKind::ShowData | ActionKind::DialogAction)
    }

    /// Whether the request changes which location sits at which row index.
    pub fn mutates_table(self) -> bool {
        matches!(
            self,
            ActionKind::ApplyConfig
                | ActionKind::AddLocation
                | ActionKind::DeleteRow
                | ActionKind::ChangeService
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ActionKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| ProtocolError::UnknownAction(s.to_string()))
    }
}

/// A request with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Init,
    Refresh,
    /// Serialized service configuration form.
    ApplyConfig(FormDataMap),
    /// Serialized add-location dialog form.
    AddLocation(FormDataMap),
    DeleteRow(usize),
    ShowData(usize),
    /// Key of the newly selected service.
    ChangeService(String),
    /// Service specific dialog interaction, e.g. `findcity`.
    DialogAction { name: String, form: FormDataMap },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Init => ActionKind::Init,
            Action::Refresh => ActionKind::Refresh,
            Action::ApplyConfig(_) => ActionKind::ApplyConfig,
            Action::AddLocation(_) => ActionKind::AddLocation,
            Action::DeleteRow(_) => ActionKind::DeleteRow,
            Action::ShowData(_) => ActionKind::ShowData,
            Action::ChangeService(_) => ActionKind::ChangeService,
            Action::DialogAction { .. } => ActionKind::DialogAction,
        }
    }

    /// Encode the action as endpoint parameters.
    pub fn into_request(self) -> Request {
        let kind = self.kind();
        let mut params = vec![(ACTION_PARAM.to_string(), kind.wire_name().to_string())];
        match self {
            Action::Init | Action::Refresh => {}
            Action::ApplyConfig(form) | Action::AddLocation(form) => extend_form(&mut params, form),
            Action::DeleteRow(row) | Action::ShowData(row) => {
                params.push((ROW_PARAM.to_string(), row.to_string()));
            }
            Action::ChangeService(service) => {
                params.push((SERVICE_PARAM.to_string(), service));
            }
            Action::DialogAction { name, form } => {
                params.push((DIALOG_ACTION_PARAM.to_string(), name));
                extend_form(&mut params, form);
            }
        }
        Request {
            kind,
            method: kind.method(),
            params,
        }
    }
}

fn extend_form(params: &mut Vec<(String, String)>, form: FormDataMap) {
    // form fields never override the discriminators
    params.extend(
        form.into_iter()
            .filter(|(name, _)| name != ACTION_PARAM && name != DIALOG_ACTION_PARAM),
    );
}

/// An encoded request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: ActionKind,
    pub method: Method,
    pub params: Vec<(String, String)>,
}

impl Request {
    /// First value of the named parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
