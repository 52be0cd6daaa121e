//! Result detail panel component.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_admin::result_panel::DetailRow;

#[derive(Props, Clone, PartialEq)]
struct DetailTableProps {
    rows: Vec<DetailRow>,
}

#[component]
fn DetailTable(props: DetailTableProps) -> Element {
    rsx! {
        table {
            style: "border-collapse: collapse; margin-bottom: 8px;",
            for row in props.rows.iter() {
                tr {
                    td { style: "font-weight: bold; padding: 2px 8px;", "{row.field}" }
                    td { style: "padding: 2px 8px;", "{row.value}" }
                }
            }
        }
    }
}

/// Station, current conditions, forecast and icons for one location.
/// Hidden until a show-data request succeeds; sections the server did not
/// send stay empty.
#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<AppState>();
    let panel = state.controller.read().screen().result.clone();

    if !panel.visible {
        return rsx! {};
    }

    rsx! {
        div {
            id: "result",
            style: "padding: 8px 16px; border: 1px solid #ccc; border-radius: 4px;",
            if !panel.name.is_empty() {
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "{panel.name}" }
            }
            if !panel.station.is_empty() {
                h4 { style: "margin: 4px 0;", "Station" }
                DetailTable { rows: panel.station.clone() }
            }
            if !panel.current.is_empty() {
                h4 { style: "margin: 4px 0;", "Current Conditions" }
                DetailTable { rows: panel.current.clone() }
            }
            if !panel.forecast_rows.is_empty() || !panel.forecast_headers.is_empty() {
                h4 { style: "margin: 4px 0;", "Forecast" }
                table {
                    style: "border-collapse: collapse; margin-bottom: 8px;",
                    thead {
                        tr {
                            for header in panel.forecast_headers.iter() {
                                th { style: "padding: 2px 8px; text-align: left;", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for row in panel.forecast_rows.iter() {
                            tr {
                                for cell in row.iter() {
                                    td { style: "padding: 2px 8px;", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
            if !panel.icons.is_empty() {
                h4 { style: "margin: 4px 0;", "Icons" }
                DetailTable { rows: panel.icons.clone() }
            }
        }
    }
}
