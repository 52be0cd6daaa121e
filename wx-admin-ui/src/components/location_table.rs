//! Location table component.

use crate::dispatch::send_intent;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_admin::Intent;

/// Configured locations with per-row delete and show-data actions.
///
/// Each row carries its 0-based render position, which is what the delete
/// and show-data requests send as `rownum`.
#[component]
pub fn LocationTable() -> Element {
    let state = use_context::<AppState>();
    let (table, add_enabled) = {
        let controller = state.controller.read();
        let screen = controller.screen();
        (screen.locations.clone(), screen.add_location_enabled)
    };

    rsx! {
        div {
            style: "margin-bottom: 16px;",
            table {
                id: "locations",
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th {}
                        for header in table.headers.iter() {
                            th {
                                style: "text-align: left; padding: 4px 8px; border-bottom: 1px solid #ccc;",
                                "{header}"
                            }
                        }
                        th {}
                    }
                }
                tbody {
                    for row in table.rows.iter().cloned() {
                        tr {
                            key: "{row.id}",
                            class: if table.selected == Some(row.id) { "select" } else { "" },
                            "data-row": "{row.id}",
                            onclick: move |_| send_intent(state, Intent::SelectRow(row.id)),
                            td {
                                button {
                                    class: "del",
                                    title: "Delete",
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        send_intent(state, Intent::DeleteRow(row.id));
                                    },
                                    "-"
                                }
                            }
                            for cell in row.cells.iter() {
                                td { style: "padding: 4px 8px;", "{cell}" }
                            }
                            td {
                                button {
                                    class: "data",
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        send_intent(state, Intent::ShowData(row.id));
                                    },
                                    "Show Data"
                                }
                            }
                        }
                    }
                }
            }
            button {
                id: "addlocation",
                style: "margin-top: 8px;",
                disabled: !add_enabled,
                onclick: move |_| send_intent(state, Intent::OpenAddDialog),
                "+ Add Location"
            }
        }
    }
}
