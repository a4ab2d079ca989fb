//! The three record listings: own submissions, all submissions and the
//! authorized view.

use dioxus::prelude::*;
use store::{BusinessUnit, InformationType};

use crate::export::ExportKind;
use crate::scope::format_scope_label;
use crate::state::RecordCollection;
use crate::{use_actions, use_app_state, Icon};
use crate::icons::{FaDownload, FaFilter, FaRotateRight, FaXmark};

use super::RecordTable;

#[component]
pub fn MySubmissionsView() -> Element {
    let actions = use_actions();

    rsx! {
        div {
            class: "listing",
            div {
                class: "listing-header",
                h2 { "Mes informations" }
                button {
                    class: "btn",
                    title: "Actualiser",
                    onclick: move |_| {
                        let actions = actions.clone();
                        spawn(async move { actions.refresh(RecordCollection::Mine).await });
                    },
                    Icon { icon: FaRotateRight, width: 14, height: 14 }
                }
            }
            RecordTable { kind: RecordCollection::Mine, show_submitter: false }
        }
    }
}

#[component]
pub fn AllSubmissionsView() -> Element {
    rsx! {
        div {
            class: "listing",
            div {
                class: "listing-header",
                h2 { "Toutes les informations" }
                ExportButton { kind: ExportKind::AllSubmissions }
            }
            FilterBar { kind: RecordCollection::All, business_unit: true, submitter: true }
            RecordTable { kind: RecordCollection::All, show_submitter: true }
        }
    }
}

#[component]
pub fn AuthorizedRecordsView() -> Element {
    let state = use_app_state();
    let (bu_filter, scope) = {
        let s = state.read();
        let scope = s
            .profile()
            .and_then(|p| p.authorized_scope.clone())
            .unwrap_or_default();
        (s.authorized_bu_filter_enabled(), format_scope_label(&scope))
    };

    rsx! {
        div {
            class: "listing",
            div {
                class: "listing-header",
                h2 { "Vue autorisée" }
                ExportButton { kind: ExportKind::AuthorizedView }
            }
            if !bu_filter && !scope.is_empty() {
                p { class: "listing-scope", "Périmètre : {scope}" }
            }
            FilterBar { kind: RecordCollection::Authorized, business_unit: bu_filter, submitter: false }
            RecordTable { kind: RecordCollection::Authorized, show_submitter: true }
        }
    }
}

#[component]
fn ExportButton(kind: ExportKind) -> Element {
    let actions = use_actions();

    rsx! {
        button {
            class: "btn",
            onclick: move |_| actions.export_csv(kind),
            Icon { icon: FaDownload, width: 14, height: 14 }
            " Exporter CSV"
        }
    }
}

/// Server-side filters of a collection. Edits are local until "Filtrer".
#[component]
fn FilterBar(kind: RecordCollection, business_unit: bool, submitter: bool) -> Element {
    let mut state = use_app_state();
    let actions = use_actions();

    let (date, from, to, bu, info_type, user_id, users) = {
        let s = state.read();
        let filters = s.records(kind).filters();
        let users: Vec<(String, String)> = if submitter {
            s.users
                .items()
                .iter()
                .map(|u| (u.id.clone(), u.email.clone()))
                .collect()
        } else {
            Vec::new()
        };
        (
            filters.get("date").to_string(),
            filters.get("from").to_string(),
            filters.get("to").to_string(),
            filters.get("type_bu").to_string(),
            filters.get("type_info").to_string(),
            filters.get("user_id").to_string(),
            users,
        )
    };

    let apply = {
        let actions = actions.clone();
        move |_| {
            let actions = actions.clone();
            spawn(async move { actions.apply_filters(kind).await });
        }
    };
    let clear = move |_| {
        let actions = actions.clone();
        spawn(async move { actions.clear_filters(kind).await });
    };

    rsx! {
        div {
            class: "filter-bar",
            label {
                "Date"
                input {
                    r#type: "date",
                    value: "{date}",
                    oninput: move |evt| { state.write().records_mut(kind).set_filter("date", evt.value()); },
                }
            }
            label {
                "Du"
                input {
                    r#type: "date",
                    value: "{from}",
                    oninput: move |evt| { state.write().records_mut(kind).set_filter("from", evt.value()); },
                }
            }
            label {
                "Au"
                input {
                    r#type: "date",
                    value: "{to}",
                    oninput: move |evt| { state.write().records_mut(kind).set_filter("to", evt.value()); },
                }
            }
            if business_unit {
                label {
                    "BU"
                    select {
                        value: "{bu}",
                        onchange: move |evt| { state.write().records_mut(kind).set_filter("type_bu", evt.value()); },
                        option { value: "", "Toutes les BU" }
                        for unit in BusinessUnit::ALL {
                            option {
                                key: "{unit.as_str()}",
                                value: unit.as_str(),
                                selected: bu == unit.as_str(),
                                "{unit.as_str()}"
                            }
                        }
                    }
                }
            }
            label {
                "Type"
                select {
                    value: "{info_type}",
                    onchange: move |evt| { state.write().records_mut(kind).set_filter("type_info", evt.value()); },
                    option { value: "", "Tous" }
                    for t in InformationType::ALL {
                        option {
                            key: "{t.label()}",
                            value: t.label(),
                            selected: info_type == t.label(),
                            "{t.label()}"
                        }
                    }
                }
            }
            if submitter {
                label {
                    "Utilisateur"
                    select {
                        value: "{user_id}",
                        onchange: move |evt| { state.write().records_mut(kind).set_filter("user_id", evt.value()); },
                        option { value: "", "Tous" }
                        for (id, email) in users {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: user_id == id,
                                "{email}"
                            }
                        }
                    }
                }
            }
            div {
                class: "filter-actions",
                button {
                    class: "btn btn-primary",
                    onclick: apply,
                    Icon { icon: FaFilter, width: 12, height: 12 }
                    " Filtrer"
                }
                button {
                    class: "btn",
                    onclick: clear,
                    Icon { icon: FaXmark, width: 12, height: 12 }
                    " Réinitialiser"
                }
            }
        }
    }
}
