//! Admin account management: list, create, edit role/scope, delete.

use dioxus::prelude::*;
use store::{Role, UserAccount};

use crate::accounts::{EditAccountForm, NewAccountForm};
use crate::scope::{format_scope_label, ScopeTag};
use crate::{use_actions, use_app_state, Icon};
use crate::icons::{FaPen, FaTrash, FaUserPlus};

use super::{ModalOverlay, Pagination, SearchBox};

#[component]
pub fn UserManagementView() -> Element {
    let mut state = use_app_state();
    let actions = use_actions();
    let mut editing = use_signal(|| Option::<EditAccountForm>::None);
    let mut deleting = use_signal(|| Option::<UserAccount>::None);

    let (rows, page, total_pages, caption, search, loading, error, busy) = {
        let s = state.read();
        let view = s.users.view();
        (
            view.items.iter().map(|u| (*u).clone()).collect::<Vec<_>>(),
            view.page,
            view.total_pages,
            view.caption(),
            s.users.search().to_string(),
            s.users.is_loading(),
            s.users.error().map(str::to_string),
            s.busy,
        )
    };

    let confirm_delete = {
        let actions = actions.clone();
        move |_| {
            let Some(account) = deleting() else {
                return;
            };
            let actions = actions.clone();
            spawn(async move {
                actions.delete_user(&account.id).await;
                deleting.set(None);
            });
        }
    };

    rsx! {
        div {
            class: "listing",
            div {
                class: "listing-header",
                h2 { "Gestion des utilisateurs" }
            }

            NewAccountPanel {}

            SearchBox {
                value: search,
                on_input: move |term| state.write().set_user_search(term),
            }

            if let Some(error) = error {
                div { class: "collection-error", "{error}" }
            }

            if loading {
                div { class: "collection-loading", "Chargement…" }
            } else if rows.is_empty() {
                div { class: "collection-empty", "Aucun utilisateur" }
            } else {
                table {
                    thead {
                        tr {
                            th { "Email" }
                            th { "Code" }
                            th { "Rôle" }
                            th { "Vue" }
                            th { "Créé le" }
                            th {}
                        }
                    }
                    tbody {
                        for account in rows {
                            tr {
                                key: "{account.id}",
                                td { "{account.email}" }
                                td { code { "{account.access_code}" } }
                                td { span { class: "role-badge role-{account.role.code()}", "{account.role.label()}" } }
                                td {
                                    {account.authorized_scope.as_deref().map(format_scope_label).unwrap_or_default()}
                                }
                                td { {store::models::format_timestamp(&account.created_at)} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "icon-button",
                                        title: "Modifier",
                                        onclick: {
                                            let form = EditAccountForm::from_account(&account);
                                            move |_| editing.set(Some(form.clone()))
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "icon-button danger",
                                        title: "Supprimer",
                                        onclick: {
                                            let account = account.clone();
                                            move |_| deleting.set(Some(account.clone()))
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                current: page,
                total_pages: total_pages,
                caption: caption,
                on_select: move |page| state.write().users.set_page(page),
            }
        }

        if let Some(form) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                EditAccountDialog {
                    form: form,
                    on_done: move |_| editing.set(None),
                }
            }
        }

        if let Some(account) = deleting() {
            ModalOverlay {
                on_close: move |_| deleting.set(None),
                div {
                    class: "confirm-dialog",
                    h3 { "Supprimer l'utilisateur" }
                    p { "Supprimer définitivement {account.email} ?" }
                    div {
                        class: "dialog-actions",
                        button {
                            class: "btn",
                            onclick: move |_| deleting.set(None),
                            "Annuler"
                        }
                        button {
                            class: "btn btn-danger",
                            disabled: busy,
                            onclick: confirm_delete,
                            "Supprimer"
                        }
                    }
                }
            }
        }
    }
}

/// Role selector followed by the scope selector when the role needs one.
#[component]
fn RoleScopeFields(
    role: Role,
    scope: String,
    on_role: EventHandler<Role>,
    on_scope: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            "Rôle"
            select {
                onchange: move |evt| {
                    if let Some(role) = Role::from_code(&evt.value()) {
                        on_role.call(role);
                    }
                },
                for r in Role::ALL {
                    option {
                        key: "{r.code()}",
                        value: r.code(),
                        selected: r == role,
                        "{r.long_label()}"
                    }
                }
            }
        }
        if role == Role::Restricted {
            label {
                "Vue autorisée"
                select {
                    onchange: move |evt| on_scope.call(evt.value()),
                    option { value: "", selected: scope.is_empty(), "Sélectionner…" }
                    for tag in ScopeTag::ALL {
                        option {
                            key: "{tag.code()}",
                            value: tag.code(),
                            selected: scope == tag.code(),
                            "{tag.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NewAccountPanel() -> Element {
    let actions = use_actions();
    let state = use_app_state();
    let mut form = use_signal(NewAccountForm::default);
    let busy = state.read().busy;
    let current = form();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            if actions.create_user(&form()).await {
                form.set(NewAccountForm::default());
            }
        });
    };

    rsx! {
        form {
            class: "account-form",
            onsubmit: onsubmit,
            h3 {
                Icon { icon: FaUserPlus, width: 14, height: 14 }
                " Nouvel utilisateur"
            }
            label {
                "Email"
                input {
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
            }
            label {
                "Code utilisateur"
                input {
                    value: "{current.access_code}",
                    oninput: move |evt| form.write().access_code = evt.value(),
                }
            }
            RoleScopeFields {
                role: current.role,
                scope: current.scope.clone(),
                on_role: move |role| form.write().set_role(role),
                on_scope: move |scope| form.write().scope = scope,
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy,
                "Créer"
            }
        }
    }
}

#[component]
fn EditAccountDialog(form: EditAccountForm, on_done: EventHandler<()>) -> Element {
    let actions = use_actions();
    let state = use_app_state();
    let mut draft = use_signal(|| form.clone());
    let busy = state.read().busy;
    let current = draft();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            if actions.update_user(&draft()).await {
                on_done.call(());
            }
        });
    };

    rsx! {
        form {
            class: "account-form",
            onsubmit: onsubmit,
            h3 { "Modifier {current.email}" }
            RoleScopeFields {
                role: current.role,
                scope: current.scope.clone(),
                on_role: move |role| draft.write().set_role(role),
                on_scope: move |scope| draft.write().scope = scope,
            }
            div {
                class: "dialog-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_done.call(()),
                    "Annuler"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    "Enregistrer"
                }
            }
        }
    }
}
