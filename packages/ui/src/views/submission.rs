//! The submission wizard screens.

use dioxus::prelude::*;
use store::{BusinessUnit, InformationType};

use crate::autocomplete::{matching_labs, product_candidates};
use crate::wizard::WizardStep;
use crate::{use_actions, use_app_state, use_catalog, Icon};
use crate::icons::{FaArrowLeft, FaCircleCheck, FaPaperPlane};

/// Shown entries of an open suggestion list.
const MAX_SUGGESTIONS: usize = 8;

#[component]
pub fn SubmissionWizard() -> Element {
    let state = use_app_state();
    let step = state.read().wizard.step();

    rsx! {
        div {
            class: "wizard",
            div {
                class: "wizard-progress",
                for n in 1..=4usize {
                    span {
                        key: "{n}",
                        class: if n <= step.number() { "wizard-dot done" } else { "wizard-dot" },
                        "{n}"
                    }
                }
            }
            {match step {
                WizardStep::ChooseBusinessUnit => rsx! { BusinessUnitStep {} },
                WizardStep::ChooseInformationType => rsx! { InformationTypeStep {} },
                WizardStep::FillDetails => rsx! { DetailsStep {} },
                WizardStep::Confirmed => rsx! { ConfirmedStep {} },
            }}
        }
    }
}

#[component]
fn BusinessUnitStep() -> Element {
    let mut state = use_app_state();

    rsx! {
        h2 { "Choisissez la Business Unit" }
        div {
            class: "choice-grid",
            for bu in BusinessUnit::ALL {
                button {
                    key: "{bu.as_str()}",
                    class: "choice",
                    onclick: move |_| state.write().edit_wizard(|w| w.choose_business_unit(bu)),
                    "{bu.as_str()}"
                }
            }
        }
    }
}

#[component]
fn InformationTypeStep() -> Element {
    let mut state = use_app_state();
    let bu = state
        .read()
        .wizard
        .pending()
        .business_unit
        .map(BusinessUnit::as_str)
        .unwrap_or_default();

    rsx! {
        h2 { "Type d'information" }
        p { class: "wizard-context", "Business Unit : {bu}" }
        div {
            class: "choice-grid",
            for kind in InformationType::ALL {
                button {
                    key: "{kind.label()}",
                    class: "choice",
                    onclick: move |_| state.write().edit_wizard(|w| w.choose_information_type(kind)),
                    "{kind.label()}"
                }
            }
        }
        BackButton {}
    }
}

#[component]
fn DetailsStep() -> Element {
    let mut state = use_app_state();
    let actions = use_actions();
    let catalog = use_catalog();
    let mut labs_open = use_signal(|| false);
    let mut products_open = use_signal(|| false);

    let (pending, busy) = {
        let s = state.read();
        (s.wizard.pending().clone(), s.busy)
    };
    let recommendation = pending.is_recommendation();
    let bu = pending.business_unit.map(BusinessUnit::as_str).unwrap_or_default();
    let kind = pending.information_type.map(InformationType::label).unwrap_or_default();

    let lab_suggestions: Vec<String> = if labs_open() {
        matching_labs(&catalog, &pending.lab)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|lab| lab.name.clone())
            .collect()
    } else {
        Vec::new()
    };
    let product_suggestions: Vec<String> = if products_open() {
        product_candidates(&catalog, &pending.lab, &pending.competing_product)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            actions.submit_information().await;
        });
    };

    rsx! {
        h2 { "Détails" }
        p { class: "wizard-context", "{bu} · {kind}" }
        form {
            class: "details-form",
            onsubmit: onsubmit,

            if !recommendation {
                div {
                    class: "autocomplete",
                    label { r#for: "wizard-lab", "Laboratoire *" }
                    input {
                        id: "wizard-lab",
                        autocomplete: "off",
                        value: "{pending.lab}",
                        onfocus: move |_| labs_open.set(true),
                        oninput: move |evt| {
                            labs_open.set(true);
                            state.write().edit_wizard(|w| w.set_lab(evt.value()));
                        },
                    }
                    if !lab_suggestions.is_empty() {
                        ul {
                            class: "suggestions",
                            for name in lab_suggestions {
                                li {
                                    key: "{name}",
                                    onmousedown: {
                                        let name = name.clone();
                                        move |_| {
                                            labs_open.set(false);
                                            state.write().edit_wizard(|w| w.set_lab(name.clone()));
                                        }
                                    },
                                    "{name}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "autocomplete",
                    label { r#for: "wizard-product", "Produit concurrent" }
                    input {
                        id: "wizard-product",
                        autocomplete: "off",
                        value: "{pending.competing_product}",
                        onfocus: move |_| {
                            labs_open.set(false);
                            products_open.set(true);
                        },
                        oninput: move |evt| {
                            products_open.set(true);
                            state.write().edit_wizard(|w| w.set_competing_product(evt.value()));
                        },
                    }
                    if !product_suggestions.is_empty() {
                        ul {
                            class: "suggestions",
                            for product in product_suggestions {
                                li {
                                    key: "{product}",
                                    onmousedown: {
                                        let product = product.clone();
                                        move |_| {
                                            products_open.set(false);
                                            state
                                                .write()
                                                .edit_wizard(|w| w.set_competing_product(product.clone()));
                                        }
                                    },
                                    "{product}"
                                }
                            }
                        }
                    }
                }
            }

            label {
                r#for: "wizard-comment",
                if recommendation { "Votre recommandation *" } else { "Commentaire" }
            }
            textarea {
                id: "wizard-comment",
                rows: 5,
                value: "{pending.comment}",
                onfocus: move |_| {
                    labs_open.set(false);
                    products_open.set(false);
                },
                oninput: move |evt| state.write().edit_wizard(|w| w.set_comment(evt.value())),
            }

            div {
                class: "wizard-actions",
                BackButton {}
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    if busy { " Envoi…" } else { " Envoyer" }
                }
            }
        }
    }
}

#[component]
fn ConfirmedStep() -> Element {
    let mut state = use_app_state();

    rsx! {
        div {
            class: "wizard-confirmed",
            Icon { icon: FaCircleCheck, width: 48, height: 48 }
            h2 { "Information envoyée" }
            p { "Merci pour votre contribution." }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.write().edit_wizard(|w| w.new_submission()),
                "Nouvelle soumission"
            }
        }
    }
}

#[component]
fn BackButton() -> Element {
    let mut state = use_app_state();

    rsx! {
        button {
            class: "btn",
            r#type: "button",
            onclick: move |_| state.write().edit_wizard(|w| w.back()),
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            " Retour"
        }
    }
}
