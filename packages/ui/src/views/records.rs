//! Building blocks shared by the record listings.

use dioxus::prelude::*;
use store::models::format_timestamp;
use store::InformationRecord;

use crate::pipeline::{page_slots, PageSlot};
use crate::state::RecordCollection;
use crate::{use_app_state, Icon};
use crate::icons::{FaChevronLeft, FaChevronRight, FaComment, FaMagnifyingGlass};

use super::ModalOverlay;

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
struct RecordRow {
    id: i64,
    date: String,
    submitter: String,
    business_unit: String,
    information_type: String,
    lab: String,
    product: String,
    comment: String,
}

impl RecordRow {
    fn from_record(record: &InformationRecord) -> Self {
        Self {
            id: record.id,
            date: format_timestamp(&record.created_at),
            submitter: record.submitter_email().unwrap_or("Inconnu").to_string(),
            business_unit: record.business_unit.clone(),
            information_type: record.information_type.clone(),
            lab: record.lab().to_string(),
            product: record.competing_product().to_string(),
            comment: record.comment().to_string(),
        }
    }
}

/// Free-text search input bound to a pipeline's search term.
#[component]
pub fn SearchBox(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "Rechercher…",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Compact page selector with the "Affichage de … à …" caption.
#[component]
pub fn Pagination(
    current: usize,
    total_pages: usize,
    caption: String,
    on_select: EventHandler<usize>,
) -> Element {
    if total_pages == 0 {
        return rsx! {};
    }
    let slots = page_slots(current, total_pages);

    rsx! {
        div {
            class: "pagination",
            span { class: "pagination-caption", "{caption}" }
            div {
                class: "pagination-pages",
                button {
                    disabled: current <= 1,
                    onclick: move |_| on_select.call(current.saturating_sub(1)),
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                for (i, slot) in slots.into_iter().enumerate() {
                    {match slot {
                        PageSlot::Page(page) => rsx! {
                            button {
                                key: "{i}",
                                class: if page == current { "page active" } else { "page" },
                                onclick: move |_| on_select.call(page),
                                "{page}"
                            }
                        },
                        PageSlot::Gap => rsx! {
                            span { key: "{i}", class: "page-gap", "…" }
                        },
                    }}
                }
                button {
                    disabled: current >= total_pages,
                    onclick: move |_| on_select.call(current + 1),
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}

/// The current page of a record collection, with search and pagination.
#[component]
pub fn RecordTable(kind: RecordCollection, show_submitter: bool) -> Element {
    let mut state = use_app_state();

    let (rows, page, total_pages, caption, search, loading, error) = {
        let s = state.read();
        let pipeline = s.records(kind);
        let view = pipeline.view();
        (
            view.items.iter().map(|r| RecordRow::from_record(r)).collect::<Vec<_>>(),
            view.page,
            view.total_pages,
            view.caption(),
            pipeline.search().to_string(),
            pipeline.is_loading(),
            pipeline.error().map(str::to_string),
        )
    };
    let comment = state.read().comment.clone();

    rsx! {
        div {
            class: "record-table",
            SearchBox {
                value: search,
                on_input: move |term| state.write().set_record_search(kind, term),
            }

            if let Some(error) = error {
                div { class: "collection-error", "{error}" }
            }

            if loading {
                div { class: "collection-loading", "Chargement…" }
            } else if rows.is_empty() {
                div { class: "collection-empty", "Aucune information trouvée" }
            } else {
                table {
                    thead {
                        tr {
                            th { "Date" }
                            if show_submitter {
                                th { "Utilisateur" }
                            }
                            th { "BU" }
                            th { "Type" }
                            th { "Laboratoire" }
                            th { "Produit concurrent" }
                            th { "Commentaire" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                td { "{row.date}" }
                                if show_submitter {
                                    td { "{row.submitter}" }
                                }
                                td { span { class: "bu-badge", "{row.business_unit}" } }
                                td { "{row.information_type}" }
                                td { "{row.lab}" }
                                td { "{row.product}" }
                                td {
                                    if !row.comment.is_empty() {
                                        button {
                                            class: "comment-button",
                                            title: "Voir le commentaire",
                                            onclick: {
                                                let text = row.comment.clone();
                                                move |_| state.write().comment = Some(text.clone())
                                            },
                                            Icon { icon: FaComment, width: 14, height: 14 }
                                        }
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
                on_select: move |page| state.write().records_mut(kind).set_page(page),
            }
        }

        if let Some(text) = comment {
            ModalOverlay {
                on_close: move |_| state.write().comment = None,
                div {
                    class: "comment-modal",
                    h3 { "Commentaire" }
                    p { "{text}" }
                    button {
                        class: "btn",
                        onclick: move |_| state.write().comment = None,
                        "Fermer"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_dates_follow_creation_time() {
        let record = InformationRecord {
            id: 4,
            business_unit: "HOSP".into(),
            information_type: "Veille commerciale".into(),
            lab: None,
            competing_product: None,
            comment: None,
            created_at: "2024-05-02T09:15:00Z".into(),
            info_date: Some("2024-04-30T08:00:00Z".into()),
            submitted_by: None,
        };
        let row = RecordRow::from_record(&record);
        assert_eq!(row.date, "02/05/2024 09:15");
        assert_eq!(row.submitter, "Inconnu");
        assert_eq!(row.lab, "");
    }
}
