//! # Filter / search / paginate pipeline
//!
//! One [`Pipeline`] per record collection. The three stages are:
//!
//! | Stage | Runs | Input |
//! |-------|------|-------|
//! | Server filter | on explicit apply / clear, as query parameters | [`FilterState`] |
//! | Client search | synchronously on every term change | search term + the collection's searchable fields |
//! | Windowing | on every render | 1-based page cursor, fixed page size |
//!
//! The page cursor goes back to 1 whenever the result set changes identity
//! (new term, new fetch result, cleared filters).
//!
//! Every fetch is stamped with a sequence number by [`Pipeline::begin_fetch`];
//! [`Pipeline::receive`] drops any response that is not for the latest one.

use api::Query;
use store::{InformationRecord, UserAccount};

/// Extracts the searchable text fields of one item.
pub type SearchFields<T> = for<'a> fn(&'a T) -> Vec<&'a str>;

/// Searchable fields of a record as listed to its submitter.
pub fn record_fields(record: &InformationRecord) -> Vec<&str> {
    vec![
        record.lab(),
        record.competing_product(),
        record.business_unit.as_str(),
        record.information_type.as_str(),
        record.comment(),
    ]
}

/// Searchable fields of a record in the cross-user listings.
pub fn record_fields_with_submitter(record: &InformationRecord) -> Vec<&str> {
    let mut fields = record_fields(record);
    fields.extend(record.submitter_email());
    fields
}

pub fn account_fields(account: &UserAccount) -> Vec<&str> {
    let mut fields = vec![
        account.email.as_str(),
        account.access_code.as_str(),
        account.role.code(),
    ];
    fields.extend(account.authorized_scope.as_deref());
    fields
}

/// Server-side filter values for a fixed set of recognized keys.
/// An empty value means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    values: Vec<(&'static str, String)>,
}

impl FilterState {
    pub fn new(keys: &[&'static str]) -> Self {
        Self {
            values: keys.iter().map(|k| (*k, String::new())).collect(),
        }
    }

    /// Set a filter value. Unknown keys are ignored and return `false`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => {
                *v = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        for (_, v) in &mut self.values {
            v.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|(_, v)| v.trim().is_empty())
    }

    /// Query parameters for the set filters, in key order.
    pub fn to_query(&self) -> Query {
        self.values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (*k, v.trim().to_string()))
            .collect()
    }
}

/// The visible window of a pipeline.
#[derive(Debug, PartialEq)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl<T> PageView<'_, T> {
    /// 1-based index of the first visible item (0 when there are none).
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_index(&self) -> usize {
        (self.page * self.page_size).min(self.total_filtered)
    }

    pub fn caption(&self) -> String {
        format!(
            "Affichage de {} à {} sur {} résultats",
            self.first_index(),
            self.last_index(),
            self.total_filtered
        )
    }
}

/// Filter/search/paginate state of one collection.
#[derive(Clone, Debug)]
pub struct Pipeline<T> {
    items: Vec<T>,
    filters: FilterState,
    search: String,
    page: usize,
    page_size: usize,
    fields: SearchFields<T>,
    issued: u64,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

impl<T> Pipeline<T> {
    pub fn new(filter_keys: &[&'static str], fields: SearchFields<T>, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::new(filter_keys),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            fields,
            issued: 0,
            loading: false,
            loaded: false,
            error: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Edit one filter value. Nothing is fetched until the caller applies.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.filters.set(key, value)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Move the cursor, clamped to the existing pages.
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one fetch has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// All items from the last successful fetch, before search.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Start a fetch and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        self.issued
    }

    /// Whether fetch `seq` is the one still awaited.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued && self.loading
    }

    /// Store the outcome of fetch `seq`.
    ///
    /// Returns `false` and leaves the state untouched when `seq` is not the
    /// latest issued fetch. On error the previous items are kept.
    pub fn receive(&mut self, seq: u64, outcome: Result<Vec<T>, String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.page = 1;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Back to the empty state. In-flight fetches are invalidated.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.items.clear();
        self.filters.clear();
        self.search.clear();
        self.page = 1;
        self.loading = false;
        self.loaded = false;
        self.error = None;
    }

    /// Search stage output: every item matching the current term.
    pub fn filtered(&self) -> Vec<&T> {
        if self.search.trim().is_empty() {
            return self.items.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                (self.fields)(item)
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    pub fn view(&self) -> PageView<'_, T> {
        let filtered = self.filtered();
        let total_filtered = filtered.len();
        let total_pages = total_filtered.div_ceil(self.page_size);
        let start = (self.page - 1) * self.page_size;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        PageView {
            items,
            page: self.page,
            total_filtered,
            total_pages,
            page_size: self.page_size,
        }
    }
}

/// One slot of the compact pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// Page numbers to render: first, last and `current ± 2`, with gaps. A gap
/// of exactly one page shows that page instead.
pub fn page_slots(current: usize, total_pages: usize) -> Vec<PageSlot> {
    const DELTA: usize = 2;
    let mut slots = Vec::new();
    let mut last: Option<usize> = None;
    for page in 1..=total_pages {
        let near = page + DELTA >= current && page <= current + DELTA;
        if page != 1 && page != total_pages && !near {
            continue;
        }
        if let Some(prev) = last {
            if page - prev == 2 {
                slots.push(PageSlot::Page(prev + 1));
            } else if page - prev > 2 {
                slots.push(PageSlot::Gap);
            }
        }
        slots.push(PageSlot::Page(page));
        last = Some(page);
    }
    slots
}
