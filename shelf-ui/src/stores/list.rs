//! List view state store

use dioxus::prelude::*;
use shelf_common::QueryState;
use shelf_core::{EmptyState, ListView};

/// Item-independent state of one list view, mirrored from the session
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ListUiState {
    /// Decoded from the current URL
    pub query: QueryState,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    /// Last fetch failure, until dismissed or superseded
    pub notice: Option<String>,
    pub placeholder_rows: usize,
    pub empty_state: Option<EmptyState>,
    /// Requested page lies past the last page
    pub page_beyond: bool,
    /// Page sizes offered by the pager
    pub page_sizes: Vec<u32>,
    pub search_debounce_ms: u64,
}

impl ListUiState {
    pub fn new(query: QueryState, page_sizes: Vec<u32>, search_debounce_ms: u64) -> Self {
        Self {
            query,
            total_items: 0,
            total_pages: 0,
            loading: true,
            notice: None,
            placeholder_rows: 0,
            empty_state: None,
            page_beyond: false,
            page_sizes,
            search_debounce_ms,
        }
    }
}

/// Copy the session's read model into the store, field by field
pub fn sync_list_state<T>(state: Store<ListUiState>, view: &ListView<T>) {
    state.query().set(view.query.clone());
    state.total_items().set(view.total_items());
    state.total_pages().set(view.total_pages());
    state.loading().set(view.loading);
    state.notice().set(view.notice.clone());
    state.placeholder_rows().set(view.placeholder_rows());
    state.empty_state().set(view.empty_state());
    state.page_beyond().set(view.page_beyond());
}
