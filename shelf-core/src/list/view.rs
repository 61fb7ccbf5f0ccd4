use shelf_common::pagination::{self, Pager};
use shelf_common::QueryState;

use super::fetch::ListSnapshot;

/// Why a loaded list has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search or filter excludes everything
    Filtered,
    /// There is nothing to list at all
    Empty,
}

/// Read model of one list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub query: QueryState,
    /// Last applied result. Kept while a newer fetch is in flight and on failure.
    pub snapshot: Option<ListSnapshot<T>>,
    pub loading: bool,
    /// Message of the last failed fetch, until dismissed or superseded
    pub notice: Option<String>,
    pub(crate) skeleton_rows: usize,
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        self.snapshot
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_items(&self) -> u64 {
        self.snapshot.as_ref().map(|s| s.total_items).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total_items(), self.query.per_page)
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.query.page, self.total_pages())
    }

    /// Skeleton rows to render: only while the very first page is loading
    pub fn placeholder_rows(&self) -> usize {
        if self.loading && self.snapshot.is_none() {
            self.skeleton_rows.min(self.query.per_page as usize)
        } else {
            0
        }
    }

    /// `Some` once a result with no rows has been applied
    pub fn empty_state(&self) -> Option<EmptyState> {
        let snapshot = self.snapshot.as_ref()?;
        if !snapshot.items.is_empty() {
            return None;
        }
        if self.query.is_filtered() {
            Some(EmptyState::Filtered)
        } else {
            Some(EmptyState::Empty)
        }
    }

    /// The requested page lies past the end of the result
    pub fn page_beyond(&self) -> bool {
        self.snapshot.is_some() && self.query.page_beyond(self.total_pages())
    }
}
