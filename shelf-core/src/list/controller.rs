use shelf_common::{EntityCatalog, FilterMap, QueryState};
use tracing::{debug, warn};

use super::fetch::{ListRequest, ListSnapshot};
use super::view::ListView;
use crate::error::FetchError;

/// A fetch the controller wants performed
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: ListRequest,
}

/// What [`ListController::complete`] did with a result
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// A newer ticket was issued after this one
    Discarded,
    Failed(FetchError),
}

/// State machine of one list view.
///
/// Every issued ticket bumps the generation; only the result of the latest
/// generation is applied, whatever order results arrive in.
pub struct ListController<T> {
    catalog: &'static EntityCatalog,
    query: QueryState,
    snapshot: Option<ListSnapshot<T>>,
    loading: bool,
    notice: Option<String>,
    generation: u64,
    skeleton_rows: usize,
    /// Extra fields every request of this view selects
    custom_fields: Option<Vec<String>>,
}

impl<T: Clone> ListController<T> {
    pub fn new(catalog: &'static EntityCatalog, initial: QueryState, skeleton_rows: usize) -> Self {
        Self {
            catalog,
            query: initial,
            snapshot: None,
            loading: false,
            notice: None,
            generation: 0,
            skeleton_rows,
            custom_fields: None,
        }
    }

    pub fn catalog(&self) -> &'static EntityCatalog {
        self.catalog
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Select `fields` in addition to the defaults on every later request
    pub fn set_custom_fields(&mut self, fields: Option<Vec<String>>) {
        self.custom_fields = fields;
    }

    /// Move to `next`. Returns a ticket when a fetch is needed: always for
    /// the first call, afterwards only when the state actually changed.
    pub fn navigate(&mut self, next: QueryState) -> Option<FetchTicket> {
        if self.generation > 0 && next == self.query {
            return None;
        }
        self.query = next;
        Some(self.issue(None))
    }

    /// Fetch the current state again. A `filter_override` replaces the
    /// filter of this one request; the query state keeps its own.
    pub fn refetch(&mut self, filter_override: Option<FilterMap>) -> FetchTicket {
        self.issue(filter_override)
    }

    fn issue(&mut self, filter_override: Option<FilterMap>) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        let mut request = ListRequest::from_state(&self.query, self.catalog);
        request.custom_fields = self.custom_fields.clone();
        if let Some(filter) = filter_override {
            request.filter = filter;
        }
        debug!(
            "{}: issuing fetch #{} (skip={}, take={})",
            self.catalog.entity, self.generation, request.skip, request.take
        );
        FetchTicket {
            generation: self.generation,
            request,
        }
    }

    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ListSnapshot<T>, FetchError>,
    ) -> Outcome {
        if ticket.generation != self.generation {
            debug!(
                "{}: discarding stale fetch #{} (latest #{})",
                self.catalog.entity, ticket.generation, self.generation
            );
            return Outcome::Discarded;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.notice = None;
                Outcome::Applied
            }
            Err(e) => {
                warn!("{}: fetch #{} failed: {}", self.catalog.entity, ticket.generation, e);
                self.notice = Some(e.to_string());
                Outcome::Failed(e)
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn view(&self) -> ListView<T> {
        ListView {
            query: self.query.clone(),
            snapshot: self.snapshot.clone(),
            loading: self.loading,
            notice: self.notice.clone(),
            skeleton_rows: self.skeleton_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PRODUCTS;
    use shelf_common::FilterExpression;

    fn controller() -> ListController<&'static str> {
        ListController::new(&PRODUCTS, QueryState::new(10), 5)
    }

    #[test]
    fn test_first_navigate_always_fetches() {
        let mut c = controller();
        let ticket = c.navigate(QueryState::new(10)).unwrap();
        assert_eq!(ticket.generation, 1);
        assert!(c.view().loading);
        // same state again: nothing to do
        assert!(c.navigate(QueryState::new(10)).is_none());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut c = controller();
        let page1 = c.navigate(QueryState::new(10)).unwrap();
        let page2 = c.navigate(QueryState::new(10).with_page(2)).unwrap();

        assert_eq!(
            c.complete(&page2, Ok(ListSnapshot::new(vec!["p2"], 20))),
            Outcome::Applied
        );
        assert_eq!(
            c.complete(&page1, Ok(ListSnapshot::new(vec!["p1"], 20))),
            Outcome::Discarded
        );
        let view = c.view();
        assert_eq!(view.items(), &["p2"]);
        assert_eq!(view.query.page, 2);
        assert!(!view.loading);
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut c = controller();
        let old = c.navigate(QueryState::new(10)).unwrap();
        let _new = c.navigate(QueryState::new(25)).unwrap();
        c.complete(&old, Ok(ListSnapshot::empty()));
        assert!(c.view().loading);
        assert!(c.view().snapshot.is_none());
    }

    #[test]
    fn test_failure_keeps_snapshot() {
        let mut c = controller();
        let first = c.navigate(QueryState::new(10)).unwrap();
        c.complete(&first, Ok(ListSnapshot::new(vec!["a"], 1)));

        let second = c.navigate(QueryState::new(10).with_search("b")).unwrap();
        let outcome = c.complete(&second, Err(FetchError::Transport("offline".into())));
        assert!(matches!(outcome, Outcome::Failed(_)));

        let view = c.view();
        assert_eq!(view.items(), &["a"]);
        assert_eq!(view.notice.as_deref(), Some("Network error: offline"));
        assert_eq!(view.query.search(), Some("b"));

        c.dismiss_notice();
        assert_eq!(c.view().notice, None);
    }

    #[test]
    fn test_refetch_override_applies_once() {
        let mut c = controller();
        let state = QueryState::new(10)
            .with_filter_field(&PRODUCTS, "enabled", FilterExpression::BooleanEquals(true))
            .unwrap();
        c.navigate(state.clone()).unwrap();

        let ticket = c.refetch(Some(FilterMap::new()));
        assert!(ticket.request.filter.is_empty());
        assert_eq!(c.query(), &state);

        let plain = c.refetch(None);
        assert_eq!(plain.request.filter.len(), 1);
        assert_eq!(plain.generation, 3);
    }
}
