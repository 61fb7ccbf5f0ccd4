//! `use_list`: route query parameters in, navigations out
//!
//! The URL is the only trigger of a fetch. Transition methods never touch
//! the session directly; they encode the next state over the current
//! parameters and hand it to `on_navigate`, which pushes a new route. The
//! route change re-renders the caller with new parameters, the hook decodes
//! them and the session fetches.

use std::rc::Rc;

use dioxus::prelude::*;
use shelf_common::codec::{self, DecodeContext};
use shelf_common::{
    EntityCatalog, FilterError, FilterExpression, ListParams, LogicalOperator, QueryState,
};
use shelf_core::{ListConfig, ListFetcher, ListSession};
use tracing::warn;

use crate::stores::list::{sync_list_state, ListUiState, ListUiStateStoreExt};

/// Handle to one list view. Cheap to copy into event handlers.
pub struct ListHandle<T: 'static> {
    pub catalog: &'static EntityCatalog,
    pub state: Store<ListUiState>,
    pub items: Signal<Vec<T>>,
    params: Signal<ListParams>,
    session: CopyValue<ListSession<T>>,
    on_navigate: Callback<ListParams>,
}

impl<T: 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListHandle<T> {}

impl<T: 'static> PartialEq for ListHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.session == other.session
    }
}

/// Drive a list view from route parameters.
///
/// `fetcher` is only called on the first render. `custom_fields` is sent
/// with every request of the view.
pub fn use_list<T: Clone + 'static>(
    catalog: &'static EntityCatalog,
    config: &ListConfig,
    fetcher: impl FnOnce() -> Rc<dyn ListFetcher<T>>,
    custom_fields: Option<Vec<String>>,
    params: ListParams,
    on_navigate: Callback<ListParams>,
) -> ListHandle<T> {
    let state = use_store(|| {
        ListUiState::new(
            QueryState::new(config.default_page_size()),
            config.page_sizes.clone(),
            config.search_debounce_ms,
        )
    });
    let items = use_signal(Vec::new);
    let mut current_params = use_signal(|| params.clone());
    let session = use_hook(|| {
        let mut session = ListSession::new(catalog, fetcher(), config).with_observer(move |view| {
            let mut items = items;
            sync_list_state(state, view);
            items.set(view.items().to_vec());
        });
        if let Some(fields) = custom_fields {
            session = session.with_custom_fields(fields);
        }
        CopyValue::new(session)
    });

    let page_sizes = config.page_sizes.clone();
    use_effect(use_reactive!(|params| {
        let decoded = codec::decode(&params, &DecodeContext::new(&page_sizes, catalog));
        for issue in &decoded.issues {
            warn!("{}: {issue}", catalog.entity);
        }
        current_params.set(params.clone());
        state.query().set(decoded.state.clone());
        let session = session.read().clone();
        spawn(async move {
            session.navigate(decoded.state).await;
        });
    }));

    ListHandle {
        catalog,
        state,
        items,
        params: current_params,
        session,
        on_navigate,
    }
}

impl<T: Clone + 'static> ListHandle<T> {
    /// Current query state, without subscribing
    pub fn query(&self) -> QueryState {
        self.state.query().peek().clone()
    }

    fn go(&self, next: QueryState) {
        if let Some(params) = next_params(&self.params.peek(), &self.query(), &next) {
            self.on_navigate.call(params);
        }
    }

    pub fn set_page(&self, page: u32) {
        self.go(self.query().with_page(page));
    }

    pub fn first_page(&self) {
        self.set_page(1);
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.go(self.query().with_per_page(per_page));
    }

    pub fn sort_by(&self, key: &str) {
        self.go(self.query().with_sort_click(key));
    }

    pub fn set_search(&self, text: &str) {
        self.go(self.query().with_search(text));
    }

    pub fn set_filter(&self, name: &str, expression: FilterExpression) -> Result<(), FilterError> {
        let next = self.query().with_filter_field(self.catalog, name, expression)?;
        self.go(next);
        Ok(())
    }

    pub fn remove_filter(&self, name: &str) {
        self.go(self.query().without_filter_field(name));
    }

    pub fn toggle_operator(&self) {
        let query = self.query();
        if let Some(operator) = query.operator() {
            self.go(query.with_operator(operator.toggled()));
        }
    }

    pub fn to_basic(&self) {
        self.go(self.query().to_basic());
    }

    pub fn to_advanced(&self) {
        let operator = self.catalog.default_operator;
        self.go(self.query().to_advanced(operator));
    }

    /// Drop search text or filter chips, keeping the mode
    pub fn clear_criteria(&self) {
        let query = self.query();
        let next = match query.operator() {
            Some(operator) => query.to_basic().to_advanced(operator),
            None => query.with_search(""),
        };
        self.go(next);
    }

    /// Fetch the current state again, e.g. after a failure
    pub fn refetch(&self) {
        let session = self.session.read().clone();
        spawn(async move {
            session.refetch(None).await;
        });
    }

    pub fn dismiss_notice(&self) {
        self.session.read().dismiss_notice();
    }

    pub fn operator(&self) -> Option<LogicalOperator> {
        self.state.query().read().operator()
    }
}

/// Parameters to navigate to, or `None` when `next` is already current
fn next_params(params: &ListParams, current: &QueryState, next: &QueryState) -> Option<ListParams> {
    (next != current).then(|| params.with_state(next))
}
