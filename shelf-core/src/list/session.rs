use std::cell::RefCell;
use std::rc::Rc;

use shelf_common::{EntityCatalog, FilterMap, QueryState};
use tracing::debug;

use super::controller::{FetchTicket, ListController, Outcome};
use super::fetch::ListFetcher;
use super::view::ListView;
use crate::config::ListConfig;

type Observer<T> = Rc<dyn Fn(&ListView<T>)>;

/// Per-view handle running a [`ListController`] against a [`ListFetcher`].
///
/// Cheap to clone; clones share the same controller. The observer is called
/// after every change to the view (fetch issued, result applied or failed).
pub struct ListSession<T> {
    controller: Rc<RefCell<ListController<T>>>,
    fetcher: Rc<dyn ListFetcher<T>>,
    observer: Option<Observer<T>>,
}

impl<T> Clone for ListSession<T> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            fetcher: self.fetcher.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<T: Clone + 'static> ListSession<T> {
    pub fn new(
        catalog: &'static EntityCatalog,
        fetcher: Rc<dyn ListFetcher<T>>,
        config: &ListConfig,
    ) -> Self {
        let initial = QueryState::new(config.default_page_size());
        Self {
            controller: Rc::new(RefCell::new(ListController::new(
                catalog,
                initial,
                config.placeholder_rows,
            ))),
            fetcher,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&ListView<T>) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Have every request of this view select `fields` as well
    pub fn with_custom_fields(self, fields: Vec<String>) -> Self {
        self.controller.borrow_mut().set_custom_fields(Some(fields));
        self
    }

    pub fn catalog(&self) -> &'static EntityCatalog {
        self.controller.borrow().catalog()
    }

    pub fn view(&self) -> ListView<T> {
        self.controller.borrow().view()
    }

    /// Move to `next` and fetch it. `None` when the state did not change.
    pub async fn navigate(&self, next: QueryState) -> Option<Outcome> {
        let ticket = self.controller.borrow_mut().navigate(next)?;
        Some(self.run(ticket).await)
    }

    /// Fetch the current state again, optionally with a one-off filter
    pub async fn refetch(&self, filter_override: Option<FilterMap>) -> Outcome {
        let ticket = self.controller.borrow_mut().refetch(filter_override);
        self.run(ticket).await
    }

    pub fn dismiss_notice(&self) {
        self.controller.borrow_mut().dismiss_notice();
        self.notify();
    }

    async fn run(&self, ticket: FetchTicket) -> Outcome {
        self.notify();
        let result = self.fetcher.fetch(&ticket.request).await;
        let outcome = self.controller.borrow_mut().complete(&ticket, result);
        if outcome != Outcome::Discarded {
            self.notify();
        }
        debug!("Fetch #{} finished: {:?}", ticket.generation, outcome);
        outcome
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let view = self.view();
            observer(&view);
        }
    }
}
