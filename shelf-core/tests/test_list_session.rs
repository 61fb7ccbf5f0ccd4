use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use shelf_common::{FilterExpression, FilterMap, QueryState};
use shelf_core::entities::ORDERS;
use shelf_core::{
    FetchError, ListConfig, ListFetcher, ListRequest, ListSession, ListSnapshot, ListView, Outcome,
};
use futures::channel::oneshot;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    code: String,
}

fn orders(codes: &[&str]) -> Vec<Order> {
    codes
        .iter()
        .map(|c| Order {
            code: c.to_string(),
        })
        .collect()
}

/// Fetcher whose responses are released by the test, keyed by `skip`
#[derive(Default)]
struct GatedFetcher {
    gates: RefCell<HashMap<u64, oneshot::Receiver<Result<ListSnapshot<Order>, FetchError>>>>,
    requests: RefCell<Vec<ListRequest>>,
}

impl GatedFetcher {
    fn gate(&self, skip: u64) -> oneshot::Sender<Result<ListSnapshot<Order>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(skip, rx);
        tx
    }
}

#[async_trait(?Send)]
impl ListFetcher<Order> for GatedFetcher {
    async fn fetch(&self, request: &ListRequest) -> Result<ListSnapshot<Order>, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        let gate = self
            .gates
            .borrow_mut()
            .remove(&request.skip)
            .ok_or_else(|| FetchError::Transport("no gate".into()))?;
        gate.await
            .map_err(|_| FetchError::Transport("gate dropped".into()))?
    }
}

/// Fetcher that answers immediately from a fixed list
struct StaticFetcher {
    rows: Vec<Order>,
    requests: RefCell<Vec<ListRequest>>,
}

#[async_trait(?Send)]
impl ListFetcher<Order> for StaticFetcher {
    async fn fetch(&self, request: &ListRequest) -> Result<ListSnapshot<Order>, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        let items = self
            .rows
            .iter()
            .skip(request.skip as usize)
            .take(request.take as usize)
            .cloned()
            .collect();
        Ok(ListSnapshot::new(items, self.rows.len() as u64))
    }
}

fn config() -> ListConfig {
    ListConfig::default()
}

#[tokio::test]
async fn test_late_response_for_old_page_is_discarded() {
    let fetcher = Rc::new(GatedFetcher::default());
    let page1_tx = fetcher.gate(0);
    let page2_tx = fetcher.gate(10);
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config());

    let page1 = session.navigate(QueryState::new(10));
    let page2 = session.navigate(QueryState::new(10).with_page(2));
    let release = async {
        // page 2 answers first, page 1 last
        let _ = page2_tx.send(Ok(ListSnapshot::new(orders(&["B1", "B2"]), 20)));
        tokio::task::yield_now().await;
        let _ = page1_tx.send(Ok(ListSnapshot::new(orders(&["A1", "A2"]), 20)));
    };
    let (first, second, ()) = futures::join!(page1, page2, release);

    assert_eq!(first, Some(Outcome::Discarded));
    assert_eq!(second, Some(Outcome::Applied));
    let view = session.view();
    assert_eq!(view.query.page, 2);
    assert_eq!(view.items(), orders(&["B1", "B2"]).as_slice());
    assert!(!view.loading);
    assert_eq!(fetcher.requests.borrow().len(), 2);
}

#[tokio::test]
async fn test_unchanged_state_does_not_fetch_twice() {
    let fetcher = Rc::new(StaticFetcher {
        rows: orders(&["A"]),
        requests: RefCell::new(Vec::new()),
    });
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config());

    assert_eq!(
        session.navigate(QueryState::new(10)).await,
        Some(Outcome::Applied)
    );
    assert_eq!(session.navigate(QueryState::new(10)).await, None);
    assert_eq!(fetcher.requests.borrow().len(), 1);
}

#[tokio::test]
async fn test_refetch_override_does_not_persist() {
    let fetcher = Rc::new(StaticFetcher {
        rows: orders(&["A", "B"]),
        requests: RefCell::new(Vec::new()),
    });
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config());
    let state = QueryState::new(10)
        .with_filter_field(&ORDERS, "active", FilterExpression::BooleanEquals(true))
        .unwrap();
    session.navigate(state.clone()).await;

    let mut one_off = FilterMap::new();
    one_off.insert("code".into(), FilterExpression::Contains("B".into()));
    assert_eq!(session.refetch(Some(one_off.clone())).await, Outcome::Applied);
    session.refetch(None).await;

    let requests = fetcher.requests.borrow();
    assert_eq!(requests[1].filter, one_off);
    assert_eq!(requests[2].filter, requests[0].filter);
    assert_eq!(session.view().query, state);
}

#[tokio::test]
async fn test_failure_keeps_previous_rows_and_sets_notice() {
    let fetcher = Rc::new(GatedFetcher::default());
    let _ = fetcher.gate(0).send(Ok(ListSnapshot::new(orders(&["A"]), 1)));
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config());
    session.navigate(QueryState::new(10)).await;

    let _ = fetcher
        .gate(0)
        .send(Err(FetchError::Status {
            status: 502,
            message: "Bad Gateway".into(),
        }));
    let outcome = session.navigate(QueryState::new(10).with_search("x")).await;

    assert!(matches!(outcome, Some(Outcome::Failed(FetchError::Status { status: 502, .. }))));
    let view = session.view();
    assert_eq!(view.items(), orders(&["A"]).as_slice());
    assert!(view.notice.is_some());
    assert!(!view.loading);

    session.dismiss_notice();
    assert!(session.view().notice.is_none());
}

#[tokio::test]
async fn test_observer_sees_loading_then_result() {
    let fetcher = Rc::new(StaticFetcher {
        rows: orders(&["A", "B", "C"]),
        requests: RefCell::new(Vec::new()),
    });
    let seen: Rc<RefCell<Vec<ListView<Order>>>> = Rc::default();
    let sink = seen.clone();
    let session = ListSession::new(&ORDERS, fetcher, &config())
        .with_observer(move |view| sink.borrow_mut().push(view.clone()));

    session.navigate(QueryState::new(10)).await;

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
    assert_eq!(seen[0].placeholder_rows(), 10);
    assert!(!seen[1].loading);
    assert_eq!(seen[1].total_items(), 3);
    assert_eq!(seen[1].total_pages(), 1);
}

#[tokio::test]
async fn test_custom_fields_reach_every_request() {
    let fetcher = Rc::new(StaticFetcher {
        rows: orders(&["A"]),
        requests: RefCell::new(Vec::new()),
    });
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config())
        .with_custom_fields(vec!["priority".to_string(), "giftWrap".to_string()]);

    session.navigate(QueryState::new(10)).await;
    session.refetch(None).await;

    let expected = Some(vec!["priority".to_string(), "giftWrap".to_string()]);
    let requests = fetcher.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].custom_fields, expected);
    assert_eq!(requests[1].custom_fields, expected);
}

#[tokio::test]
async fn test_requests_without_selector_have_no_custom_fields() {
    let fetcher = Rc::new(StaticFetcher {
        rows: orders(&["A"]),
        requests: RefCell::new(Vec::new()),
    });
    let session = ListSession::new(&ORDERS, fetcher.clone(), &config());

    session.navigate(QueryState::new(10)).await;

    assert_eq!(fetcher.requests.borrow()[0].custom_fields, None);
}
