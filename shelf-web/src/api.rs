//! Admin API list fetchers
//!
//! Each list view posts one GraphQL query with an `options` variable built
//! from the [`ListRequest`] and reads `{ items, totalItems }` back.

use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use shelf_core::{FetchError, ListFetcher, ListRequest, ListSnapshot};
use tracing::debug;

use crate::rows::{CollectionRow, CustomerRow, OrderRow, ProductRow};

const ORDERS_QUERY: &str = "query Orders($options: OrderListOptions) { \
    orders(options: $options) { items { id code state totalWithTax currencyCode orderPlacedAt \
    customer { firstName lastName } } totalItems } }";

const PRODUCTS_QUERY: &str = "query Products($options: ProductListOptions) { \
    products(options: $options) { items { id name slug enabled updatedAt } totalItems } }";

const CUSTOMERS_QUERY: &str = "query Customers($options: CustomerListOptions) { \
    customers(options: $options) { items { id firstName lastName emailAddress createdAt } \
    totalItems } }";

const COLLECTIONS_QUERY: &str = "query Collections($options: CollectionListOptions) { \
    collections(options: $options) { items { id name slug isPrivate position } totalItems } }";

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// One paginated list query of the Admin API
pub struct GraphqlList<T> {
    endpoint: String,
    /// Field of `data` holding the list
    field: &'static str,
    query: &'static str,
    rows: PhantomData<T>,
}

impl<T> GraphqlList<T> {
    pub fn new(endpoint: impl Into<String>, field: &'static str, query: &'static str) -> Self {
        Self {
            endpoint: endpoint.into(),
            field,
            query,
            rows: PhantomData,
        }
    }

    /// Request body. A custom field selector travels as `customFields`.
    fn body(&self, request: &ListRequest) -> Value {
        let mut variables = Map::new();
        variables.insert("options".into(), request.options());
        if let Some(fields) = &request.custom_fields {
            variables.insert("customFields".into(), json!(fields));
        }
        json!({
            "query": self.query,
            "variables": variables,
        })
    }

    /// Pull `data.<field>` out of a response body
    fn extract(&self, response: GraphqlResponse) -> Result<ListSnapshot<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        if let Some(error) = response.errors.into_iter().next() {
            return Err(FetchError::Api(error.message));
        }
        let mut data = response
            .data
            .ok_or_else(|| FetchError::Decode("Response has no data".to_string()))?;
        let list = data
            .remove(self.field)
            .ok_or_else(|| FetchError::Decode(format!("Response has no '{}'", self.field)))?;
        serde_json::from_value(list).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> ListFetcher<T> for GraphqlList<T> {
    async fn fetch(&self, request: &ListRequest) -> Result<ListSnapshot<T>, FetchError> {
        debug!("Fetching {} skip={} take={}", self.field, request.skip, request.take);
        let resp = reqwest::Client::new()
            .post(&self.endpoint)
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response: GraphqlResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        self.extract(response)
    }
}

pub fn orders(endpoint: &str) -> Rc<dyn ListFetcher<OrderRow>> {
    Rc::new(GraphqlList::new(endpoint, "orders", ORDERS_QUERY))
}

pub fn products(endpoint: &str) -> Rc<dyn ListFetcher<ProductRow>> {
    Rc::new(GraphqlList::new(endpoint, "products", PRODUCTS_QUERY))
}

pub fn customers(endpoint: &str) -> Rc<dyn ListFetcher<CustomerRow>> {
    Rc::new(GraphqlList::new(endpoint, "customers", CUSTOMERS_QUERY))
}

pub fn collections(endpoint: &str) -> Rc<dyn ListFetcher<CollectionRow>> {
    Rc::new(GraphqlList::new(endpoint, "collections", COLLECTIONS_QUERY))
}
