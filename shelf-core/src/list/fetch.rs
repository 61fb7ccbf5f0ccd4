use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use shelf_common::{EntityCatalog, FilterMap, LogicalOperator, QueryState, Sort};

use crate::error::FetchError;

/// Everything a backend needs to serve one page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub skip: u64,
    pub take: u32,
    pub sort: Option<Sort>,
    /// Effective filter, search text already expanded
    pub filter: FilterMap,
    pub operator: LogicalOperator,
    /// Extra custom fields the caller wants selected, if any
    pub custom_fields: Option<Vec<String>>,
}

impl ListRequest {
    pub fn from_state(state: &QueryState, catalog: &EntityCatalog) -> Self {
        let (filter, operator) = state.effective_filter(catalog);
        Self {
            skip: state.skip(),
            take: state.per_page,
            sort: state.sort.clone(),
            filter,
            operator,
            custom_fields: None,
        }
    }

    /// Admin API list options:
    /// `{ skip, take, sort: { key: "ASC" }, filter, filterOperator }`
    pub fn options(&self) -> Value {
        let mut options = Map::new();
        options.insert("skip".into(), json!(self.skip));
        options.insert("take".into(), json!(self.take));
        if let Some(sort) = &self.sort {
            let mut by = Map::new();
            by.insert(sort.key.clone(), json!(sort.direction));
            options.insert("sort".into(), Value::Object(by));
        }
        if !self.filter.is_empty() {
            options.insert("filter".into(), json!(self.filter));
            options.insert("filterOperator".into(), json!(self.operator));
        }
        Value::Object(options)
    }
}

/// One page of results. Replaced wholesale on every applied fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub total_items: u64,
}

impl<T> ListSnapshot<T> {
    pub fn new(items: Vec<T>, total_items: u64) -> Self {
        Self { items, total_items }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// Data source for a list view. Implementations must return an empty
/// snapshot, not an error, when nothing matches.
#[async_trait(?Send)]
pub trait ListFetcher<T> {
    async fn fetch(&self, request: &ListRequest) -> Result<ListSnapshot<T>, FetchError>;
}
