//! Addressable state of one list view
//!
//! A `QueryState` is never mutated in place: every interaction derives a new
//! value from the previous one, which is then encoded into the URL.

use crate::catalog::EntityCatalog;
use crate::error::FilterError;
use crate::filter::{self, FilterExpression, FilterMap, LogicalOperator};
use crate::sort::{self, Sort};

/// Page sizes offered when the configuration does not say otherwise
pub const DEFAULT_PAGE_SIZES: &[u32] = &[10, 25, 50, 100];

/// Free-text search and explicit filter chips are mutually exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criteria {
    /// Single search box; the token is expanded into a filter per request
    Basic { search: Option<String> },
    /// Explicit filter chips combined with `operator`
    Advanced {
        filter: FilterMap,
        operator: LogicalOperator,
    },
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria::Basic { search: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<Sort>,
    pub criteria: Criteria,
}

impl QueryState {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            sort: None,
            criteria: Criteria::default(),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn with_per_page(&self, per_page: u32) -> Self {
        Self {
            per_page,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: Option<Sort>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Apply a click on a column header
    pub fn with_sort_click(&self, key: &str) -> Self {
        self.with_sort(sort::next_sort(self.sort.as_ref(), key))
    }

    /// Replace the search text, switching to basic mode. Blank text clears it.
    pub fn with_search(&self, text: &str) -> Self {
        let trimmed = text.trim();
        let search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        Self {
            criteria: Criteria::Basic { search },
            ..self.clone()
        }
    }

    /// Switch to basic mode, discarding any filter chips
    pub fn to_basic(&self) -> Self {
        match self.criteria {
            Criteria::Basic { .. } => self.clone(),
            Criteria::Advanced { .. } => Self {
                criteria: Criteria::Basic { search: None },
                ..self.clone()
            },
        }
    }

    /// Switch to advanced mode, discarding any search text
    pub fn to_advanced(&self, operator: LogicalOperator) -> Self {
        match self.criteria {
            Criteria::Advanced { .. } => self.clone(),
            Criteria::Basic { .. } => Self {
                criteria: Criteria::Advanced {
                    filter: FilterMap::new(),
                    operator,
                },
                ..self.clone()
            },
        }
    }

    /// Add or replace one filter chip after checking it against the catalog
    pub fn with_filter_field(
        &self,
        catalog: &EntityCatalog,
        name: &str,
        expression: FilterExpression,
    ) -> Result<Self, FilterError> {
        catalog.check(name, &expression)?;
        let (filter, operator) = match &self.criteria {
            Criteria::Advanced { filter, operator } => (filter.clone(), *operator),
            Criteria::Basic { .. } => (FilterMap::new(), catalog.default_operator),
        };
        Ok(Self {
            criteria: Criteria::Advanced {
                filter: filter::set_field(&filter, name, expression),
                operator,
            },
            ..self.clone()
        })
    }

    /// Remove one filter chip. Stays in advanced mode with an empty filter.
    pub fn without_filter_field(&self, name: &str) -> Self {
        match &self.criteria {
            Criteria::Advanced { filter, operator } => Self {
                criteria: Criteria::Advanced {
                    filter: filter::remove_field(filter, name),
                    operator: *operator,
                },
                ..self.clone()
            },
            Criteria::Basic { .. } => self.clone(),
        }
    }

    /// Change the AND/OR combinator; only meaningful in advanced mode
    pub fn with_operator(&self, operator: LogicalOperator) -> Self {
        match &self.criteria {
            Criteria::Advanced { filter, .. } => Self {
                criteria: Criteria::Advanced {
                    filter: filter.clone(),
                    operator,
                },
                ..self.clone()
            },
            Criteria::Basic { .. } => self.clone(),
        }
    }

    pub fn search(&self) -> Option<&str> {
        match &self.criteria {
            Criteria::Basic { search } => search.as_deref(),
            Criteria::Advanced { .. } => None,
        }
    }

    /// Active filter chips, `None` in basic mode
    pub fn filter(&self) -> Option<&FilterMap> {
        match &self.criteria {
            Criteria::Advanced { filter, .. } => Some(filter),
            Criteria::Basic { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<LogicalOperator> {
        match &self.criteria {
            Criteria::Advanced { operator, .. } => Some(*operator),
            Criteria::Basic { .. } => None,
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self.criteria, Criteria::Advanced { .. })
    }

    /// Whether a search or at least one filter chip narrows the result
    pub fn is_filtered(&self) -> bool {
        match &self.criteria {
            Criteria::Basic { search } => search.is_some(),
            Criteria::Advanced { filter, .. } => !filter.is_empty(),
        }
    }

    /// Filter and operator to send with a request, search text expanded
    pub fn effective_filter(&self, catalog: &EntityCatalog) -> (FilterMap, LogicalOperator) {
        match &self.criteria {
            Criteria::Basic { search: Some(text) } => (
                filter::merge_search(&FilterMap::new(), text, catalog.search),
                LogicalOperator::Or,
            ),
            Criteria::Basic { search: None } => (FilterMap::new(), catalog.default_operator),
            Criteria::Advanced { filter, operator } => (filter.clone(), *operator),
        }
    }

    /// Number of items before the current page
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Whether the current page lies past the last page.
    ///
    /// The page is never clamped; callers decide whether to offer a way back.
    pub fn page_beyond(&self, total_pages: u32) -> bool {
        self.page > total_pages.max(1)
    }
}
