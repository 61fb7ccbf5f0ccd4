//! URL codec for [`QueryState`]
//!
//! Encoding omits defaults so shared URLs stay short. Decoding never fails:
//! anything malformed falls back to its default and is reported as a
//! [`CodecIssue`] for the caller to log.

use serde_json::{Map, Value};

use crate::catalog::EntityCatalog;
use crate::error::CodecIssue;
use crate::filter::{FilterExpression, FilterMap, LogicalOperator};
use crate::params::ListParams;
use crate::query_state::{Criteria, QueryState, DEFAULT_PAGE_SIZES};
use crate::sort::{Sort, SortDirection};

pub const PAGE: &str = "page";
pub const PER_PAGE: &str = "per";
pub const SORT: &str = "sort";
pub const DIRECTION: &str = "dir";
pub const FILTER: &str = "filter";
pub const OPERATOR: &str = "operator";
pub const SEARCH: &str = "q";

/// Keys owned by the codec; anything else in the URL is left alone
pub const RESERVED_KEYS: &[&str] = &[PAGE, PER_PAGE, SORT, DIRECTION, FILTER, OPERATOR, SEARCH];

/// What the decoder checks values against
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    /// Allowed page sizes; the first one is the default
    pub page_sizes: &'a [u32],
    pub catalog: &'a EntityCatalog,
}

impl<'a> DecodeContext<'a> {
    pub fn new(page_sizes: &'a [u32], catalog: &'a EntityCatalog) -> Self {
        Self {
            page_sizes,
            catalog,
        }
    }

    pub fn default_page_size(&self) -> u32 {
        self.page_sizes
            .first()
            .or_else(|| DEFAULT_PAGE_SIZES.first())
            .copied()
            .unwrap_or(10)
    }

    fn allows_page_size(&self, per_page: u32) -> bool {
        self.page_sizes.contains(&per_page)
    }
}

/// Result of decoding URL parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub state: QueryState,
    /// Values that were replaced by defaults
    pub issues: Vec<CodecIssue>,
}

pub fn encode(state: &QueryState) -> ListParams {
    let mut params = ListParams::new();
    if state.page != 1 {
        params.insert(PAGE, state.page.to_string());
    }
    params.insert(PER_PAGE, state.per_page.to_string());
    if let Some(sort) = &state.sort {
        params.insert(SORT, sort.key.clone());
        params.insert(DIRECTION, sort.direction.as_param());
    }
    match &state.criteria {
        Criteria::Basic { search: Some(text) } => params.insert(SEARCH, text.clone()),
        Criteria::Basic { search: None } => {}
        Criteria::Advanced { filter, operator } => {
            params.insert(OPERATOR, operator.as_param());
            if !filter.is_empty() {
                // BTreeMap of plain strings and scalars always serializes
                if let Ok(json) = serde_json::to_string(filter) {
                    params.insert(FILTER, json);
                }
            }
        }
    }
    params
}

pub fn decode(params: &ListParams, cx: &DecodeContext<'_>) -> Decoded {
    let mut issues = Vec::new();
    let page = decode_page(params, &mut issues);
    let per_page = decode_per_page(params, cx, &mut issues);
    let sort = decode_sort(params, cx.catalog, &mut issues);
    let criteria = decode_criteria(params, cx.catalog, &mut issues);
    Decoded {
        state: QueryState {
            page,
            per_page,
            sort,
            criteria,
        },
        issues,
    }
}

fn decode_page(params: &ListParams, issues: &mut Vec<CodecIssue>) -> u32 {
    let Some(raw) = params.get(PAGE) else {
        return 1;
    };
    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => {
            issues.push(CodecIssue::InvalidPage(raw.to_string()));
            1
        }
    }
}

fn decode_per_page(
    params: &ListParams,
    cx: &DecodeContext<'_>,
    issues: &mut Vec<CodecIssue>,
) -> u32 {
    let Some(raw) = params.get(PER_PAGE) else {
        return cx.default_page_size();
    };
    match raw.trim().parse::<u32>() {
        Ok(per_page) if cx.allows_page_size(per_page) => per_page,
        _ => {
            issues.push(CodecIssue::InvalidPageSize(raw.to_string()));
            cx.default_page_size()
        }
    }
}

fn decode_sort(
    params: &ListParams,
    catalog: &EntityCatalog,
    issues: &mut Vec<CodecIssue>,
) -> Option<Sort> {
    let key = params.get(SORT)?;
    if !catalog.is_sortable(key) {
        issues.push(CodecIssue::UnknownSortKey(key.to_string()));
        return None;
    }
    let direction = match params.get(DIRECTION) {
        None => SortDirection::Ascending,
        Some(raw) => match raw.parse::<SortDirection>() {
            Ok(direction) => direction,
            Err(raw) => {
                issues.push(CodecIssue::InvalidSortDirection(raw));
                return None;
            }
        },
    };
    Some(Sort {
        key: key.to_string(),
        direction,
    })
}

fn decode_criteria(
    params: &ListParams,
    catalog: &EntityCatalog,
    issues: &mut Vec<CodecIssue>,
) -> Criteria {
    let search = params
        .get(SEARCH)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let advanced = params.contains(FILTER) || params.contains(OPERATOR);

    if let Some(text) = search {
        if advanced {
            issues.push(CodecIssue::ConflictingCriteria);
        }
        return Criteria::Basic {
            search: Some(text.to_string()),
        };
    }
    if !advanced {
        return Criteria::Basic { search: None };
    }

    let operator = match params.get(OPERATOR) {
        None => catalog.default_operator,
        Some(raw) => raw.parse::<LogicalOperator>().unwrap_or_else(|raw| {
            issues.push(CodecIssue::InvalidOperator(raw));
            catalog.default_operator
        }),
    };
    let filter = params
        .get(FILTER)
        .map(|raw| decode_filter(raw, catalog, issues))
        .unwrap_or_default();
    Criteria::Advanced { filter, operator }
}

/// Decode the filter JSON entry by entry, so one bad entry does not take the
/// rest of the filter with it
fn decode_filter(raw: &str, catalog: &EntityCatalog, issues: &mut Vec<CodecIssue>) -> FilterMap {
    let entries: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            issues.push(CodecIssue::MalformedFilter(e.to_string()));
            return FilterMap::new();
        }
    };

    let mut filter = FilterMap::new();
    for (field, value) in entries {
        let expression = match serde_json::from_value::<FilterExpression>(value) {
            Ok(expression) => expression,
            Err(e) => {
                issues.push(CodecIssue::RejectedFilter {
                    field,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        match catalog.check(&field, &expression) {
            Ok(()) => {
                filter.insert(field, expression);
            }
            Err(e) => issues.push(e.into()),
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterField, OperatorKind, SearchField};
    use crate::filter::{self, Range, Scalar};

    static ORDERS: EntityCatalog = EntityCatalog {
        entity: "orders",
        label: "Orders",
        fields: &[
            FilterField::new("code", "Code", OperatorKind::Text),
            FilterField::new("customerLastName", "Customer", OperatorKind::Text),
            FilterField::new("transactionId", "Transaction", OperatorKind::Text),
            FilterField::new("id", "ID", OperatorKind::Id),
            FilterField::new("active", "Active", OperatorKind::Boolean),
            FilterField::new("totalWithTax", "Total", OperatorKind::Number),
        ],
        search: &[
            SearchField::contains("code"),
            SearchField::contains("customerLastName"),
            SearchField::contains("transactionId"),
            SearchField::equals("id"),
        ],
        sortable: &["code", "orderPlacedAt", "totalWithTax"],
        default_operator: LogicalOperator::Or,
    };

    fn cx() -> DecodeContext<'static> {
        DecodeContext::new(DEFAULT_PAGE_SIZES, &ORDERS)
    }

    fn decode_str(query: &str) -> Decoded {
        decode(&ListParams::from(query), &cx())
    }

    #[test]
    fn test_round_trip_reachable_states() {
        let base = QueryState::new(25);
        let states = vec![
            base.clone(),
            base.with_page(4),
            base.with_sort_click("code"),
            base.with_sort_click("code").with_sort_click("code"),
            base.with_search("smith"),
            base.with_search("ada lovelace").with_page(2),
            base.to_advanced(LogicalOperator::And),
            base.to_advanced(LogicalOperator::Or),
            base.with_filter_field(&ORDERS, "active", FilterExpression::BooleanEquals(true))
                .unwrap(),
            base.with_filter_field(
                &ORDERS,
                "totalWithTax",
                FilterExpression::Range(Range {
                    start: Scalar::Integer(100),
                    end: Scalar::Integer(500),
                }),
            )
            .unwrap()
            .with_filter_field(&ORDERS, "code", FilterExpression::Contains("X&Y".into()))
            .unwrap()
            .with_operator(LogicalOperator::And)
            .with_sort_click("totalWithTax")
            .with_page(3),
        ];
        for state in states {
            // through the query string, as the router would
            let query = encode(&state).to_query_string();
            let decoded = decode_str(&query);
            assert_eq!(decoded.state, state, "{query}");
            assert!(decoded.issues.is_empty(), "{query}: {:?}", decoded.issues);
        }
    }

    #[test]
    fn test_defaults_are_omitted() {
        let params = encode(&QueryState::new(10));
        assert_eq!(params.get(PAGE), None);
        assert_eq!(params.get(PER_PAGE), Some("10"));
        assert_eq!(params.get(SORT), None);
        assert_eq!(params.get(SEARCH), None);
        assert_eq!(params.get(FILTER), None);
        assert_eq!(params.get(OPERATOR), None);
    }

    #[test]
    fn test_orders_search_expands_and_clears() {
        let state = QueryState::new(10).with_search("smith");
        let (filter, operator) = state.effective_filter(&ORDERS);
        assert_eq!(operator, LogicalOperator::Or);
        assert_eq!(filter.len(), 4);
        assert_eq!(filter["code"], FilterExpression::Contains("smith".into()));
        assert_eq!(filter["customerLastName"], FilterExpression::Contains("smith".into()));
        assert_eq!(filter["transactionId"], FilterExpression::Contains("smith".into()));
        assert_eq!(filter["id"], FilterExpression::Equals(Scalar::text("smith")));
        assert_eq!(encode(&state).get(SEARCH), Some("smith"));

        let cleared = encode(&state.with_search(""));
        assert_eq!(cleared.get(SEARCH), None);
        assert_eq!(cleared.get(FILTER), None);
    }

    #[test]
    fn test_chip_lifecycle_drops_filter_key() {
        let with_chip = QueryState::new(10)
            .with_filter_field(&ORDERS, "active", FilterExpression::BooleanEquals(true))
            .unwrap();
        assert_eq!(
            encode(&with_chip).get(FILTER),
            Some(r#"{"active":{"eq":true}}"#)
        );

        let removed = with_chip.without_filter_field("active");
        assert_eq!(removed.filter(), Some(&FilterMap::new()));
        let params = encode(&removed);
        assert_eq!(params.get(FILTER), None);
        // still advanced, so a reload keeps the chip bar open
        assert_eq!(params.get(OPERATOR), Some("or"));
    }

    #[test]
    fn test_first_allowed_page_size_is_accepted() {
        let decoded = decode_str("per=10");
        assert_eq!(decoded.state.per_page, 10);
        assert!(decoded.issues.is_empty());
    }

    #[test]
    fn test_malformed_scalars_fall_back() {
        let decoded = decode_str("page=abc&per=7&sort=code&dir=sideways");
        assert_eq!(decoded.state.page, 1);
        assert_eq!(decoded.state.per_page, 10);
        assert_eq!(decoded.state.sort, None);
        assert_eq!(
            decoded.issues,
            vec![
                CodecIssue::InvalidPage("abc".into()),
                CodecIssue::InvalidPageSize("7".into()),
                CodecIssue::InvalidSortDirection("sideways".into()),
            ]
        );

        assert_eq!(decode_str("page=0").state.page, 1);
        assert_eq!(decode_str("page=-3").state.page, 1);
    }

    #[test]
    fn test_sort_decoding() {
        assert_eq!(
            decode_str("sort=code").state.sort,
            Some(Sort::ascending("code"))
        );
        assert_eq!(
            decode_str("sort=totalWithTax&dir=DESC").state.sort,
            Some(Sort::descending("totalWithTax"))
        );
        let decoded = decode_str("sort=password&dir=asc");
        assert_eq!(decoded.state.sort, None);
        assert_eq!(
            decoded.issues,
            vec![CodecIssue::UnknownSortKey("password".into())]
        );
    }

    #[test]
    fn test_malformed_filter_json_is_empty() {
        let decoded = decode_str("filter=%7Bnot%20json");
        assert_eq!(decoded.state.filter(), Some(&FilterMap::new()));
        assert_eq!(decoded.state.operator(), Some(LogicalOperator::Or));
        assert!(matches!(
            decoded.issues.as_slice(),
            [CodecIssue::MalformedFilter(_)]
        ));
    }

    #[test]
    fn test_bad_filter_entries_are_dropped_individually() {
        let mut params = ListParams::new();
        params.insert(
            FILTER,
            r#"{"code":{"contains":"A1"},"active":{"contains":"yes"},"secret":{"eq":1},"id":{"like":"x"}}"#,
        );
        params.insert(OPERATOR, "AND");
        let decoded = decode(&params, &cx());

        let expected = filter::set_field(
            &FilterMap::new(),
            "code",
            FilterExpression::Contains("A1".into()),
        );
        assert_eq!(decoded.state.filter(), Some(&expected));
        assert_eq!(decoded.state.operator(), Some(LogicalOperator::And));
        let mut rejected: Vec<&str> = decoded
            .issues
            .iter()
            .filter_map(|issue| match issue {
                CodecIssue::RejectedFilter { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        rejected.sort();
        assert_eq!(rejected, vec!["active", "id", "secret"]);
    }

    #[test]
    fn test_empty_operands_are_rejected() {
        let mut params = ListParams::new();
        params.insert(
            FILTER,
            r#"{"id":{"in":[]},"code":{"contains":""},"transactionId":{"contains":"T9"}}"#,
        );
        params.insert(OPERATOR, "and");
        let decoded = decode(&params, &cx());

        let expected = filter::set_field(
            &FilterMap::new(),
            "transactionId",
            FilterExpression::Contains("T9".into()),
        );
        assert_eq!(decoded.state.filter(), Some(&expected));
        let mut rejected: Vec<&str> = decoded
            .issues
            .iter()
            .filter_map(|issue| match issue {
                CodecIssue::RejectedFilter { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        rejected.sort();
        assert_eq!(rejected, vec!["code", "id"]);
    }

    #[test]
    fn test_search_wins_over_filter() {
        let decoded = decode_str("q=smith&operator=and");
        assert_eq!(decoded.state.search(), Some("smith"));
        assert!(!decoded.state.is_advanced());
        assert_eq!(decoded.issues, vec![CodecIssue::ConflictingCriteria]);
    }

    #[test]
    fn test_invalid_operator_uses_catalog_default() {
        let decoded = decode_str("operator=xor");
        assert_eq!(decoded.state.operator(), Some(LogicalOperator::Or));
        assert_eq!(
            decoded.issues,
            vec![CodecIssue::InvalidOperator("xor".into())]
        );
    }
}
