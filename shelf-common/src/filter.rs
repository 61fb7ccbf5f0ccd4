//! Filter expressions and the pure filter-map composer
//!
//! The wire shape follows the admin API's operator vocabulary, which is also
//! what ends up (as JSON) in the `filter` URL parameter:
//!
//! ```text
//! {"code": {"contains": "x"}, "enabled": {"eq": true}, "total": {"between": {"start": 1, "end": 9}}}
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{SearchField, SearchMode};

/// Filter map keyed by field name. Absent fields are simply not present.
pub type FilterMap = BTreeMap<String, FilterExpression>;

/// Operand of an equality, membership or range test
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Text(String),
}

impl Scalar {
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Scalar::Text(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Scalar::Integer(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Inclusive range used for dates and numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Scalar,
    pub end: Scalar,
}

/// One operator applied to one filter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireExpression", into = "WireExpression")]
pub enum FilterExpression {
    Contains(String),
    Equals(Scalar),
    Range(Range),
    In(Vec<Scalar>),
    BooleanEquals(bool),
}

impl FilterExpression {
    /// Short operator name used in labels and error messages
    pub fn operator_name(&self) -> &'static str {
        match self {
            FilterExpression::Contains(_) => "contains",
            FilterExpression::Equals(_) => "equals",
            FilterExpression::Range(_) => "range",
            FilterExpression::In(_) => "in",
            FilterExpression::BooleanEquals(_) => "boolean equals",
        }
    }

    /// Human-readable operand, used for filter chips
    pub fn describe(&self) -> String {
        match self {
            FilterExpression::Contains(s) => format!("contains \"{s}\""),
            FilterExpression::Equals(v) => format!("is {v}"),
            FilterExpression::Range(r) => format!("between {} and {}", r.start, r.end),
            FilterExpression::In(values) => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                format!("in {}", joined.join(", "))
            }
            FilterExpression::BooleanEquals(b) => format!("is {}", if *b { "yes" } else { "no" }),
        }
    }
}

/// Serialized form. `eq` carries either a scalar or a boolean; a boolean
/// operand always reads back as `BooleanEquals`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum WireExpression {
    Contains(String),
    Eq(WireOperand),
    Between(Range),
    In(Vec<Scalar>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireOperand {
    Bool(bool),
    Scalar(Scalar),
}

impl From<WireExpression> for FilterExpression {
    fn from(wire: WireExpression) -> Self {
        match wire {
            WireExpression::Contains(s) => FilterExpression::Contains(s),
            WireExpression::Eq(WireOperand::Bool(b)) => FilterExpression::BooleanEquals(b),
            WireExpression::Eq(WireOperand::Scalar(v)) => FilterExpression::Equals(v),
            WireExpression::Between(r) => FilterExpression::Range(r),
            WireExpression::In(values) => FilterExpression::In(values),
        }
    }
}

impl From<FilterExpression> for WireExpression {
    fn from(expression: FilterExpression) -> Self {
        match expression {
            FilterExpression::Contains(s) => WireExpression::Contains(s),
            FilterExpression::Equals(v) => WireExpression::Eq(WireOperand::Scalar(v)),
            FilterExpression::Range(r) => WireExpression::Between(r),
            FilterExpression::In(values) => WireExpression::In(values),
            FilterExpression::BooleanEquals(b) => WireExpression::Eq(WireOperand::Bool(b)),
        }
    }
}

/// Combinator applied across all active filter fields of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    /// Value used in the `operator` URL parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            LogicalOperator::And => LogicalOperator::Or,
            LogicalOperator::Or => LogicalOperator::And,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => f.write_str("AND"),
            LogicalOperator::Or => f.write_str("OR"),
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(LogicalOperator::And),
            "or" => Ok(LogicalOperator::Or),
            _ => Err(s.to_string()),
        }
    }
}

/// Insert or replace the entry for `name`, leaving every other entry untouched.
pub fn set_field(filter: &FilterMap, name: &str, expression: FilterExpression) -> FilterMap {
    let mut next = filter.clone();
    next.insert(name.to_string(), expression);
    next
}

/// Remove the entry for `name`. An empty result means "no filter".
pub fn remove_field(filter: &FilterMap, name: &str) -> FilterMap {
    let mut next = filter.clone();
    next.remove(name);
    next
}

/// Expand free-text search into per-field expressions (combined with OR).
///
/// A single token is applied to every searchable field. With two or more
/// tokens the first goes to the first field and the second to the second
/// ("first last" name search), while the remaining fields get the full text.
pub fn merge_search(filter: &FilterMap, search_text: &str, fields: &[SearchField]) -> FilterMap {
    let tokens: Vec<&str> = search_text.split_whitespace().collect();
    if tokens.is_empty() {
        return filter.clone();
    }
    let full_text = tokens.join(" ");
    let split_names = tokens.len() > 1 && fields.len() > 1;

    let mut next = filter.clone();
    for (index, field) in fields.iter().enumerate() {
        let operand = if split_names && index < 2 {
            tokens[index].to_string()
        } else {
            full_text.clone()
        };
        let expression = match field.mode {
            SearchMode::Contains => FilterExpression::Contains(operand),
            SearchMode::Equals => FilterExpression::Equals(Scalar::Text(operand)),
        };
        next.insert(field.name.to_string(), expression);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON_SEARCH: &[SearchField] = &[
        SearchField::contains("firstName"),
        SearchField::contains("lastName"),
        SearchField::contains("emailAddress"),
    ];

    #[test]
    fn test_set_field_is_idempotent() {
        let base = FilterMap::new();
        let once = set_field(&base, "code", FilterExpression::Contains("x".into()));
        let twice = set_field(&once, "code", FilterExpression::Contains("x".into()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_field_preserves_other_entries() {
        let base = set_field(
            &FilterMap::new(),
            "enabled",
            FilterExpression::BooleanEquals(true),
        );
        let next = set_field(&base, "sku", FilterExpression::Contains("A-".into()));
        assert_eq!(next.len(), 2);
        assert_eq!(
            next.get("enabled"),
            Some(&FilterExpression::BooleanEquals(true))
        );
    }

    #[test]
    fn test_set_field_replaces_existing_entry() {
        let base = set_field(&FilterMap::new(), "sku", FilterExpression::Contains("A".into()));
        let next = set_field(&base, "sku", FilterExpression::Contains("B".into()));
        assert_eq!(next.len(), 1);
        assert_eq!(next["sku"], FilterExpression::Contains("B".into()));
    }

    #[test]
    fn test_remove_field_to_empty() {
        let base = set_field(
            &FilterMap::new(),
            "enabled",
            FilterExpression::BooleanEquals(true),
        );
        assert!(remove_field(&base, "enabled").is_empty());
        // removing an absent key is a no-op
        assert_eq!(remove_field(&base, "missing"), base);
    }

    #[test]
    fn test_merge_search_single_token_hits_every_field() {
        let merged = merge_search(&FilterMap::new(), "  smith ", PERSON_SEARCH);
        assert_eq!(merged.len(), 3);
        for field in PERSON_SEARCH {
            assert_eq!(
                merged[field.name],
                FilterExpression::Contains("smith".into())
            );
        }
    }

    #[test]
    fn test_merge_search_splits_first_and_last_name() {
        let merged = merge_search(&FilterMap::new(), "jane  doe", PERSON_SEARCH);
        assert_eq!(merged["firstName"], FilterExpression::Contains("jane".into()));
        assert_eq!(merged["lastName"], FilterExpression::Contains("doe".into()));
        assert_eq!(
            merged["emailAddress"],
            FilterExpression::Contains("jane doe".into())
        );
    }

    #[test]
    fn test_merge_search_single_field_keeps_full_text() {
        let fields = [SearchField::contains("name")];
        let merged = merge_search(&FilterMap::new(), "red shoes", &fields);
        assert_eq!(merged["name"], FilterExpression::Contains("red shoes".into()));
    }

    #[test]
    fn test_merge_search_blank_text_is_noop() {
        let base = set_field(&FilterMap::new(), "sku", FilterExpression::Contains("A".into()));
        assert_eq!(merge_search(&base, "   ", PERSON_SEARCH), base);
    }

    #[test]
    fn test_equals_search_mode() {
        let fields = [SearchField::contains("code"), SearchField::equals("id")];
        let merged = merge_search(&FilterMap::new(), "42", &fields);
        assert_eq!(merged["id"], FilterExpression::Equals(Scalar::text("42")));
    }

    #[test]
    fn test_wire_shape() {
        let mut filter = FilterMap::new();
        filter.insert("code".into(), FilterExpression::Contains("x".into()));
        filter.insert("enabled".into(), FilterExpression::BooleanEquals(true));
        filter.insert(
            "total".into(),
            FilterExpression::Range(Range {
                start: Scalar::Integer(100),
                end: Scalar::Integer(500),
            }),
        );
        filter.insert(
            "state".into(),
            FilterExpression::In(vec![Scalar::text("Shipped"), Scalar::text("Delivered")]),
        );
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": {"contains": "x"},
                "enabled": {"eq": true},
                "state": {"in": ["Shipped", "Delivered"]},
                "total": {"between": {"start": 100, "end": 500}},
            })
        );
    }

    #[test]
    fn test_eq_operand_kinds() {
        let boolean: FilterExpression = serde_json::from_str(r#"{"eq": false}"#).unwrap();
        assert_eq!(boolean, FilterExpression::BooleanEquals(false));
        let number: FilterExpression = serde_json::from_str(r#"{"eq": 7}"#).unwrap();
        assert_eq!(number, FilterExpression::Equals(Scalar::Integer(7)));
        let text: FilterExpression = serde_json::from_str(r#"{"eq": "7"}"#).unwrap();
        assert_eq!(text, FilterExpression::Equals(Scalar::text("7")));
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        assert!(serde_json::from_str::<FilterExpression>(r#"{"regex": ".*"}"#).is_err());
        assert!(serde_json::from_str::<FilterExpression>(r#""contains""#).is_err());
    }

    #[test]
    fn test_logical_operator_from_str() {
        assert_eq!("AND".parse::<LogicalOperator>(), Ok(LogicalOperator::And));
        assert_eq!("or".parse::<LogicalOperator>(), Ok(LogicalOperator::Or));
        assert!("xor".parse::<LogicalOperator>().is_err());
        assert_eq!(LogicalOperator::Or.toggled(), LogicalOperator::And);
    }
}
