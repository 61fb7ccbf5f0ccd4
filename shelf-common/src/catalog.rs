//! Entity filter-field catalogs
//!
//! Each entity declares, as static data, which fields can be filtered, which
//! operator each one accepts, which fields free-text search expands into and
//! which columns can be sorted. Filters are validated against the catalog
//! when a query state is built, never at render time.

use crate::error::FilterError;
use crate::filter::{FilterExpression, FilterMap, LogicalOperator, Scalar};

/// Operator family a filter field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Free text: contains, equals or in (text operands)
    Text,
    /// Identifier: equals or in
    Id,
    /// Boolean equals
    Boolean,
    /// Integer: equals or range
    Number,
    /// ISO-8601 date range
    Date,
    /// Closed set of values: equals or in, restricted to the options
    Choice(&'static [&'static str]),
}

impl OperatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::Text => "text",
            OperatorKind::Id => "id",
            OperatorKind::Boolean => "boolean",
            OperatorKind::Number => "number",
            OperatorKind::Date => "date",
            OperatorKind::Choice(_) => "choice",
        }
    }

    /// Whether an expression is valid for a field of this kind. Blank
    /// `contains` operands and empty `in` sets are never valid.
    pub fn accepts(&self, expression: &FilterExpression) -> bool {
        match (self, expression) {
            (_, FilterExpression::Contains(s)) if s.trim().is_empty() => false,
            (_, FilterExpression::In(values)) if values.is_empty() => false,
            (OperatorKind::Text, FilterExpression::Contains(_)) => true,
            (OperatorKind::Text | OperatorKind::Id, FilterExpression::Equals(v)) => v.is_text(),
            (OperatorKind::Text | OperatorKind::Id, FilterExpression::In(values)) => {
                values.iter().all(Scalar::is_text)
            }
            (OperatorKind::Boolean, FilterExpression::BooleanEquals(_)) => true,
            (OperatorKind::Number, FilterExpression::Equals(v)) => v.is_integer(),
            (OperatorKind::Number, FilterExpression::Range(r)) => {
                r.start.is_integer() && r.end.is_integer()
            }
            (OperatorKind::Date, FilterExpression::Range(r)) => {
                r.start.is_text() && r.end.is_text()
            }
            (OperatorKind::Choice(options), FilterExpression::Equals(v)) => {
                is_option(options, v)
            }
            (OperatorKind::Choice(options), FilterExpression::In(values)) => {
                values.iter().all(|v| is_option(options, v))
            }
            _ => false,
        }
    }
}

fn is_option(options: &[&str], value: &Scalar) -> bool {
    match value {
        Scalar::Text(s) => options.contains(&s.as_str()),
        Scalar::Integer(_) => false,
    }
}

/// A filterable attribute of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: OperatorKind,
}

impl FilterField {
    pub const fn new(name: &'static str, label: &'static str, kind: OperatorKind) -> Self {
        Self { name, label, kind }
    }
}

/// How free-text search matches a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Contains,
    Equals,
}

/// A field free-text search expands into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchField {
    pub name: &'static str,
    pub mode: SearchMode,
}

impl SearchField {
    pub const fn contains(name: &'static str) -> Self {
        Self {
            name,
            mode: SearchMode::Contains,
        }
    }

    pub const fn equals(name: &'static str) -> Self {
        Self {
            name,
            mode: SearchMode::Equals,
        }
    }
}

/// Static description of one entity's list view
#[derive(Debug, PartialEq, Eq)]
pub struct EntityCatalog {
    /// Identifier, also used for persisted per-entity settings
    pub entity: &'static str,
    pub label: &'static str,
    pub fields: &'static [FilterField],
    pub search: &'static [SearchField],
    pub sortable: &'static [&'static str],
    /// Operator used when the first filter chip is added
    pub default_operator: LogicalOperator,
}

impl EntityCatalog {
    pub fn field(&self, name: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field in the catalog. `Some(0)` is a valid hit.
    pub fn field_position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.sortable.contains(&key)
    }

    /// Label for a field, falling back to its name
    pub fn label_for<'a>(&self, name: &'a str) -> &'a str {
        self.field(name).map(|f| f.label).unwrap_or(name)
    }

    /// Check one filter entry against the catalog
    pub fn check(&self, name: &str, expression: &FilterExpression) -> Result<(), FilterError> {
        let field = self
            .field(name)
            .ok_or_else(|| FilterError::UnknownField(name.to_string()))?;
        if field.kind.accepts(expression) {
            Ok(())
        } else {
            Err(FilterError::OperatorMismatch {
                field: name.to_string(),
                kind: field.kind.name(),
                operator: expression.operator_name(),
            })
        }
    }

    /// Check every entry of a filter map
    pub fn validate(&self, filter: &FilterMap) -> Result<(), FilterError> {
        filter
            .iter()
            .try_for_each(|(name, expression)| self.check(name, expression))
    }

    /// Fields that can still be added given the active filter
    pub fn available_fields<'a>(
        &'a self,
        filter: &'a FilterMap,
    ) -> impl Iterator<Item = &'a FilterField> + 'a {
        self.fields
            .iter()
            .filter(move |f| !filter.contains_key(f.name))
    }

    /// Key under which column visibility is persisted
    pub fn visibility_key(&self) -> String {
        format!("{}-table-visibility", self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Range;

    const STATES: &[&str] = &["AddingItems", "PaymentSettled", "Shipped"];

    static CATALOG: EntityCatalog = EntityCatalog {
        entity: "orders",
        label: "Orders",
        fields: &[
            FilterField::new("code", "Code", OperatorKind::Text),
            FilterField::new("active", "Active", OperatorKind::Boolean),
            FilterField::new("totalWithTax", "Total", OperatorKind::Number),
            FilterField::new("orderPlacedAt", "Placed at", OperatorKind::Date),
            FilterField::new("state", "State", OperatorKind::Choice(STATES)),
            FilterField::new("id", "ID", OperatorKind::Id),
        ],
        search: &[SearchField::contains("code")],
        sortable: &["code", "orderPlacedAt"],
        default_operator: LogicalOperator::And,
    };

    #[test]
    fn test_first_field_is_found() {
        // index 0 must count as a hit, not as "missing"
        assert_eq!(CATALOG.field_position("code"), Some(0));
        assert!(CATALOG.field("code").is_some());
        assert!(CATALOG.is_sortable("code"));
        assert_eq!(CATALOG.field_position("nope"), None);
    }

    #[test]
    fn test_check_accepts_matching_kinds() {
        let ok = [
            ("code", FilterExpression::Contains("AB".into())),
            ("active", FilterExpression::BooleanEquals(false)),
            ("totalWithTax", FilterExpression::Equals(Scalar::Integer(10))),
            (
                "orderPlacedAt",
                FilterExpression::Range(Range {
                    start: Scalar::text("2024-01-01"),
                    end: Scalar::text("2024-02-01"),
                }),
            ),
            ("state", FilterExpression::Equals(Scalar::text("Shipped"))),
            ("id", FilterExpression::In(vec![Scalar::text("1"), Scalar::text("2")])),
        ];
        for (name, expression) in ok {
            assert_eq!(CATALOG.check(name, &expression), Ok(()), "{name}");
        }
    }

    #[test]
    fn test_check_rejects_mismatches() {
        assert_eq!(
            CATALOG.check("missing", &FilterExpression::Contains("x".into())),
            Err(FilterError::UnknownField("missing".into()))
        );
        assert!(CATALOG
            .check("active", &FilterExpression::Contains("x".into()))
            .is_err());
        assert!(CATALOG
            .check("totalWithTax", &FilterExpression::Equals(Scalar::text("10")))
            .is_err());
        assert!(CATALOG
            .check("state", &FilterExpression::Equals(Scalar::text("Lost")))
            .is_err());
        assert!(CATALOG
            .check("id", &FilterExpression::Contains("1".into()))
            .is_err());
    }

    #[test]
    fn test_check_rejects_empty_operands() {
        assert!(CATALOG
            .check("code", &FilterExpression::Contains(String::new()))
            .is_err());
        assert!(CATALOG
            .check("code", &FilterExpression::Contains("  ".into()))
            .is_err());
        assert!(CATALOG.check("id", &FilterExpression::In(vec![])).is_err());
        assert!(CATALOG.check("state", &FilterExpression::In(vec![])).is_err());
    }

    #[test]
    fn test_available_fields_excludes_active() {
        let mut filter = FilterMap::new();
        filter.insert("code".into(), FilterExpression::Contains("A".into()));
        let names: Vec<&str> = CATALOG.available_fields(&filter).map(|f| f.name).collect();
        assert!(!names.contains(&"code"));
        assert_eq!(names.len(), CATALOG.fields.len() - 1);
    }

    #[test]
    fn test_visibility_key() {
        assert_eq!(CATALOG.visibility_key(), "orders-table-visibility");
        assert_eq!(CATALOG.label_for("totalWithTax"), "Total");
        assert_eq!(CATALOG.label_for("unknown"), "unknown");
    }
}
