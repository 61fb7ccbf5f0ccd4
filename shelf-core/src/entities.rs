//! Filter-field catalogs of the console's list views

use shelf_common::{EntityCatalog, FilterField, LogicalOperator, OperatorKind, SearchField};

const ORDER_STATES: &[&str] = &[
    "AddingItems",
    "ArrangingPayment",
    "PaymentAuthorized",
    "PaymentSettled",
    "PartiallyShipped",
    "Shipped",
    "PartiallyDelivered",
    "Delivered",
    "Modifying",
    "ArrangingAdditionalPayment",
    "Cancelled",
];

const ORDER_TYPES: &[&str] = &["Regular", "Seller", "Aggregate"];

pub static ORDERS: EntityCatalog = EntityCatalog {
    entity: "orders",
    label: "Orders",
    fields: &[
        FilterField::new("code", "Code", OperatorKind::Text),
        FilterField::new("customerLastName", "Customer last name", OperatorKind::Text),
        FilterField::new("transactionId", "Transaction ID", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("state", "State", OperatorKind::Choice(ORDER_STATES)),
        FilterField::new("type", "Type", OperatorKind::Choice(ORDER_TYPES)),
        FilterField::new("active", "Active", OperatorKind::Boolean),
        FilterField::new("totalWithTax", "Total", OperatorKind::Number),
        FilterField::new("orderPlacedAt", "Placed at", OperatorKind::Date),
        FilterField::new("updatedAt", "Updated at", OperatorKind::Date),
    ],
    search: &[
        SearchField::contains("code"),
        SearchField::contains("customerLastName"),
        SearchField::contains("transactionId"),
        SearchField::equals("id"),
    ],
    sortable: &[
        "code",
        "state",
        "totalWithTax",
        "orderPlacedAt",
        "createdAt",
        "updatedAt",
    ],
    default_operator: LogicalOperator::Or,
};

pub static PRODUCTS: EntityCatalog = EntityCatalog {
    entity: "products",
    label: "Products",
    fields: &[
        FilterField::new("name", "Name", OperatorKind::Text),
        FilterField::new("slug", "Slug", OperatorKind::Text),
        FilterField::new("sku", "SKU", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("enabled", "Enabled", OperatorKind::Boolean),
        FilterField::new("createdAt", "Created at", OperatorKind::Date),
        FilterField::new("updatedAt", "Updated at", OperatorKind::Date),
    ],
    search: &[
        SearchField::contains("name"),
        SearchField::contains("sku"),
        SearchField::contains("slug"),
    ],
    sortable: &["name", "slug", "createdAt", "updatedAt"],
    default_operator: LogicalOperator::Or,
};

pub static CUSTOMERS: EntityCatalog = EntityCatalog {
    entity: "customers",
    label: "Customers",
    fields: &[
        FilterField::new("firstName", "First name", OperatorKind::Text),
        FilterField::new("lastName", "Last name", OperatorKind::Text),
        FilterField::new("emailAddress", "Email", OperatorKind::Text),
        FilterField::new("phoneNumber", "Phone", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("createdAt", "Created at", OperatorKind::Date),
    ],
    search: &[
        SearchField::contains("firstName"),
        SearchField::contains("lastName"),
        SearchField::contains("emailAddress"),
    ],
    sortable: &["lastName", "emailAddress", "createdAt", "updatedAt"],
    default_operator: LogicalOperator::Or,
};

pub static COLLECTIONS: EntityCatalog = EntityCatalog {
    entity: "collections",
    label: "Collections",
    fields: &[
        FilterField::new("name", "Name", OperatorKind::Text),
        FilterField::new("slug", "Slug", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("isPrivate", "Private", OperatorKind::Boolean),
        FilterField::new("position", "Position", OperatorKind::Number),
    ],
    search: &[SearchField::contains("name"), SearchField::contains("slug")],
    sortable: &["name", "slug", "position", "createdAt"],
    default_operator: LogicalOperator::And,
};

pub static FACETS: EntityCatalog = EntityCatalog {
    entity: "facets",
    label: "Facets",
    fields: &[
        FilterField::new("name", "Name", OperatorKind::Text),
        FilterField::new("code", "Code", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("isPrivate", "Private", OperatorKind::Boolean),
    ],
    search: &[SearchField::contains("name"), SearchField::contains("code")],
    sortable: &["name", "code", "createdAt"],
    default_operator: LogicalOperator::And,
};

pub static PROMOTIONS: EntityCatalog = EntityCatalog {
    entity: "promotions",
    label: "Promotions",
    fields: &[
        FilterField::new("name", "Name", OperatorKind::Text),
        FilterField::new("couponCode", "Coupon code", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
        FilterField::new("enabled", "Enabled", OperatorKind::Boolean),
        FilterField::new("startsAt", "Starts at", OperatorKind::Date),
        FilterField::new("endsAt", "Ends at", OperatorKind::Date),
        FilterField::new("perCustomerUsageLimit", "Per-customer limit", OperatorKind::Number),
    ],
    search: &[SearchField::contains("name"), SearchField::contains("couponCode")],
    sortable: &["name", "couponCode", "startsAt", "endsAt"],
    default_operator: LogicalOperator::And,
};

pub static ADMINISTRATORS: EntityCatalog = EntityCatalog {
    entity: "administrators",
    label: "Administrators",
    fields: &[
        FilterField::new("firstName", "First name", OperatorKind::Text),
        FilterField::new("lastName", "Last name", OperatorKind::Text),
        FilterField::new("emailAddress", "Email", OperatorKind::Text),
        FilterField::new("id", "ID", OperatorKind::Id),
    ],
    search: &[
        SearchField::contains("firstName"),
        SearchField::contains("lastName"),
        SearchField::contains("emailAddress"),
    ],
    sortable: &["lastName", "emailAddress", "createdAt"],
    default_operator: LogicalOperator::And,
};

pub static ALL: &[&EntityCatalog] = &[
    &ORDERS,
    &PRODUCTS,
    &CUSTOMERS,
    &COLLECTIONS,
    &FACETS,
    &PROMOTIONS,
    &ADMINISTRATORS,
];

/// Look up a catalog by its entity identifier
pub fn catalog(entity: &str) -> Option<&'static EntityCatalog> {
    ALL.iter().copied().find(|c| c.entity == entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_common::{FilterExpression, QueryState};

    #[test]
    fn test_catalogs_are_consistent() {
        for catalog in ALL {
            assert!(!catalog.search.is_empty(), "{}", catalog.entity);
            let mut names: Vec<&str> = catalog.fields.iter().map(|f| f.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), catalog.fields.len(), "{}", catalog.entity);
            assert_eq!(catalog.field_position(catalog.fields[0].name), Some(0));
        }
    }

    #[test]
    fn test_search_expands_to_valid_filters() {
        for catalog in ALL {
            for text in ["x", "ada lovelace"] {
                let (filter, _) = QueryState::new(10).with_search(text).effective_filter(catalog);
                assert_eq!(filter.len(), catalog.search.len(), "{}", catalog.entity);
                assert_eq!(catalog.validate(&filter), Ok(()), "{} {text:?}", catalog.entity);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(catalog("orders").map(|c| c.label), Some("Orders"));
        assert!(catalog("invoices").is_none());
    }

    #[test]
    fn test_customer_search_splits_names() {
        let (filter, _) = QueryState::new(10)
            .with_search("ada lovelace")
            .effective_filter(&CUSTOMERS);
        assert_eq!(filter["firstName"], FilterExpression::Contains("ada".into()));
        assert_eq!(filter["lastName"], FilterExpression::Contains("lovelace".into()));
        assert_eq!(
            filter["emailAddress"],
            FilterExpression::Contains("ada lovelace".into())
        );
    }
}
