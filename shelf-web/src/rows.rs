//! Row types of the list views, as returned by the Admin API

use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub code: String,
    pub state: String,
    /// Minor units of `currency_code`
    pub total_with_tax: i64,
    pub currency_code: String,
    pub order_placed_at: Option<String>,
    pub customer: Option<CustomerRef>,
}

impl OrderRow {
    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .map(|c| format!("{} {}", c.first_name, c.last_name))
            .unwrap_or_default()
    }

    pub fn total(&self) -> String {
        format_money(self.total_with_tax, &self.currency_code)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub enabled: bool,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub is_private: bool,
    pub position: i64,
}

/// Amount in minor units as `"12.50 USD"`
pub fn format_money(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", minor / 100, minor % 100)
}

/// RFC 3339 timestamp as `"2024-03-01 14:05"`; unparseable input is shown as is
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
