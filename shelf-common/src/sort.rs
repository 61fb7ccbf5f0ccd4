//! Single-column sort and its three-state click cycle

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction, serialized as the admin API's `ASC` / `DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Value used in the `dir` URL parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(s.to_string()),
        }
    }
}

/// The one sorted column of a list view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    pub key: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Advance the sort cycle after a click on `clicked`.
///
/// unsorted -> ascending -> descending -> unsorted on the same column; a
/// click on a different column always starts over at ascending.
pub fn next_sort(current: Option<&Sort>, clicked: &str) -> Option<Sort> {
    match current {
        Some(sort) if sort.key == clicked => match sort.direction {
            SortDirection::Ascending => Some(Sort::descending(clicked)),
            SortDirection::Descending => None,
        },
        _ => Some(Sort::ascending(clicked)),
    }
}
