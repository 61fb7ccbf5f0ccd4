use thiserror::Error;

/// A filter entry the entity catalog does not allow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter field '{0}'")]
    UnknownField(String),
    #[error("Filter field '{field}' ({kind}) does not accept a {operator} expression")]
    OperatorMismatch {
        field: String,
        kind: &'static str,
        operator: &'static str,
    },
}

/// A recoverable problem found while decoding URL parameters.
///
/// Decoding never fails; each issue records a value that was replaced by its
/// default so callers can log it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecIssue {
    #[error("Invalid page '{0}', using 1")]
    InvalidPage(String),
    #[error("Page size '{0}' is not allowed, using the default")]
    InvalidPageSize(String),
    #[error("Malformed filter JSON: {0}")]
    MalformedFilter(String),
    #[error("Dropped filter on '{field}': {reason}")]
    RejectedFilter { field: String, reason: String },
    #[error("Column '{0}' is not sortable")]
    UnknownSortKey(String),
    #[error("Invalid sort direction '{0}'")]
    InvalidSortDirection(String),
    #[error("Invalid filter operator '{0}'")]
    InvalidOperator(String),
    #[error("Search text and filter are both present, keeping the search")]
    ConflictingCriteria,
}

impl From<FilterError> for CodecIssue {
    fn from(err: FilterError) -> Self {
        let field = match &err {
            FilterError::UnknownField(field) => field.clone(),
            FilterError::OperatorMismatch { field, .. } => field.clone(),
        };
        CodecIssue::RejectedFilter {
            field,
            reason: err.to_string(),
        }
    }
}
