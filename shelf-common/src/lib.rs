//! shelf-common - list-state primitives shared by the console crates
//!
//! Pure data structures and transforms with no I/O: the addressable query
//! state of a list view, its URL codec, filter composition, sort cycling and
//! pagination windows. Everything here is synchronous and side-effect free.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod params;
pub mod query_state;
pub mod sort;

pub use catalog::{EntityCatalog, FilterField, OperatorKind, SearchField, SearchMode};
pub use codec::{decode, encode, DecodeContext, Decoded};
pub use error::{CodecIssue, FilterError};
pub use filter::{FilterExpression, FilterMap, LogicalOperator, Range, Scalar};
pub use pagination::{PageLink, Pager};
pub use params::ListParams;
pub use query_state::{Criteria, QueryState, DEFAULT_PAGE_SIZES};
pub use sort::{Sort, SortDirection};
