//! Fetch orchestration for one list view
//!
//! [`ListController`] is a synchronous state machine: transitions issue
//! [`FetchTicket`]s and results are applied with [`ListController::complete`].
//! [`ListSession`] pairs it with a [`ListFetcher`] and runs the tickets.

mod controller;
mod fetch;
mod session;
mod view;

pub use controller::{FetchTicket, ListController, Outcome};
pub use fetch::{ListFetcher, ListRequest, ListSnapshot};
pub use session::ListSession;
pub use view::{EmptyState, ListView};
