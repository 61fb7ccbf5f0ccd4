//! List view building blocks
//!
//! Pure view components take plain props and callbacks; [`ListPanel`]
//! assembles them around a [`crate::hooks::ListHandle`].

mod column_menu;
mod empty_state;
mod filter_chips;
mod filter_menu;
mod pager;
mod panel;
mod search_box;
mod sort_header;
mod table;

pub use column_menu::ColumnMenu;
pub use empty_state::ListEmptyState;
pub use filter_chips::FilterChips;
pub use filter_menu::{build_expression, FilterDraft, FilterMenu};
pub use pager::Pager;
pub use panel::ListPanel;
pub use search_box::SearchBox;
pub use sort_header::SortHeader;
pub use table::{CellFn, Column, ListTable};
