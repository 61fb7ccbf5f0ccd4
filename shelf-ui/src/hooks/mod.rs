mod columns;
mod list;

pub use columns::use_column_visibility;
pub use list::{use_list, ListHandle};
