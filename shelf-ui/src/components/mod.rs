pub mod button;
pub mod icons;
pub mod list;
pub mod popover;
pub mod toast;

pub use button::*;
pub use list::*;
pub use popover::*;
pub use toast::*;
