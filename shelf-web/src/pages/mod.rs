mod collections;
mod customers;
mod layout;
mod orders;
mod products;

pub use collections::Collections;
pub use customers::Customers;
pub use layout::AppLayout;
pub use orders::Orders;
pub use products::Products;
