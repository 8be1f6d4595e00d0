//! Catalog route handlers: categories, products and orders

pub mod categories;
pub mod orders;
pub mod products;

pub use categories::list_categories;
pub use orders::{add_order, orders_by_owner};
pub use products::{add_product, delete_product, products_by_category, products_by_owner};
