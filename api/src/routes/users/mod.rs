//! Principal route handlers
//!
//! - Self-registration (public)
//! - Role predicates for the caller's own identity
//! - Administration: list, delete, verify and set role (admin only)

pub mod admin;
pub mod register;
pub mod roles;

pub use admin::{delete_user, list_users, set_role, verify_user};
pub use register::register;
pub use roles::{is_admin, is_buyer, is_seller};
