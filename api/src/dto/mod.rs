//! Request and response bodies

pub mod catalog;
pub mod token;
pub mod user;

pub use catalog::{DeletedResponse, OwnerQuery};
pub use token::{TokenQuery, TokenResponse};
pub use user::{
    IsAdminResponse, IsBuyerResponse, IsSellerResponse, ListUsersQuery, RegisterRequest,
    SetRoleRequest,
};
