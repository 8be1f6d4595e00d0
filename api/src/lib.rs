//! # Old Book Center API
//!
//! actix-web application for the second-hand bookstore: the bearer-token
//! gate, route handlers and the mapping of domain errors onto HTTP.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
