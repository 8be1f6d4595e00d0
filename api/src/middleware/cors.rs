//! CORS configuration for the storefront clients.
//!
//! The browser storefront is served from a different origin than the API, so
//! every environment answers cross-origin requests. Development also accepts
//! credentialed requests from any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use obc_shared::Environment;

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for `environment`
pub fn create_cors(environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors()
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::permissive().max_age(MAX_AGE)
}

fn create_production_cors() -> Cors {
    log::info!("Configuring CORS for production environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(MAX_AGE)
}
