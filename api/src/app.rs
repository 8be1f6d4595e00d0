//! Application factory
//!
//! Builds the actix-web `App` with its middleware stack and every route.
//! Protected routes are wrapped individually with the bearer-token gate.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse,
};
use obc_shared::{error_codes, ApiResponse, Environment};

use crate::middleware::cors::create_cors;
use crate::routes::{catalog, health::root, jwt::issue_token, users};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let gate = state.gate();

    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors(environment))
        // Public
        .route("/", web::get().to(root))
        .route("/jwt", web::get().to(issue_token))
        .route("/categories", web::get().to(catalog::list_categories))
        // Principals
        .service(
            web::resource("/users")
                .route(web::post().to(users::register))
                .route(web::get().to(users::list_users).wrap(gate.clone())),
        )
        .route("/users/admin/{email}", web::get().to(users::is_admin).wrap(gate.clone()))
        .route("/users/seller/{email}", web::get().to(users::is_seller).wrap(gate.clone()))
        .route("/users/buyer/{email}", web::get().to(users::is_buyer).wrap(gate.clone()))
        .route("/users/verify/{id}", web::patch().to(users::verify_user).wrap(gate.clone()))
        .route("/users/role/{id}", web::patch().to(users::set_role).wrap(gate.clone()))
        .route("/user/{id}", web::delete().to(users::delete_user).wrap(gate.clone()))
        // Catalog
        .service(
            web::resource("/product/{id}")
                .route(web::get().to(catalog::products_by_category).wrap(gate.clone()))
                .route(web::delete().to(catalog::delete_product).wrap(gate.clone())),
        )
        .service(
            web::resource("/products")
                .route(web::get().to(catalog::products_by_owner).wrap(gate.clone()))
                .route(web::post().to(catalog::add_product).wrap(gate.clone())),
        )
        .service(
            web::resource("/orders")
                .route(web::post().to(catalog::add_order))
                .route(web::get().to(catalog::orders_by_owner).wrap(gate)),
        )
        .default_service(web::route().to(not_found))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::failure(
        error_codes::VALIDATION_ERROR,
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::failure(
        error_codes::VALIDATION_ERROR,
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
