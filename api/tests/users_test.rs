//! Integration tests for registration, role predicates and principal
//! administration

mod common;

use actix_web::test;
use serde_json::{json, Value};

use obc_api::create_app;
use obc_core::domain::entities::principal::{Principal, Role};
use obc_core::repositories::PrincipalRepository;
use obc_shared::Environment;

use common::{bearer, failing_state, register, test_state};

#[actix_web::test]
async fn test_register_jwt_and_role_elevation_flow() {
    let (store, state) = test_state();
    register(&store, "admin@x.com", Some(Role::Admin)).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "u@x.com", "name": "Reader" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["status"], "unverified");
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    // Obtain a token
    let req = test::TestRequest::get().uri("/jwt?email=u@x.com").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let header = format!("Bearer {}", body["token"].as_str().unwrap());

    // Not a buyer yet
    let req = test::TestRequest::get()
        .uri("/users/buyer/u@x.com")
        .insert_header(("Authorization", header.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "isBuyer": false }));

    // An admin grants the role
    let req = test::TestRequest::patch()
        .uri(&format!("/users/role/{id}"))
        .insert_header(("Authorization", bearer(&state, "admin@x.com")))
        .set_json(json!({ "role": "Buyer" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The same token now answers true
    let req = test::TestRequest::get()
        .uri("/users/buyer/u@x.com")
        .insert_header(("Authorization", header))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "isBuyer": true }));
}

#[actix_web::test]
async fn test_registration_is_idempotent() {
    let (store, state) = test_state();
    let app = test::init_service(create_app(state, Environment::Development)).await;

    let first = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "u@x.com", "role": "seller" }))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), 201);

    let second = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "u@x.com", "role": "buyer" }))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["role"], "seller");
    assert_eq!(store.principals().count().await, 1);
}

#[actix_web::test]
async fn test_registration_rejects_admin_and_bad_input() {
    let (store, state) = test_state();
    let app = test::init_service(create_app(state, Environment::Development)).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "u@x.com", "role": "admin" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "email": "u@x.com", "role": "owner" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    assert_eq!(store.principals().count().await, 0);
}

#[actix_web::test]
async fn test_unregistered_identity_holds_no_role() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;
    let header = bearer(&state, "ghost@x.com");

    for (path, key) in [("admin", "isAdmin"), ("seller", "isSeller"), ("buyer", "isBuyer")] {
        let req = test::TestRequest::get()
            .uri(&format!("/users/{path}/ghost@x.com"))
            .insert_header(("Authorization", header.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[key], false);
    }
}

#[actix_web::test]
async fn test_role_predicate_denies_other_identity() {
    let (store, state) = test_state();
    register(&store, "admin@x.com", Some(Role::Admin)).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/users/admin/admin@x.com")
        .insert_header(("Authorization", bearer(&state, "b@x.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_legacy_role_casing_is_recognised() {
    let (store, state) = test_state();
    // Documents written by older revisions carry capitalised roles
    let legacy: Principal = serde_json::from_value(json!({
        "_id": uuid::Uuid::new_v4(),
        "email": "s@x.com",
        "role": "Seller",
        "created_at": "2023-04-01T10:00:00Z",
        "updated_at": "2023-04-01T10:00:00Z",
    }))
    .unwrap();
    store.principals().create(legacy).await.unwrap();
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/users/seller/s@x.com")
        .insert_header(("Authorization", bearer(&state, "s@x.com")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "isSeller": true }));
}

#[actix_web::test]
async fn test_non_admin_cannot_administer() {
    let (store, state) = test_state();
    let target = register(&store, "t@x.com", None).await;
    register(&store, "s@x.com", Some(Role::Seller)).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;
    let header = bearer(&state, "s@x.com");

    let requests = [
        test::TestRequest::patch()
            .uri(&format!("/users/role/{}", target.id))
            .set_json(json!({ "role": "admin" })),
        test::TestRequest::patch().uri(&format!("/users/verify/{}", target.id)),
        test::TestRequest::get().uri("/users"),
        test::TestRequest::delete().uri(&format!("/user/{}", target.id)),
    ];
    for req in requests {
        let req = req.insert_header(("Authorization", header.clone())).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    let unchanged = store.principals().find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(unchanged.role, None);
    assert!(!unchanged.is_verified());
}

#[actix_web::test]
async fn test_admin_verifies_twice_and_lists_by_role() {
    let (store, state) = test_state();
    register(&store, "admin@x.com", Some(Role::Admin)).await;
    let target = register(&store, "s@x.com", Some(Role::Seller)).await;
    register(&store, "b@x.com", Some(Role::Buyer)).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;
    let header = bearer(&state, "admin@x.com");

    for _ in 0..2 {
        let req = test::TestRequest::patch()
            .uri(&format!("/users/verify/{}", target.id))
            .insert_header(("Authorization", header.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "verified");
    }

    let req = test::TestRequest::get()
        .uri("/users?role=SELLER")
        .insert_header(("Authorization", header.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let sellers = body["data"].as_array().unwrap();
    assert_eq!(sellers.len(), 1);
    assert_eq!(sellers[0]["email"], "s@x.com");

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", header))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_admin_mutations_on_missing_principal_are_not_found() {
    let (store, state) = test_state();
    register(&store, "admin@x.com", Some(Role::Admin)).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;
    let header = bearer(&state, "admin@x.com");
    let missing = uuid::Uuid::new_v4();

    let requests = [
        test::TestRequest::patch()
            .uri(&format!("/users/role/{missing}"))
            .set_json(json!({ "role": "seller" })),
        test::TestRequest::patch().uri(&format!("/users/verify/{missing}")),
        test::TestRequest::delete().uri(&format!("/user/{missing}")),
    ];
    for req in requests {
        let req = req.insert_header(("Authorization", header.clone())).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
    assert_eq!(store.principals().count().await, 1);

    let req = test::TestRequest::patch()
        .uri("/users/verify/not-a-uuid")
        .insert_header(("Authorization", header))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_admin_deletes_principal() {
    let (store, state) = test_state();
    register(&store, "admin@x.com", Some(Role::Admin)).await;
    let target = register(&store, "t@x.com", None).await;
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/user/{}", target.id))
        .insert_header(("Authorization", bearer(&state, "admin@x.com")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "ok": true, "data": { "deleted": true } }));
    assert!(store.principals().find_by_id(target.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_role_predicate_store_failure() {
    let state = failing_state();
    let app = test::init_service(create_app(state.clone(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/users/admin/u@x.com")
        .insert_header(("Authorization", bearer(&state, "u@x.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["code"], "STORE_ERROR");
}
