use actix_web::HttpResponse;

/// Handler for GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<div>old Book Server Connected</div>")
}
