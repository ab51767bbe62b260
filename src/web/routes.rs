// src/web/routes.rs

use actix_web::http::StatusCode;
use actix_web::web;

use crate::web::handlers::product_handlers;
use crate::web::responses::pretty_json;

// Liveness probe; deliberately does not touch the store.
async fn health_check_handler() -> actix_web::HttpResponse {
  pretty_json(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and the tests) to configure services
// for the Actix App. `/products/search/{keyword}` is registered ahead of
// `/products/{product_id}` so the literal segment wins.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/search/{keyword}", web::get().to(product_handlers::search_products_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
        .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler))
        .route("/{product_id}/restore", web::patch().to(product_handlers::restore_product_handler)),
    );
}
