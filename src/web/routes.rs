// src/web/routes.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::web::handlers::{auth_handlers, order_handlers, product_handlers};

async fn healthcheck_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok", "timestamp": Utc::now() }))
}

/// Assembles the full route tree; called from `main.rs` when building the
/// Actix `App`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/healthcheck", web::get().to(healthcheck_handler))
      .service(
        web::scope("/auth")
          .route("/register", web::post().to(auth_handlers::register_handler))
          .route("/login", web::post().to(auth_handlers::login_handler))
          .route("/me", web::get().to(auth_handlers::me_handler)),
      )
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler)),
      )
      .service(
        web::scope("/orders")
          .route("", web::get().to(order_handlers::list_orders_handler))
          .route("", web::post().to(order_handlers::create_order_handler))
          .route("/{id}", web::get().to(order_handlers::get_order_handler))
          .route("/{id}", web::put().to(order_handlers::update_order_handler))
          .route("/{id}", web::delete().to(order_handlers::delete_order_handler)),
      ),
  );
}
