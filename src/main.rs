// src/main.rs

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use orders_api::config::AppConfig;
use orders_api::repositories::mongo::{OrderMongoRepository, ProductMongoRepository, UserMongoRepository};
use orders_api::services::{OrderService, ProductService};
use orders_api::state::AppState;
use orders_api::{db, web as app_web};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  tracing::info!("Starting orders API server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let database = match db::connect(&app_config).await {
    Ok(database) => {
      tracing::info!(database = %app_config.mongodb_database, "Connected to MongoDB.");
      database
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to MongoDB.");
      panic!("Database connection error: {}", e);
    }
  };

  // Manual dependency injection: repository -> service -> state.
  let order_repository = Arc::new(OrderMongoRepository::new(&database));
  let product_repository = Arc::new(ProductMongoRepository::new(&database));
  let user_repository = Arc::new(UserMongoRepository::new(&database));

  let app_state = AppState {
    orders: Arc::new(OrderService::new(order_repository)),
    products: Arc::new(ProductService::new(product_repository)),
    users: user_repository,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Binding server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(app_web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
