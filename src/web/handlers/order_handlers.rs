// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::OrderInput;
use crate::state::AppState;

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.orders.get_all_orders().await?;
  info!("Fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  match app_state.orders.get_order_by_id(&id).await? {
    Some(order) => Ok(HttpResponse::Ok().json(order)),
    None => {
      warn!("Order {} not found.", id);
      Err(AppError::NotFound(format!("Order with id {} not found.", id)))
    }
  }
}

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderInput>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.orders.create_order(payload.into_inner()).await?;
  info!(order_id = ?order.id, "Order created.");
  Ok(HttpResponse::Created().json(order))
}

#[instrument(name = "handler::update_order", skip(app_state, path, payload), fields(order_id = %path.as_ref()))]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<OrderInput>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  match app_state.orders.update_order(&id, payload.into_inner()).await? {
    Some(order) => Ok(HttpResponse::Ok().json(order)),
    None => {
      warn!("Order {} not found for update.", id);
      Err(AppError::NotFound(format!("Order with id {} not found.", id)))
    }
  }
}

#[instrument(name = "handler::delete_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  app_state.orders.delete_order(&id).await?;
  Ok(HttpResponse::NoContent().finish())
}
