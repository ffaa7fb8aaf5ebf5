// src/services/order_service.rs

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::models::{Order, OrderInput, OrderStatus};
use crate::repositories::{OrderRepository, StorageError};

/// Owns the order total rule and orchestrates repository calls. The total is
/// recomputed on every create and update; a client-supplied total is never
/// trusted.
pub struct OrderService {
  repository: Arc<dyn OrderRepository>,
}

impl OrderService {
  pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
    Self { repository }
  }

  #[instrument(name = "order_service::get_all", skip(self))]
  pub async fn get_all_orders(&self) -> Result<Vec<Order>, StorageError> {
    self.repository.get_all().await
  }

  #[instrument(name = "order_service::get_by_id", skip(self))]
  pub async fn get_order_by_id(&self, id: &str) -> Result<Option<Order>, StorageError> {
    self.repository.get_by_id(id).await
  }

  #[instrument(name = "order_service::create", skip(self, input))]
  pub async fn create_order(&self, input: OrderInput) -> Result<Order, StorageError> {
    // The id stays empty; the repository assigns one.
    let order = build_order(None, input);
    self.repository.create(order).await
  }

  #[instrument(name = "order_service::update", skip(self, input))]
  pub async fn update_order(&self, id: &str, input: OrderInput) -> Result<Option<Order>, StorageError> {
    let order = build_order(Some(id.to_string()), input);
    self.repository.update(id, order).await
  }

  #[instrument(name = "order_service::delete", skip(self))]
  pub async fn delete_order(&self, id: &str) -> Result<(), StorageError> {
    self.repository.delete(id).await
  }
}

fn build_order(id: Option<String>, input: OrderInput) -> Order {
  let quantity = numeric_or_zero(input.quantity.as_ref());
  let price = numeric_or_zero(input.price.as_ref());
  let discount = numeric_or_zero(input.discount.as_ref());

  Order {
    id,
    product: input.product.unwrap_or_default(),
    description: input.description.unwrap_or_default(),
    quantity,
    price,
    discount,
    total: calculate_total(quantity, price, discount),
    status: status_or_pending(input.status),
  }
}

/// `max(0, quantity * price - discount)`.
fn calculate_total(quantity: f64, price: f64, discount: f64) -> f64 {
  let subtotal = quantity * price;
  let total = subtotal - discount;
  if total >= 0.0 {
    total
  } else {
    0.0
  }
}

/// Coerces a loose JSON value to a number. Numbers pass through, numeric
/// strings parse; anything else — including NaN and missing values — is 0.
/// Deliberate leniency, not a validation gate.
fn numeric_or_zero(value: Option<&Value>) -> f64 {
  let number = match value {
    Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
    Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
    _ => 0.0,
  };
  if number.is_nan() {
    0.0
  } else {
    number
  }
}

/// An absent or empty status means `PENDING`.
fn status_or_pending(status: Option<String>) -> OrderStatus {
  match status {
    Some(s) if !s.is_empty() => OrderStatus::from(s),
    _ => OrderStatus::Pending,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn numeric_or_zero_accepts_numbers_and_numeric_strings() {
    assert_eq!(numeric_or_zero(Some(&json!(42))), 42.0);
    assert_eq!(numeric_or_zero(Some(&json!(2.5))), 2.5);
    assert_eq!(numeric_or_zero(Some(&json!("19.99"))), 19.99);
    assert_eq!(numeric_or_zero(Some(&json!(" 7 "))), 7.0);
  }

  #[test]
  fn numeric_or_zero_treats_everything_else_as_zero() {
    assert_eq!(numeric_or_zero(None), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!("abc"))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!(""))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!("NaN"))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!(null))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!(true))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!([1, 2]))), 0.0);
    assert_eq!(numeric_or_zero(Some(&json!({"n": 1}))), 0.0);
  }

  #[test]
  fn total_floors_at_zero_when_discount_exceeds_subtotal() {
    assert_eq!(calculate_total(1.0, 10.0, 50.0), 0.0);
    assert_eq!(calculate_total(2.0, 5000.0, 300.0), 9700.0);
    assert_eq!(calculate_total(0.0, 0.0, 0.0), 0.0);
  }

  #[test]
  fn status_defaults_to_pending_when_absent_or_empty() {
    assert_eq!(status_or_pending(None), OrderStatus::Pending);
    assert_eq!(status_or_pending(Some(String::new())), OrderStatus::Pending);
    assert_eq!(status_or_pending(Some("PAID".to_string())), OrderStatus::Paid);
    assert_eq!(
      status_or_pending(Some("SHIPPED".to_string())),
      OrderStatus::Other("SHIPPED".to_string())
    );
  }
}
