// src/models/order.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order lifecycle labels as they appear on the wire. Values outside the
/// known set are carried opaquely; nothing in the domain rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
  Pending,
  Paid,
  Cancelled,
  Other(String),
}

impl From<String> for OrderStatus {
  fn from(value: String) -> Self {
    match value.as_str() {
      "PENDING" => OrderStatus::Pending,
      "PAID" => OrderStatus::Paid,
      "CANCELLED" => OrderStatus::Cancelled,
      _ => OrderStatus::Other(value),
    }
  }
}

impl From<OrderStatus> for String {
  fn from(status: OrderStatus) -> Self {
    match status {
      OrderStatus::Pending => "PENDING".to_string(),
      OrderStatus::Paid => "PAID".to_string(),
      OrderStatus::Cancelled => "CANCELLED".to_string(),
      OrderStatus::Other(value) => value,
    }
  }
}

impl Default for OrderStatus {
  fn default() -> Self {
    OrderStatus::Pending
  }
}

/// One purchase order. `id` is `None` until the storage backend assigns one
/// and immutable afterwards. `total` is derived; whoever constructs an
/// `Order` is responsible for supplying a correct value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: Option<String>,
  pub product: String,
  pub description: String,
  pub quantity: f64,
  pub price: f64,
  pub discount: f64,
  pub total: f64,
  pub status: OrderStatus,
}

/// Loose inbound shape for create/update requests. Every field is optional;
/// the numeric fields accept any JSON value and are coerced by the service.
/// A client-supplied `id` (or any other unknown field) is dropped on
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderInput {
  pub product: Option<String>,
  pub description: Option<String>,
  pub quantity: Option<Value>,
  pub price: Option<Value>,
  pub discount: Option<Value>,
  pub status: Option<String>,
}
