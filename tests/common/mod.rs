// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper.

use std::sync::Arc;

use serde_json::json;

use orders_api::models::OrderInput;
use orders_api::repositories::memory::{InMemoryOrderRepository, InMemoryProductRepository, InMemoryUserRepository};
use orders_api::services::{OrderService, ProductService};

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Order service over a fresh in-memory store.
pub fn order_service() -> OrderService {
  OrderService::new(Arc::new(InMemoryOrderRepository::new()))
}

pub fn product_service() -> ProductService {
  ProductService::new(Arc::new(InMemoryProductRepository::new()))
}

pub fn user_repository() -> Arc<InMemoryUserRepository> {
  Arc::new(InMemoryUserRepository::new())
}

/// Input with the three numeric fields set; everything else left absent.
pub fn numeric_input(quantity: impl Into<serde_json::Value>, price: impl Into<serde_json::Value>, discount: impl Into<serde_json::Value>) -> OrderInput {
  OrderInput {
    quantity: Some(quantity.into()),
    price: Some(price.into()),
    discount: Some(discount.into()),
    ..OrderInput::default()
  }
}

pub fn laptop_input() -> OrderInput {
  OrderInput {
    product: Some("Laptop".to_string()),
    description: Some("Gaming laptop".to_string()),
    quantity: Some(json!(2)),
    price: Some(json!(5000)),
    discount: Some(json!(300)),
    status: None,
  }
}
