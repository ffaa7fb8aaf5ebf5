// tests/order_service_tests.rs
mod common;

use common::*;
use serde_json::json;

use orders_api::models::{OrderInput, OrderStatus};

#[tokio::test]
async fn create_computes_total_from_quantity_price_and_discount() {
  setup_tracing();
  let service = order_service();

  let order = service.create_order(laptop_input()).await.unwrap();

  assert_eq!(order.total, 9700.0); // 2 * 5000 - 300
  assert_eq!(order.quantity, 2.0);
  assert_eq!(order.price, 5000.0);
  assert_eq!(order.discount, 300.0);
  assert_eq!(order.status, OrderStatus::Pending);
  assert_eq!(order.product, "Laptop");
}

#[tokio::test]
async fn create_floors_total_at_zero_when_discount_exceeds_subtotal() {
  setup_tracing();
  let service = order_service();

  let order = service.create_order(numeric_input(1, 10, 50)).await.unwrap();

  assert_eq!(order.total, 0.0);
  // The operands themselves are stored as supplied.
  assert_eq!(order.quantity, 1.0);
  assert_eq!(order.discount, 50.0);
}

#[tokio::test]
async fn create_coerces_non_numeric_fields_to_zero() {
  setup_tracing();
  let service = order_service();

  let input = OrderInput {
    quantity: Some(json!("abc")),
    price: Some(json!(100)),
    ..OrderInput::default()
  };
  let order = service.create_order(input).await.unwrap();

  assert_eq!(order.quantity, 0.0);
  assert_eq!(order.total, 0.0);
  assert_eq!(order.discount, 0.0); // missing field
}

#[tokio::test]
async fn create_accepts_numeric_strings() {
  setup_tracing();
  let service = order_service();

  let order = service.create_order(numeric_input("3", "19.99", "0")).await.unwrap();

  assert_eq!(order.quantity, 3.0);
  assert_eq!(order.total, 3.0 * 19.99);
}

#[tokio::test]
async fn create_ignores_a_client_supplied_total_and_id() {
  setup_tracing();
  let service = order_service();

  // `total` and `id` are not part of the input shape; a body carrying them
  // deserializes without either leaking through.
  let input: OrderInput =
    serde_json::from_str(r#"{"id": "chosen-by-client", "total": 999999, "quantity": 2, "price": 10}"#).unwrap();
  let order = service.create_order(input).await.unwrap();

  assert_eq!(order.total, 20.0);
  let id = order.id.expect("repository assigns an id");
  assert_ne!(id, "chosen-by-client");
}

#[tokio::test]
async fn create_keeps_a_supplied_status() {
  setup_tracing();
  let service = order_service();

  let input = OrderInput {
    status: Some("PAID".to_string()),
    ..laptop_input()
  };
  let order = service.create_order(input).await.unwrap();

  assert_eq!(order.status, OrderStatus::Paid);
}

#[tokio::test]
async fn create_carries_unknown_status_values_opaquely() {
  setup_tracing();
  let service = order_service();

  let input = OrderInput {
    status: Some("ON_HOLD".to_string()),
    ..laptop_input()
  };
  let order = service.create_order(input).await.unwrap();

  assert_eq!(order.status, OrderStatus::Other("ON_HOLD".to_string()));
}

#[tokio::test]
async fn create_then_get_round_trips_every_field() {
  setup_tracing();
  let service = order_service();

  let created = service.create_order(laptop_input()).await.unwrap();
  let fetched = service
    .get_order_by_id(created.id.as_deref().unwrap())
    .await
    .unwrap()
    .expect("created order must be retrievable");

  assert_eq!(created, fetched);
}

#[tokio::test]
async fn get_by_id_returns_none_for_a_missing_id() {
  setup_tracing();
  let service = order_service();

  let result = service.get_order_by_id("nonexistent-id").await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn get_all_returns_empty_for_an_empty_store() {
  setup_tracing();
  let service = order_service();

  assert!(service.get_all_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_all_returns_every_created_order() {
  setup_tracing();
  let service = order_service();

  service.create_order(laptop_input()).await.unwrap();
  service.create_order(numeric_input(1, 10, 0)).await.unwrap();

  assert_eq!(service.get_all_orders().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_recomputes_the_total_and_keeps_the_id() {
  setup_tracing();
  let service = order_service();

  let created = service.create_order(laptop_input()).await.unwrap();
  let id = created.id.clone().unwrap();

  let updated = service
    .update_order(&id, numeric_input(3, 100, 50))
    .await
    .unwrap()
    .expect("order exists");

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.total, 250.0); // 3 * 100 - 50
}

#[tokio::test]
async fn update_defaults_status_to_pending_when_absent() {
  setup_tracing();
  let service = order_service();

  let input = OrderInput {
    status: Some("PAID".to_string()),
    ..laptop_input()
  };
  let created = service.create_order(input).await.unwrap();
  let id = created.id.clone().unwrap();

  // An update without a status falls back to PENDING, it does not preserve
  // the stored one.
  let updated = service.update_order(&id, laptop_input()).await.unwrap().unwrap();
  assert_eq!(updated.status, OrderStatus::Pending);
}

#[tokio::test]
async fn update_of_a_missing_id_returns_none_and_creates_nothing() {
  setup_tracing();
  let service = order_service();

  let result = service.update_order("nonexistent-id", laptop_input()).await.unwrap();

  assert!(result.is_none());
  assert!(service.get_all_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_the_order() {
  setup_tracing();
  let service = order_service();

  let created = service.create_order(laptop_input()).await.unwrap();
  let id = created.id.unwrap();

  service.delete_order(&id).await.unwrap();

  assert!(service.get_order_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_a_missing_id_is_not_an_error() {
  setup_tracing();
  let service = order_service();

  service.delete_order("nonexistent-id").await.unwrap();
}
