// tests/product_service_tests.rs
mod common;

use common::*;

use orders_api::models::ProductInput;

fn laptop() -> ProductInput {
  ProductInput {
    name: "Laptop Gamer".to_string(),
    description: "16GB RAM, 512GB SSD".to_string(),
    price: 4999.99,
    stock: 10,
    category: "electronics".to_string(),
    image_url: None,
  }
}

#[tokio::test]
async fn create_assigns_an_id_and_keeps_the_fields() {
  setup_tracing();
  let service = product_service();

  let product = service.create_product(laptop()).await.unwrap();

  assert!(product.id.is_some());
  assert_eq!(product.name, "Laptop Gamer");
  assert_eq!(product.stock, 10);
}

#[tokio::test]
async fn list_returns_created_products() {
  setup_tracing();
  let service = product_service();

  assert!(service.get_all_products().await.unwrap().is_empty());

  let created = service.create_product(laptop()).await.unwrap();
  let listed = service.get_all_products().await.unwrap();

  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0], created);
}
