// src/services/product_service.rs

use std::sync::Arc;

use tracing::instrument;

use crate::models::{Product, ProductInput};
use crate::repositories::{ProductRepository, StorageError};

/// Thin pass-through over the product repository; products carry no
/// business rule.
pub struct ProductService {
  repository: Arc<dyn ProductRepository>,
}

impl ProductService {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }

  #[instrument(name = "product_service::get_all", skip(self))]
  pub async fn get_all_products(&self) -> Result<Vec<Product>, StorageError> {
    self.repository.get_all().await
  }

  #[instrument(name = "product_service::create", skip(self, input))]
  pub async fn create_product(&self, input: ProductInput) -> Result<Product, StorageError> {
    let product = Product {
      id: None,
      name: input.name,
      description: input.description,
      price: input.price,
      stock: input.stock,
      category: input.category,
      image_url: input.image_url,
    };
    self.repository.create(product).await
  }
}
