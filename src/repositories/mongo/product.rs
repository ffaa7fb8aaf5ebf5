// src/repositories/mongo/product.rs

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::Product;
use crate::repositories::{ProductRepository, StorageError};

const COLLECTION: &str = "products";

#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  id: Option<ObjectId>,
  name: String,
  description: String,
  price: f64,
  stock: i64,
  category: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  image_url: Option<String>,
}

impl ProductDocument {
  fn from_entity(product: &Product) -> Self {
    Self {
      id: None,
      name: product.name.clone(),
      description: product.description.clone(),
      price: product.price,
      stock: product.stock,
      category: product.category.clone(),
      image_url: product.image_url.clone(),
    }
  }

  fn into_entity(self) -> Product {
    Product {
      id: self.id.map(|oid| oid.to_hex()),
      name: self.name,
      description: self.description,
      price: self.price,
      stock: self.stock,
      category: self.category,
      image_url: self.image_url,
    }
  }
}

pub struct ProductMongoRepository {
  collection: Collection<ProductDocument>,
}

impl ProductMongoRepository {
  pub fn new(database: &Database) -> Self {
    Self {
      collection: database.collection::<ProductDocument>(COLLECTION),
    }
  }
}

#[async_trait]
impl ProductRepository for ProductMongoRepository {
  #[instrument(name = "repo::products::get_all", skip(self))]
  async fn get_all(&self) -> Result<Vec<Product>, StorageError> {
    let cursor = self.collection.find(doc! {}).await?;
    let documents: Vec<ProductDocument> = cursor.try_collect().await?;
    Ok(documents.into_iter().map(ProductDocument::into_entity).collect())
  }

  #[instrument(name = "repo::products::create", skip(self, product))]
  async fn create(&self, product: Product) -> Result<Product, StorageError> {
    let document = ProductDocument::from_entity(&product);
    let result = self.collection.insert_one(&document).await?;
    let assigned = result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| StorageError::Corrupt(format!("non-ObjectId inserted id: {}", result.inserted_id)))?;

    Ok(Product {
      id: Some(assigned.to_hex()),
      ..product
    })
  }
}
