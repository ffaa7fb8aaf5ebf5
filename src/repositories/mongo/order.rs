// src/repositories/mongo/order.rs

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::parse_object_id;
use crate::models::{Order, OrderStatus};
use crate::repositories::{OrderRepository, StorageError};

const COLLECTION: &str = "orders";

/// Storage shape of an order. The `_id` stays inside this module.
#[derive(Debug, Serialize, Deserialize)]
struct OrderDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  id: Option<ObjectId>,
  product: String,
  description: String,
  quantity: f64,
  price: f64,
  discount: f64,
  total: f64,
  status: OrderStatus,
}

impl OrderDocument {
  fn from_entity(order: &Order) -> Self {
    Self {
      id: None, // ids are assigned by the backend, never taken from the entity
      product: order.product.clone(),
      description: order.description.clone(),
      quantity: order.quantity,
      price: order.price,
      discount: order.discount,
      total: order.total,
      status: order.status.clone(),
    }
  }

  fn into_entity(self) -> Order {
    Order {
      id: self.id.map(|oid| oid.to_hex()),
      product: self.product,
      description: self.description,
      quantity: self.quantity,
      price: self.price,
      discount: self.discount,
      total: self.total,
      status: self.status,
    }
  }
}

pub struct OrderMongoRepository {
  collection: Collection<OrderDocument>,
}

impl OrderMongoRepository {
  pub fn new(database: &Database) -> Self {
    Self {
      collection: database.collection::<OrderDocument>(COLLECTION),
    }
  }
}

#[async_trait]
impl OrderRepository for OrderMongoRepository {
  #[instrument(name = "repo::orders::get_all", skip(self))]
  async fn get_all(&self) -> Result<Vec<Order>, StorageError> {
    let cursor = self.collection.find(doc! {}).await?;
    let documents: Vec<OrderDocument> = cursor.try_collect().await?;
    Ok(documents.into_iter().map(OrderDocument::into_entity).collect())
  }

  #[instrument(name = "repo::orders::get_by_id", skip(self))]
  async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StorageError> {
    let oid = parse_object_id(id)?;
    let document = self.collection.find_one(doc! { "_id": oid }).await?;
    Ok(document.map(OrderDocument::into_entity))
  }

  #[instrument(name = "repo::orders::create", skip(self, order))]
  async fn create(&self, order: Order) -> Result<Order, StorageError> {
    let document = OrderDocument::from_entity(&order);
    let result = self.collection.insert_one(&document).await?;
    let assigned = result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| StorageError::Corrupt(format!("non-ObjectId inserted id: {}", result.inserted_id)))?;

    Ok(Order {
      id: Some(assigned.to_hex()),
      ..order
    })
  }

  #[instrument(name = "repo::orders::update", skip(self, order))]
  async fn update(&self, id: &str, order: Order) -> Result<Option<Order>, StorageError> {
    let oid = parse_object_id(id)?;
    let updated = self
      .collection
      .find_one_and_update(
        doc! { "_id": oid },
        doc! { "$set": {
          "product": order.product.clone(),
          "description": order.description.clone(),
          "quantity": order.quantity,
          "price": order.price,
          "discount": order.discount,
          "total": order.total,
          "status": String::from(order.status.clone()),
        }},
      )
      .return_document(ReturnDocument::After)
      .await?;

    Ok(updated.map(OrderDocument::into_entity))
  }

  #[instrument(name = "repo::orders::delete", skip(self))]
  async fn delete(&self, id: &str) -> Result<(), StorageError> {
    let oid = parse_object_id(id)?;
    // Idempotent: a zero delete count is fine.
    self.collection.delete_one(doc! { "_id": oid }).await?;
    Ok(())
  }
}
