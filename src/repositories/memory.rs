// src/repositories/memory.rs

//! In-memory repository variants. They honor the same contract semantics as
//! the MongoDB ones (ids assigned on create, no upsert on update, idempotent
//! delete) and back the test suite; any string is a well-formed id here.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{Order, Product, User};
use crate::repositories::{OrderRepository, ProductRepository, StorageError, UserRepository};

#[derive(Default)]
pub struct InMemoryOrderRepository {
  orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
  async fn get_all(&self) -> Result<Vec<Order>, StorageError> {
    Ok(self.orders.read().values().cloned().collect())
  }

  async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StorageError> {
    Ok(self.orders.read().get(id).cloned())
  }

  async fn create(&self, order: Order) -> Result<Order, StorageError> {
    let id = Uuid::new_v4().to_string();
    let stored = Order {
      id: Some(id.clone()),
      ..order
    };
    self.orders.write().insert(id, stored.clone());
    Ok(stored)
  }

  async fn update(&self, id: &str, order: Order) -> Result<Option<Order>, StorageError> {
    let mut orders = self.orders.write();
    match orders.get_mut(id) {
      Some(existing) => {
        // Mutable fields only; the stored id is preserved.
        existing.product = order.product;
        existing.description = order.description;
        existing.quantity = order.quantity;
        existing.price = order.price;
        existing.discount = order.discount;
        existing.total = order.total;
        existing.status = order.status;
        Ok(Some(existing.clone()))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: &str) -> Result<(), StorageError> {
    self.orders.write().remove(id);
    Ok(())
  }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
  products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn get_all(&self) -> Result<Vec<Product>, StorageError> {
    Ok(self.products.read().values().cloned().collect())
  }

  async fn create(&self, product: Product) -> Result<Product, StorageError> {
    let id = Uuid::new_v4().to_string();
    let stored = Product {
      id: Some(id.clone()),
      ..product
    };
    self.products.write().insert(id, stored.clone());
    Ok(stored)
  }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
    Ok(self.users.read().values().find(|u| u.email == email).cloned())
  }

  async fn create(&self, user: User) -> Result<User, StorageError> {
    let id = Uuid::new_v4().to_string();
    let stored = User {
      id: Some(id.clone()),
      ..user
    };
    self.users.write().insert(id, stored.clone());
    Ok(stored)
  }
}
