// src/repositories/mod.rs

//! Persistence contracts and their backends.
//!
//! Repositories exclusively own the mapping between domain entities and
//! whatever shape the backend stores; services never see storage-native
//! identifiers or documents. Not-found is an explicit `Ok(None)`, never an
//! error. Each operation is a single storage call with no partial side
//! effects; concurrency control is left to the backend (last write wins at
//! the document level).

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Order, Product, User};

/// Failures originating in the persistence backend. Propagated unchanged
/// through the service layer; the HTTP layer maps them to 5xx.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("malformed identifier '{0}' for this backend")]
  MalformedId(String),

  #[error("storage backend failure: {0}")]
  Backend(#[from] mongodb::error::Error),

  #[error("unexpected document shape: {0}")]
  Corrupt(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Every stored order; empty vec for an empty store. Ordering is whatever
  /// the backend yields.
  async fn get_all(&self) -> Result<Vec<Order>, StorageError>;

  /// `Ok(None)` when no order has this id. Errs only when the id cannot be
  /// an identifier for this backend at all.
  async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StorageError>;

  /// Persists a new record, ignoring any id on the input, and returns the
  /// entity with the backend-assigned id populated.
  async fn create(&self, order: Order) -> Result<Order, StorageError>;

  /// Replaces the stored record's mutable fields keyed by `id`. `Ok(None)`
  /// when the id does not exist; never creates a record.
  async fn update(&self, id: &str, order: Order) -> Result<Option<Order>, StorageError>;

  /// Removes the record if present. Deleting a missing id is not an error.
  async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn get_all(&self) -> Result<Vec<Product>, StorageError>;
  async fn create(&self, product: Product) -> Result<Product, StorageError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
  async fn create(&self, user: User) -> Result<User, StorageError>;
}
