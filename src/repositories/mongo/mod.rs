// src/repositories/mongo/mod.rs

//! MongoDB-backed repository variants. Document structs live here and never
//! escape; the rest of the application deals in entities with hex-string ids.

pub mod order;
pub mod product;
pub mod user;

pub use order::OrderMongoRepository;
pub use product::ProductMongoRepository;
pub use user::UserMongoRepository;

use mongodb::bson::oid::ObjectId;

use super::StorageError;

pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, StorageError> {
  ObjectId::parse_str(id).map_err(|_| StorageError::MalformedId(id.to_string()))
}
