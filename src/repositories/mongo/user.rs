// src/repositories/mongo/user.rs

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::User;
use crate::repositories::{StorageError, UserRepository};

const COLLECTION: &str = "users";

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  id: Option<ObjectId>,
  name: String,
  email: String,
  password_hash: String,
  roles: Vec<String>,
  created_at: i64,
}

impl UserDocument {
  fn from_entity(user: &User) -> Self {
    Self {
      id: None,
      name: user.name.clone(),
      email: user.email.clone(),
      password_hash: user.password_hash.clone(),
      roles: user.roles.clone(),
      created_at: user.created_at,
    }
  }

  fn into_entity(self) -> User {
    User {
      id: self.id.map(|oid| oid.to_hex()),
      name: self.name,
      email: self.email,
      password_hash: self.password_hash,
      roles: self.roles,
      created_at: self.created_at,
    }
  }
}

pub struct UserMongoRepository {
  collection: Collection<UserDocument>,
}

impl UserMongoRepository {
  pub fn new(database: &Database) -> Self {
    Self {
      collection: database.collection::<UserDocument>(COLLECTION),
    }
  }
}

#[async_trait]
impl UserRepository for UserMongoRepository {
  #[instrument(name = "repo::users::find_by_email", skip(self, email))]
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
    let document = self.collection.find_one(doc! { "email": email }).await?;
    Ok(document.map(UserDocument::into_entity))
  }

  #[instrument(name = "repo::users::create", skip(self, user))]
  async fn create(&self, user: User) -> Result<User, StorageError> {
    let document = UserDocument::from_entity(&user);
    let result = self.collection.insert_one(&document).await?;
    let assigned = result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| StorageError::Corrupt(format!("non-ObjectId inserted id: {}", result.inserted_id)))?;

    Ok(User {
      id: Some(assigned.to_hex()),
      ..user
    })
  }
}
