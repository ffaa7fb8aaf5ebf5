// src/models/user.rs

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
  pub id: Option<String>,
  pub name: String,
  pub email: String,
  #[serde(skip_serializing)] // Never send the password hash to a client
  pub password_hash: String,
  pub roles: Vec<String>,
  pub created_at: i64, // unix seconds
}
