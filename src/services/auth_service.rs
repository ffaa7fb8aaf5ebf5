// src/services/auth_service.rs

//! Password hashing and token issuance for the auth endpoints.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::models::User;

pub const DEFAULT_ROLE: &str = "user";

/// Bearer-token claims. `sub` is the storage-assigned user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub email: String,
  pub roles: Vec<String>,
  pub iat: i64,
  pub exp: i64,
}

/// Hashes a plain-text password with Argon2 and a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Checks a plain-text password against a stored Argon2 hash. A mismatch is
/// `Ok(false)`; only an unusable hash or an internal failure is an error.
#[instrument(name = "auth_service::verify_password", skip(stored_hash, password))]
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AppError> {
  if stored_hash.is_empty() || password.is_empty() {
    return Err(AppError::Auth("Invalid credentials.".to_string()));
  }

  let parsed_hash = PasswordHash::new(stored_hash)
    .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;

  match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(e) => Err(AppError::Internal(format!("Password verification failed: {}", e))),
  }
}

/// Issues an HS256 token for a persisted user.
#[instrument(name = "auth_service::issue_token", skip(secret, user), fields(email = %user.email))]
pub fn issue_token(secret: &str, ttl_seconds: i64, user: &User) -> Result<String, AppError> {
  let user_id = user
    .id
    .clone()
    .ok_or_else(|| AppError::Internal("Cannot issue a token for an unsaved user.".to_string()))?;

  let now = Utc::now().timestamp();
  let claims = Claims {
    sub: user_id,
    email: user.email.clone(),
    roles: user.roles.clone(),
    iat: now,
    exp: now + ttl_seconds,
  };

  debug!("Issuing token valid for {}s.", ttl_seconds);
  jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
    .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
}

/// Decodes and validates a bearer token. Every failure mode (bad signature,
/// garbage input, expiry) collapses into an auth error.
#[instrument(name = "auth_service::decode_token", skip(secret, token))]
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
  jsonwebtoken::decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_bytes()),
    &Validation::default(),
  )
  .map(|data| data.claims)
  .map_err(|e| AppError::Auth(format!("Invalid token: {}", e)))
}
