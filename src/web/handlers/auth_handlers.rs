// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::User;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub name: String,
  pub email: String,
  pub password: String,
  pub roles: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::register", skip(app_state, payload), fields(email = %payload.email))]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  if app_state.users.find_by_email(&payload.email).await?.is_some() {
    warn!("Registration rejected, email already taken.");
    return Err(AppError::Validation("Email is already registered.".to_string()));
  }

  let password_hash = auth_service::hash_password(&payload.password)?;
  let roles = match payload.roles {
    Some(roles) if !roles.is_empty() => roles,
    _ => vec![auth_service::DEFAULT_ROLE.to_string()],
  };

  let user = User {
    id: None,
    name: payload.name,
    email: payload.email,
    password_hash,
    roles,
    created_at: Utc::now().timestamp(),
  };

  let created = app_state.users.create(user).await?;
  info!(user_id = ?created.id, "User registered.");
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::login", skip(app_state, payload), fields(email = %payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  // Same message for unknown email and wrong password.
  let invalid = || AppError::Auth("Invalid email or password.".to_string());

  let user = app_state
    .users
    .find_by_email(&payload.email)
    .await?
    .ok_or_else(invalid)?;

  if !auth_service::verify_password(&user.password_hash, &payload.password)? {
    warn!("Login rejected, password mismatch.");
    return Err(invalid());
  }

  let token = auth_service::issue_token(&app_state.config.jwt_secret, app_state.config.jwt_ttl_seconds, &user)?;
  info!(user_id = ?user.id, "Login successful.");

  Ok(HttpResponse::Ok().json(json!({
    "token": token,
    "user": user,
  })))
}

#[instrument(name = "handler::me", skip(user), fields(user_id = %user.user_id))]
pub async fn me_handler(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(user))
}
