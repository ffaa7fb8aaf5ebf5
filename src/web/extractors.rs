// src/web/extractors.rs

use actix_web::http::header;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::Serialize;
use std::future::{ready, Ready};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

/// Identity of the caller, established from the `Authorization: Bearer`
/// header. Extraction fails with a 401 on a missing or invalid token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
  pub user_id: String,
  pub email: String,
  pub roles: Vec<String>,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(authenticate(req))
  }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

  let header_value = req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| AppError::Auth("Missing Authorization header.".to_string()))?;

  let token = header_value
    .strip_prefix("Bearer ")
    .ok_or_else(|| AppError::Auth("Expected a bearer token.".to_string()))?;

  let claims = auth_service::decode_token(&state.config.jwt_secret, token)?;

  Ok(AuthenticatedUser {
    user_id: claims.sub,
    email: claims.email,
    roles: claims.roles,
  })
}
