// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongodb_uri: String,
  pub mongodb_database: String,
  pub jwt_secret: String,
  pub jwt_ttl_seconds: i64,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let mongodb_uri = get_env("MONGODB_URI")?;
    let mongodb_database = get_env("MONGODB_DATABASE").unwrap_or_else(|_| "orders_api".to_string());
    let jwt_secret = get_env("JWT_SECRET")?;
    let jwt_ttl_seconds = get_env("JWT_TTL_SECONDS")
      .unwrap_or_else(|_| "3600".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid JWT_TTL_SECONDS: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      mongodb_uri,
      mongodb_database,
      jwt_secret,
      jwt_ttl_seconds,
    })
  }
}
