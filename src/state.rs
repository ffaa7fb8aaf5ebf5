// src/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::UserRepository;
use crate::services::{OrderService, ProductService};

/// Shared per-worker application state. Everything inside is an `Arc`; the
/// services hold no mutable state of their own.
#[derive(Clone)]
pub struct AppState {
  pub orders: Arc<OrderService>,
  pub products: Arc<ProductService>,
  pub users: Arc<dyn UserRepository>,
  pub config: Arc<AppConfig>,
}
