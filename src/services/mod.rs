// src/services/mod.rs

//! Business-logic layer. Services are stateless aside from the repository
//! reference they are constructed with; errors from the repositories pass
//! through untouched.

pub mod auth_service;
pub mod order_service;
pub mod product_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
