// src/models/product.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Option<String>,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i64,
  pub category: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i64,
  pub category: String,
  pub image_url: Option<String>,
}
