// src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

/// A row of the `products` table. Every column serializes into product
/// responses, `is_deleted` included; optional columns render as `null`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub price: f64,
  pub discount: Option<f64>,
  pub review_count: Option<i32>,
  pub image_url: Option<String>,
  pub is_deleted: bool,
}
