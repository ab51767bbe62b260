// src/web/handlers/product_handlers.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::product::Product;
use crate::state::AppState;
use crate::web::responses::pretty_json;

// --- Request DTO ---

/// Shared body for create and update. Every field is optional at the wire
/// level; `validated` enforces the presence rules before any query is built.
#[derive(Deserialize, Debug)]
pub struct ProductRequestPayload {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub discount: Option<f64>,
  pub review_count: Option<i32>,
  pub image_url: Option<String>,
}

#[derive(Debug)]
struct ValidatedProduct {
  name: String,
  price: f64,
  discount: Option<f64>,
  review_count: Option<i32>,
  image_url: Option<String>,
}

impl ProductRequestPayload {
  /// Presence checks only: `name` must be there and non-empty, `price` must
  /// be there (zero is a valid price). Everything else passes through.
  fn validated(self) -> Result<ValidatedProduct, AppError> {
    let name = match self.name {
      Some(name) if !name.is_empty() => name,
      _ => return Err(AppError::Validation("Product name is required.".to_string())),
    };
    let price = self
      .price
      .ok_or_else(|| AppError::Validation("Product price is required.".to_string()))?;

    Ok(ValidatedProduct {
      name,
      price,
      discount: self.discount,
      review_count: self.review_count,
      image_url: self.image_url,
    })
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  info!("Attempting to list products.");

  let products: Vec<Product> = sqlx::query_as(
    "SELECT id, name, price, discount, review_count, image_url, is_deleted FROM products WHERE is_deleted = FALSE",
  )
  .fetch_all(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to fetch products from database: {}", e);
    AppError::Sqlx(e)
  })?;

  info!("Successfully fetched {} products.", products.len());
  Ok(pretty_json(StatusCode::OK, &products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Attempting to fetch product with ID: {}.", product_id);

  let product_opt: Option<Product> = sqlx::query_as(
    "SELECT id, name, price, discount, review_count, image_url, is_deleted FROM products WHERE id = $1 AND is_deleted = FALSE",
  )
  .bind(product_id)
  .fetch_optional(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Database error while fetching product {}: {}", product_id, e);
    AppError::Sqlx(e)
  })?;

  match product_opt {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(pretty_json(StatusCode::OK, &product))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::search_products", skip(app_state, path), fields(keyword = %path.as_ref()))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let keyword = path.into_inner();
  // Substring match on both sides; case sensitivity is whatever the store's
  // collation does. `%`/`_` inside the keyword keep their wildcard meaning.
  let pattern = format!("%{}%", keyword);
  info!("Searching products with keyword '{}'.", keyword);

  let products: Vec<Product> = sqlx::query_as(
    "SELECT id, name, price, discount, review_count, image_url, is_deleted FROM products WHERE name LIKE $1 AND is_deleted = FALSE",
  )
  .bind(&pattern)
  .fetch_all(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to search products for '{}': {}", keyword, e);
    AppError::Sqlx(e)
  })?;

  info!("Search for '{}' matched {} products.", keyword, products.len());
  Ok(pretty_json(StatusCode::OK, &products))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product = payload.into_inner().validated()?;
  info!("Attempting to create product '{}'.", product.name);

  let (product_id,): (i32,) = sqlx::query_as(
    "INSERT INTO products (name, price, discount, review_count, image_url, is_deleted) VALUES ($1, $2, $3, $4, $5, FALSE) RETURNING id",
  )
  .bind(&product.name)
  .bind(product.price)
  .bind(product.discount)
  .bind(product.review_count)
  .bind(&product.image_url)
  .fetch_one(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to insert product '{}': {}", product.name, e);
    AppError::Sqlx(e)
  })?;

  info!("Product {} created successfully.", product_id);
  Ok(pretty_json(
    StatusCode::CREATED,
    &json!({ "id": product_id, "message": "Product created successfully." }),
  ))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<ProductRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = payload.into_inner().validated()?;
  info!("Attempting to update product {}.", product_id);

  // Matches on id alone: soft-deleted rows stay editable, and every listed
  // field is overwritten (absent optionals become NULL).
  let result = sqlx::query(
    "UPDATE products SET name = $1, price = $2, discount = $3, review_count = $4, image_url = $5 WHERE id = $6",
  )
  .bind(&product.name)
  .bind(product.price)
  .bind(product.discount)
  .bind(product.review_count)
  .bind(&product.image_url)
  .bind(product_id)
  .execute(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to update product {}: {}", product_id, e);
    AppError::Sqlx(e)
  })?;

  if result.rows_affected() == 0 {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
  }

  info!("Product {} updated successfully.", product_id);
  Ok(pretty_json(StatusCode::OK, &json!({ "message": "Product updated successfully." })))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Attempting to soft-delete product {}.", product_id);

  let result = sqlx::query("UPDATE products SET is_deleted = TRUE WHERE id = $1")
    .bind(product_id)
    .execute(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to soft-delete product {}: {}", product_id, e);
      AppError::Sqlx(e)
    })?;

  if result.rows_affected() == 0 {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
  }

  info!("Product {} soft-deleted successfully.", product_id);
  Ok(pretty_json(StatusCode::OK, &json!({ "message": "Product deleted successfully." })))
}

#[instrument(name = "handler::restore_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn restore_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Attempting to restore product {}.", product_id);

  let result = sqlx::query("UPDATE products SET is_deleted = FALSE WHERE id = $1")
    .bind(product_id)
    .execute(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to restore product {}: {}", product_id, e);
      AppError::Sqlx(e)
    })?;

  if result.rows_affected() == 0 {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
  }

  info!("Product {} restored successfully.", product_id);
  Ok(pretty_json(StatusCode::OK, &json!({ "message": "Product restored successfully." })))
}
