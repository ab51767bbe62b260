// src/state.rs

use sqlx::PgPool;

/// Shared application state, cloned into every worker; the pool itself is
/// reference-counted so clones stay cheap.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
}
