// src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use product_service::config::AppConfig;
use product_service::state::AppState;
use product_service::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting product service...");

  // Load application configuration
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  // The pool is lazy: a store that is down at startup is logged, not fatal,
  // and every request surfaces the store error until it comes back.
  let db_pool = PgPoolOptions::new()
    .max_connections(5)
    .connect_lazy_with(app_config.pg_connect_options());

  match db_pool.acquire().await {
    Ok(_) => tracing::info!("Successfully connected to the database."),
    Err(e) => tracing::error!(error = %e, "Failed to connect to the database."),
  }

  // Create AppState
  let app_state = AppState {
    db_pool: db_pool.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind server to {}", server_address))?
  .run()
  .await
  .context("Server error")?;

  db_pool.close().await;
  tracing::info!("Server stopped; database pool closed.");
  Ok(())
}
