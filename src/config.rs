// src/config.rs

use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Store connection pieces, supplied externally
  pub db_host: String,
  pub db_port: u16,
  pub db_user: String,
  pub db_password: Option<String>,
  pub db_database: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let db_host = get_env("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let db_port = get_env("DB_PORT")
      .unwrap_or_else(|_| "5432".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
    let db_user = get_env("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let db_password = env::var("DB_PASSWORD").ok();
    let db_database = get_env("DB_DATABASE")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      db_host,
      db_port,
      db_user,
      db_password,
      db_database,
    })
  }

  /// Connection options for the configured store.
  pub fn pg_connect_options(&self) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
      .host(&self.db_host)
      .port(self.db_port)
      .username(&self.db_user)
      .database(&self.db_database);
    if let Some(password) = &self.db_password {
      options = options.password(password);
    }
    options
  }
}
