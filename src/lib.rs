// src/lib.rs

//! A small HTTP service exposing CRUD operations over a "products" table in
//! PostgreSQL, with soft-delete semantics:
//!  - Read endpoints only return rows whose `is_deleted` flag is false.
//!  - DELETE flips the flag instead of removing the row; PATCH /restore
//!    flips it back.
//!  - Updates match on id alone, so a soft-deleted row stays editable.
//!
//! Everything is one parameterized statement per request; the interesting
//! parts are the request/response contract (`web::handlers`) and the
//! status-code mapping (`errors`).

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;
