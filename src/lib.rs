//! # AEDB Backend Library
//!
//! Catalog/content-management backend exposing CRUD HTTP endpoints over a
//! relational database for several business domains: equipment manuals
//! (categories, groups, manuals), a frequency-converter inventory, user
//! authentication, blog-style posts, and auxiliary menu/sensor/storage data.
//! Uploaded manual PDFs go to an S3-compatible object store; their first page
//! becomes the cover image.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous database operations with SQLite
//! - **Tokio**: async runtime
//! - **Serde**: serialization for the JSON API
//!
//! ## Core Components
//!
//! - [`config`]: application configuration management
//! - [`db`]: database schema initialization
//! - [`error`]: centralized error handling and HTTP error responses
//! - [`store`]: request-scoped sessions and the generic data manager
//! - [`models`]: persistence records and transport schemas per domain
//! - [`auth`]: password hashing and signed bearer tokens
//! - [`middleware`]: bearer-token extraction for protected routes
//! - [`objects`]: S3-compatible object storage client
//! - [`cover`]: PDF cover extraction and cover-URL derivation
//! - [`services`]: per-domain façades over the data manager
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: shared application state

pub mod auth;
pub mod config;
pub mod cover;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod objects;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;
