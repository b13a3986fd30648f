//! Persistence records and transport schemas, paired per entity.
//!
//! Records map table columns (`sqlx::FromRow` + the [`crate::store::Model`]
//! trait); schemas are what crosses the API boundary. Creation requests reuse
//! the schema types with an optional `id` - identifiers are always generated
//! by the database.

pub mod auth;
pub mod converters;
pub mod manuals;
pub mod menu;
pub mod posts;
pub mod sensors;
pub mod storage;
