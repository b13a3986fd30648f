//! Domain façades over the generic data manager.
//!
//! Each service borrows the request's [`crate::store::Session`], composes one
//! or more [`crate::store::DataManager`] instances against it, and applies the
//! domain rules (cover-URL derivation, fixture seeding, pagination math).
//! Commit stays at the route boundary.

pub mod auth;
pub mod converters;
pub mod manuals;
pub mod menu;
pub mod posts;
pub mod storage;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Reads and deserializes one JSON fixture file from the fixtures directory.
pub(crate) async fn load_fixture<T: DeserializeOwned>(dir: &str, file: &str) -> AppResult<T> {
    let path = Path::new(dir).join(file);
    let raw = tokio::fs::read(&path).await.map_err(|e| {
        AppError::BadRequest(format!("fixture {} is not readable: {}", path.display(), e))
    })?;
    serde_json::from_slice(&raw).map_err(|e| {
        AppError::BadRequest(format!("fixture {} is not valid JSON: {}", path.display(), e))
    })
}
