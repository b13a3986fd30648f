use std::sync::Arc;

use crate::config::AppConfig;
use crate::cover::Rasterizer;
use crate::objects::ObjectStore;

/// The shared application state.
///
/// Cloneable for axum's request extraction; the database pool and the object
/// store handle their own synchronization internally. Request-scoped units of
/// work are opened from the pool per handler - nothing here is per-request.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// S3-compatible object store for uploaded files. `None` until configured;
    /// upload routes answer 503 in that case.
    pub objects: Option<Arc<ObjectStore>>,
    /// First-page PDF rasterizer used for manual cover extraction.
    pub rasterizer: Arc<dyn Rasterizer>,
}

impl AppState {
    pub fn new(
        db: sqlx::SqlitePool,
        config: AppConfig,
        objects: Option<Arc<ObjectStore>>,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Self {
        Self { db, config: Arc::new(config), objects, rasterizer }
    }
}
