use std::sync::Arc;

use sqlx::PgPool;
use tera::Tera;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Embedded page templates, compiled once at startup.
    pub templates: Arc<Tera>,
}
