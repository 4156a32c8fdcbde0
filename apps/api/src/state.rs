use std::sync::Arc;

use crate::advisory::Advisor;
use crate::matching::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only; loaded once at startup and shared without locking.
    pub catalog: Arc<Catalog>,
    pub advisor: Advisor,
}
