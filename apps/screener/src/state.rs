use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::screening::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extractor and question generator, chosen once at startup from `Config::backend`.
    pub screener: Screener,
    pub catalog: Arc<Catalog>,
    pub config: Config,
}
