use std::sync::Arc;

use folio_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state.
///
/// The catalog is built and validated once at startup, then shared
/// immutably across request handlers. Nothing in here is mutated after
/// construction, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<ServerConfig>,
}
