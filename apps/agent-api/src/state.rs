//! Application state management.
//!
//! The state carries the startup configuration and, when Qdrant is
//! configured, the index service. The index is optional so the stub
//! endpoints keep working without a vector engine.

use std::sync::Arc;

use domain_flows::{IndexResult, IndexService, QdrantConfig, QdrantIndex};

/// Shared application state, cloned per handler (cheap Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Vector index backend; `None` when QDRANT_URL/QDRANT_API_KEY are absent
    pub index: Option<Arc<IndexBackend>>,
}

/// Qdrant-backed index service plus the collection defaults it was
/// configured with.
pub struct IndexBackend {
    pub qdrant: QdrantConfig,
    pub service: IndexService<QdrantIndex>,
}

impl IndexBackend {
    pub fn connect(qdrant: QdrantConfig) -> IndexResult<Self> {
        let index = QdrantIndex::new(&qdrant)?;
        Ok(Self {
            service: IndexService::new(index),
            qdrant,
        })
    }
}
