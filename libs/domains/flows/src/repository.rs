use async_trait::async_trait;

use crate::error::IndexResult;
use crate::models::{CollectionSpec, Point, SearchHit, SearchQuery};

/// Trait abstracting the external vector engine.
///
/// Points handed to implementations are already validated; collection
/// names are used verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// List the names of all collections known to the engine
    async fn list_collections(&self) -> IndexResult<Vec<String>>;

    /// Create a collection with the given dimension and distance metric
    async fn create_collection(&self, name: &str, spec: CollectionSpec) -> IndexResult<()>;

    /// Upsert a batch of points, returning the engine-reported status
    async fn upsert(&self, collection: &str, points: Vec<Point>) -> IndexResult<String>;

    /// Nearest-neighbor search with an optional score cutoff
    async fn search(&self, collection: &str, query: SearchQuery) -> IndexResult<Vec<SearchHit>>;
}
