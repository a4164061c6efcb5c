use tracing::{debug, info};

use crate::error::{IndexError, IndexResult};
use crate::models::{CollectionSpec, InsertReceipt, Point, PointInput, SearchHit, SearchQuery};
use crate::repository::VectorIndex;

/// High-level index operations: collection lifecycle plus the point
/// gateway that validates batches before they reach the engine.
pub struct IndexService<R: VectorIndex> {
    index: R,
}

impl<R: VectorIndex> IndexService<R> {
    pub fn new(index: R) -> Self {
        Self { index }
    }

    // ===== Collection Management =====

    /// List the names of all collections known to the engine
    pub async fn list_collections(&self) -> IndexResult<Vec<String>> {
        self.index.list_collections().await
    }

    /// Create the collection if it does not exist yet.
    ///
    /// Returns `true` when the collection was created by this call and
    /// `false` when it already existed. Concurrent callers may race here;
    /// the engine's create semantics keep the outcome idempotent.
    pub async fn ensure_collection(&self, name: &str, spec: CollectionSpec) -> IndexResult<bool> {
        let existing = self.index.list_collections().await?;

        if existing.iter().any(|c| c == name) {
            debug!(collection = name, "Collection already exists");
            return Ok(false);
        }

        self.index.create_collection(name, spec).await?;
        info!(
            collection = name,
            dimension = spec.dimension,
            "Created collection"
        );
        Ok(true)
    }

    // ===== Point Gateway =====

    /// Validate and upsert a batch of points.
    ///
    /// Every id must be a non-negative integer or UUID string and all
    /// vectors must share the first vector's length. Validation failures
    /// are returned before any network call is made.
    pub async fn insert(
        &self,
        collection: &str,
        batch: Vec<PointInput>,
    ) -> IndexResult<InsertReceipt> {
        if batch.is_empty() {
            return Err(IndexError::Validation(
                "points must not be empty".to_string(),
            ));
        }

        let expected_len = batch[0].vector.len();
        let mut points: Vec<Point> = Vec::with_capacity(batch.len());

        for input in batch {
            if input.vector.len() != expected_len {
                return Err(IndexError::Validation(format!(
                    "vector length mismatch: expected {}, point {} has {}",
                    expected_len,
                    input.id,
                    input.vector.len()
                )));
            }
            points.push(input.validate()?);
        }

        let upserted = points.len();
        let status = self.index.upsert(collection, points).await?;

        debug!(collection, upserted, status, "Upserted points");
        Ok(InsertReceipt { upserted, status })
    }

    /// Nearest-neighbor search with an optional score cutoff.
    ///
    /// The engine returns hits ordered by descending score, capped at
    /// `query.limit`.
    pub async fn search(
        &self,
        collection: &str,
        query: SearchQuery,
    ) -> IndexResult<Vec<SearchHit>> {
        if query.vector.is_empty() {
            return Err(IndexError::Validation(
                "query vector must not be empty".to_string(),
            ));
        }

        self.index.search(collection, query).await
    }
}
