//! Flows Index Domain Library
//!
//! Domain implementation for the se_flows vector index: point validation
//! and forwarding on top of Qdrant.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  IndexService   │  ← collection lifecycle + point gateway validation
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  VectorIndex    │
//! │    (trait)      │
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  QdrantIndex    │
//! │ (implementation)│
//! └─────────────────┘
//! ```
//!
//! The service validates point identifiers (unsigned integer or UUID) and
//! batch vector lengths before anything touches the network; the engine owns
//! storage, indexing and distance computation.

pub mod error;
pub mod models;
pub mod qdrant;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{IndexError, IndexResult};
pub use models::{
    CollectionSpec, DistanceMetric, InsertReceipt, Point, PointId, PointInput, SearchHit,
    SearchQuery,
};
pub use qdrant::{QdrantConfig, QdrantIndex};
pub use repository::VectorIndex;
pub use service::IndexService;
