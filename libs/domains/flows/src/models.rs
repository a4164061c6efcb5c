use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{IndexError, IndexResult};

/// Point identifier: an unsigned integer or a UUID.
///
/// Qdrant accepts exactly these two id kinds, so the variant is fixed at
/// the boundary instead of carrying loose JSON through the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(Uuid),
}

impl PointId {
    /// Validate a raw JSON id into a [`PointId`].
    ///
    /// Accepts non-negative integers and syntactically valid UUID strings;
    /// everything else is a validation error naming the offending value.
    pub fn parse(value: &serde_json::Value) -> IndexResult<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(PointId::Num).ok_or_else(|| {
                IndexError::Validation(format!(
                    "point id must be a non-negative integer or UUID string: {}",
                    n
                ))
            }),
            serde_json::Value::String(s) => Uuid::parse_str(s).map(PointId::Uuid).map_err(|_| {
                IndexError::Validation(format!(
                    "invalid point id (expected UUID or unsigned integer): {:?}",
                    s
                ))
            }),
            other => Err(IndexError::Validation(format!(
                "invalid point id type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Num(n) => write!(f, "{}", n),
            PointId::Uuid(u) => write!(f, "{}", u),
        }
    }
}

/// Wire shape of a point as submitted by callers.
///
/// The id stays raw JSON here so that malformed ids surface as inline
/// validation errors from the gateway rather than body-extraction failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointInput {
    /// Point id: non-negative integer or UUID string
    #[schema(value_type = Object)]
    pub id: serde_json::Value,
    /// Embedding vector (fixed dimension per collection)
    pub vector: Vec<f32>,
    /// Optional metadata payload
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl PointInput {
    /// Validate the raw id, producing a well-typed [`Point`].
    pub fn validate(self) -> IndexResult<Point> {
        let id = PointId::parse(&self.id)?;
        Ok(Point {
            id,
            vector: self.vector,
            payload: self.payload,
        })
    }
}

/// A validated point ready to be forwarded to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Point {
    pub id: PointId,
    pub vector: Vec<f32>,
    pub payload: Option<serde_json::Value>,
}

/// Distance metric for similarity calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    Euclidean,
    Dot,
}

/// Collection shape: fixed dimensionality plus distance metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CollectionSpec {
    pub dimension: u64,
    pub distance: DistanceMetric,
}

impl CollectionSpec {
    pub fn new(dimension: u64) -> Self {
        Self {
            dimension,
            distance: DistanceMetric::default(),
        }
    }

    pub fn with_distance(mut self, distance: DistanceMetric) -> Self {
        self.distance = distance;
        self
    }
}

/// Nearest-neighbor search parameters
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub vector: Vec<f32>,
    pub limit: u64,
    pub score_threshold: Option<f32>,
}

impl SearchQuery {
    pub fn new(vector: Vec<f32>, limit: u64) -> Self {
        Self {
            vector,
            limit,
            score_threshold: None,
        }
    }

    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }
}

/// One search hit, engine-ordered by descending score.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    pub id: PointId,
    pub score: f32,
    pub payload: Option<serde_json::Value>,
}

/// Outcome of an upsert batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsertReceipt {
    /// Number of points submitted in the upsert
    pub upserted: usize,
    /// Engine-reported operation status
    pub status: String,
}
