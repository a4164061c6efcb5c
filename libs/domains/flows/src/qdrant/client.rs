use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    self, CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder, UpdateStatus,
    UpsertPointsBuilder, Value as QdrantValue, VectorParamsBuilder,
};
use uuid::Uuid;

use super::QdrantConfig;
use crate::error::{IndexError, IndexResult};
use crate::models::{CollectionSpec, DistanceMetric, Point, PointId, SearchHit, SearchQuery};
use crate::repository::VectorIndex;

/// Qdrant-backed implementation of [`VectorIndex`]
pub struct QdrantIndex {
    client: Qdrant,
}

impl QdrantIndex {
    pub fn new(config: &QdrantConfig) -> IndexResult<Self> {
        let client = Qdrant::from_url(&config.url)
            .api_key(config.api_key.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IndexError::Qdrant(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    fn to_qdrant_distance(metric: DistanceMetric) -> Distance {
        match metric {
            DistanceMetric::Cosine => Distance::Cosine,
            DistanceMetric::Euclidean => Distance::Euclid,
            DistanceMetric::Dot => Distance::Dot,
        }
    }

    fn to_qdrant_id(id: PointId) -> qdrant::PointId {
        match id {
            PointId::Num(n) => qdrant::PointId::from(n),
            PointId::Uuid(u) => qdrant::PointId::from(u.to_string()),
        }
    }

    fn from_qdrant_id(point_id: &qdrant::PointId) -> IndexResult<PointId> {
        match &point_id.point_id_options {
            Some(qdrant::point_id::PointIdOptions::Num(n)) => Ok(PointId::Num(*n)),
            Some(qdrant::point_id::PointIdOptions::Uuid(s)) => Uuid::parse_str(s)
                .map(PointId::Uuid)
                .map_err(|e| IndexError::Internal(format!("Invalid UUID from engine: {}", e))),
            None => Err(IndexError::Internal("Missing point ID".to_string())),
        }
    }

    fn payload_to_qdrant(payload: Option<serde_json::Value>) -> HashMap<String, QdrantValue> {
        let Some(serde_json::Value::Object(map)) = payload else {
            return HashMap::new();
        };

        map.into_iter()
            .map(|(key, val)| (key, json_to_qdrant_value(val)))
            .collect()
    }

    fn qdrant_to_payload(payload: HashMap<String, QdrantValue>) -> Option<serde_json::Value> {
        if payload.is_empty() {
            return None;
        }

        let map = payload
            .into_iter()
            .map(|(key, val)| (key, qdrant_value_to_json(val)))
            .collect();

        Some(serde_json::Value::Object(map))
    }
}

// Payloads pass through unmodified, so nested arrays and objects are
// converted recursively rather than flattened.
fn json_to_qdrant_value(val: serde_json::Value) -> QdrantValue {
    use qdrant::value::Kind;

    let kind = match val {
        serde_json::Value::Null => Kind::NullValue(0),
        serde_json::Value::Bool(b) => Kind::BoolValue(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Kind::IntegerValue(i)
            } else {
                Kind::DoubleValue(n.as_f64().unwrap_or_default())
            }
        }
        serde_json::Value::String(s) => Kind::StringValue(s),
        serde_json::Value::Array(items) => Kind::ListValue(qdrant::ListValue {
            values: items.into_iter().map(json_to_qdrant_value).collect(),
        }),
        serde_json::Value::Object(map) => Kind::StructValue(qdrant::Struct {
            fields: map
                .into_iter()
                .map(|(key, val)| (key, json_to_qdrant_value(val)))
                .collect(),
        }),
    };

    QdrantValue { kind: Some(kind) }
}

fn qdrant_value_to_json(val: QdrantValue) -> serde_json::Value {
    use qdrant::value::Kind;

    match val.kind {
        Some(Kind::BoolValue(b)) => serde_json::Value::Bool(b),
        Some(Kind::IntegerValue(i)) => serde_json::Value::Number(i.into()),
        Some(Kind::DoubleValue(f)) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Some(Kind::StringValue(s)) => serde_json::Value::String(s),
        Some(Kind::ListValue(list)) => serde_json::Value::Array(
            list.values.into_iter().map(qdrant_value_to_json).collect(),
        ),
        Some(Kind::StructValue(fields)) => serde_json::Value::Object(
            fields
                .fields
                .into_iter()
                .map(|(key, val)| (key, qdrant_value_to_json(val)))
                .collect(),
        ),
        Some(Kind::NullValue(_)) | None => serde_json::Value::Null,
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn list_collections(&self) -> IndexResult<Vec<String>> {
        let collections = self.client.list_collections().await?;

        Ok(collections
            .collections
            .into_iter()
            .map(|c| c.name)
            .collect())
    }

    async fn create_collection(&self, name: &str, spec: CollectionSpec) -> IndexResult<()> {
        let builder = CreateCollectionBuilder::new(name).vectors_config(VectorParamsBuilder::new(
            spec.dimension,
            Self::to_qdrant_distance(spec.distance),
        ));

        self.client.create_collection(builder).await?;
        Ok(())
    }

    async fn upsert(&self, collection: &str, points: Vec<Point>) -> IndexResult<String> {
        let points: Vec<PointStruct> = points
            .into_iter()
            .map(|p| {
                PointStruct::new(
                    Self::to_qdrant_id(p.id),
                    p.vector,
                    Self::payload_to_qdrant(p.payload),
                )
            })
            .collect();

        let response = self
            .client
            .upsert_points(UpsertPointsBuilder::new(collection, points))
            .await?;

        let status = response
            .result
            .map(|r| match r.status() {
                UpdateStatus::Acknowledged => "acknowledged",
                UpdateStatus::Completed => "completed",
                _ => "unknown",
            })
            .unwrap_or("unknown");

        Ok(status.to_string())
    }

    async fn search(&self, collection: &str, query: SearchQuery) -> IndexResult<Vec<SearchHit>> {
        let mut builder = SearchPointsBuilder::new(collection, query.vector, query.limit);

        if let Some(threshold) = query.score_threshold {
            builder = builder.score_threshold(threshold);
        }

        builder = builder.with_payload(true);

        let results = self.client.search_points(builder).await?;

        results
            .result
            .into_iter()
            .map(|point| {
                let id = point
                    .id
                    .as_ref()
                    .map(Self::from_qdrant_id)
                    .transpose()?
                    .ok_or_else(|| IndexError::Internal("Missing point ID".to_string()))?;

                Ok(SearchHit {
                    id,
                    score: point.score,
                    payload: Self::qdrant_to_payload(point.payload),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_conversion_keeps_scalars() {
        let payload = json!({"title": "flow", "phase": 3, "weight": 0.5, "live": true});
        let converted = QdrantIndex::payload_to_qdrant(Some(payload));
        assert_eq!(converted.len(), 4);

        let back = QdrantIndex::qdrant_to_payload(converted).unwrap();
        assert_eq!(back["title"], json!("flow"));
        assert_eq!(back["phase"], json!(3));
        assert_eq!(back["weight"], json!(0.5));
        assert_eq!(back["live"], json!(true));
    }

    #[test]
    fn payload_conversion_preserves_nested_values() {
        let payload = json!({
            "tags": ["a", "b"],
            "meta": {"k": 1, "inner": {"deep": true}},
            "note": null,
        });

        let converted = QdrantIndex::payload_to_qdrant(Some(payload.clone()));
        assert_eq!(converted.len(), 3);

        let back = QdrantIndex::qdrant_to_payload(converted).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn payload_conversion_keeps_mixed_arrays() {
        let payload = json!({"steps": [1, "review", {"due": "2025-03-01"}]});

        let converted = QdrantIndex::payload_to_qdrant(Some(payload.clone()));
        let back = QdrantIndex::qdrant_to_payload(converted).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn payload_conversion_empty_is_none() {
        assert!(QdrantIndex::payload_to_qdrant(None).is_empty());
        assert!(QdrantIndex::qdrant_to_payload(HashMap::new()).is_none());
    }

    #[test]
    fn id_roundtrip_through_qdrant_types() {
        let num = QdrantIndex::to_qdrant_id(PointId::Num(9));
        assert_eq!(QdrantIndex::from_qdrant_id(&num).unwrap(), PointId::Num(9));

        let uuid = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let qid = QdrantIndex::to_qdrant_id(PointId::Uuid(uuid));
        assert_eq!(
            QdrantIndex::from_qdrant_id(&qid).unwrap(),
            PointId::Uuid(uuid)
        );
    }
}
