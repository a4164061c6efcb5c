//! Vector index endpoints.
//!
//! Thin envelope over `domain_flows::IndexService`: validation and engine
//! failures are reported inline as `{ok:false, error}` rather than as
//! transport-level errors, so callers always parse one shape.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use domain_flows::{CollectionSpec, PointInput, SearchHit, SearchQuery};

use crate::state::AppState;

// ===== Request/Response DTOs =====

#[derive(Debug, Deserialize, ToSchema)]
pub struct InsertRequest {
    /// Points to upsert; all vectors must share one length
    pub points: Vec<PointInput>,
    /// Target collection; defaults to the configured one
    #[serde(default)]
    pub collection: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Query embedding; `query_vector` is accepted as an alias
    #[serde(alias = "query_vector")]
    pub vector: Vec<f32>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub score_threshold: Option<f32>,
    #[serde(default)]
    pub collection: Option<String>,
}

fn default_limit() -> u64 {
    5
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InsertReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InsertReply {
    fn ok(upserted: usize, status: String) -> Self {
        Self {
            ok: true,
            upserted: Some(upserted),
            status: Some(status),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            upserted: None,
            status: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchHit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchReply {
    fn ok(results: Vec<SearchHit>) -> Self {
        Self {
            ok: true,
            results: Some(results),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            results: None,
            error: Some(msg.into()),
        }
    }
}

const NOT_CONFIGURED: &str =
    "vector index is not configured (set QDRANT_URL and QDRANT_API_KEY)";

// ===== Handlers =====

/// Upsert a batch of points
#[utoipa::path(
    post,
    path = "/v1/index/insert",
    tag = "index",
    request_body = InsertRequest,
    responses(
        (status = 200, description = "Upsert outcome or inline error", body = InsertReply)
    )
)]
pub async fn insert(
    State(state): State<AppState>,
    Json(request): Json<InsertRequest>,
) -> Json<InsertReply> {
    let Some(backend) = &state.index else {
        return Json(InsertReply::error(NOT_CONFIGURED));
    };

    let collection = request
        .collection
        .unwrap_or_else(|| backend.qdrant.collection.clone());

    // Lazy create on first use; the engine keeps this idempotent.
    let spec = CollectionSpec::new(backend.qdrant.vector_size);
    if let Err(e) = backend.service.ensure_collection(&collection, spec).await {
        error!("Failed to ensure collection {}: {}", collection, e);
        return Json(InsertReply::error(e.to_string()));
    }

    match backend.service.insert(&collection, request.points).await {
        Ok(receipt) => {
            info!("Upserted {} points to {}", receipt.upserted, collection);
            Json(InsertReply::ok(receipt.upserted, receipt.status))
        }
        Err(e) => {
            error!("Insert into {} failed: {}", collection, e);
            Json(InsertReply::error(e.to_string()))
        }
    }
}

/// Nearest-neighbor search
#[utoipa::path(
    post,
    path = "/v1/index/search",
    tag = "index",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Ordered search hits or inline error", body = SearchReply)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchReply> {
    let Some(backend) = &state.index else {
        return Json(SearchReply::error(NOT_CONFIGURED));
    };

    let collection = request
        .collection
        .unwrap_or_else(|| backend.qdrant.collection.clone());

    let mut query = SearchQuery::new(request.vector, request.limit);
    query.score_threshold = request.score_threshold;

    match backend.service.search(&collection, query).await {
        Ok(results) => Json(SearchReply::ok(results)),
        Err(e) => {
            error!("Search in {} failed: {}", collection, e);
            Json(SearchReply::error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use core_config::{Environment, app_info, server::ServerConfig};
    use serde_json::json;

    fn unconfigured_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            index: None,
        }
    }

    #[tokio::test]
    async fn insert_without_backend_reports_missing_config() {
        let reply = insert(
            State(unconfigured_state()),
            Json(InsertRequest {
                points: vec![],
                collection: None,
            }),
        )
        .await;

        assert!(!reply.ok);
        assert!(reply.error.as_deref().unwrap().contains("QDRANT_URL"));
    }

    #[tokio::test]
    async fn search_without_backend_reports_missing_config() {
        let reply = search(
            State(unconfigured_state()),
            Json(SearchRequest {
                vector: vec![0.1],
                limit: 5,
                score_threshold: None,
                collection: None,
            }),
        )
        .await;

        assert!(!reply.ok);
        assert!(reply.results.is_none());
    }

    #[test]
    fn search_request_accepts_both_wire_shapes() {
        let plain: SearchRequest =
            serde_json::from_value(json!({"vector": [0.1, 0.2], "limit": 3})).unwrap();
        assert_eq!(plain.vector, vec![0.1, 0.2]);
        assert_eq!(plain.limit, 3);

        let aliased: SearchRequest = serde_json::from_value(
            json!({"query_vector": [0.3], "score_threshold": 0.6, "collection": "se_flows"}),
        )
        .unwrap();
        assert_eq!(aliased.vector, vec![0.3]);
        assert_eq!(aliased.limit, 5);
        assert_eq!(aliased.score_threshold, Some(0.6));
    }

    #[test]
    fn insert_reply_matches_envelope_shape() {
        let ok = serde_json::to_value(InsertReply::ok(1, "completed".to_string())).unwrap();
        assert_eq!(ok, json!({"ok": true, "upserted": 1, "status": "completed"}));

        let err = serde_json::to_value(InsertReply::error("boom")).unwrap();
        assert_eq!(err, json!({"ok": false, "error": "boom"}));
    }
}
