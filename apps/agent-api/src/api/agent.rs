//! Agent stub endpoints.
//!
//! These handlers return hardcoded or pass-through data; retrieval,
//! reranking and generation live behind other services and are not
//! implemented here.

use axum::{Json, extract::Query, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;

// ===== Request/Response DTOs =====

#[derive(Debug, Serialize, ToSchema)]
pub struct RootInfo {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Free-form user question
    pub query: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub context_preferences: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Citation {
    pub source: String,
    pub section_path: String,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub confidence: f32,
    pub actions: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChecklistRequest {
    pub topic: String,
    #[serde(default)]
    pub constraints: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChecklistItem {
    pub item: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChecklistResponse {
    pub topic: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CalendarRequest {
    pub title: String,
    pub due: String,
    #[serde(default)]
    pub assignees: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarResponse {
    pub title: String,
    pub due: String,
    pub assignees: Vec<String>,
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DocSourceParams {
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocSourceResponse {
    pub id: String,
    pub download_url: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

// ===== Handlers =====

/// Service info
#[utoipa::path(
    get,
    path = "/",
    tag = "agent",
    responses(
        (status = 200, description = "Service name and version", body = RootInfo)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<RootInfo> {
    Json(RootInfo {
        ok: true,
        service: state.config.app.name,
        version: state.config.app.version,
    })
}

/// Answer a process question (stub)
#[utoipa::path(
    post,
    path = "/v1/ask",
    tag = "agent",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Stub answer with citations", body = AskResponse)
    )
)]
pub async fn ask(Json(_body): Json<AskRequest>) -> Json<AskResponse> {
    Json(AskResponse {
        answer: "Sample answer: per chapter 3 of the process manual, submit the proposal \
                 report together with the review form."
            .to_string(),
        citations: vec![Citation {
            source: "se_manual_2024.pdf".to_string(),
            section_path: "ch3/3.2 proposal requirements".to_string(),
            version: "2024-fall".to_string(),
        }],
        confidence: 0.87,
        actions: vec![],
    })
}

/// Build a checklist for a topic (stub, fixed three items)
#[utoipa::path(
    post,
    path = "/v1/checklist",
    tag = "agent",
    request_body = ChecklistRequest,
    responses(
        (status = 200, description = "Checklist for the topic", body = ChecklistResponse)
    )
)]
pub async fn checklist(Json(body): Json<ChecklistRequest>) -> Json<ChecklistResponse> {
    let items = [
        "Review the course process and templates",
        "Fill in the proposal report (faculty template)",
        "Schedule the review session and confirm reviewers",
    ]
    .into_iter()
    .map(|item| ChecklistItem {
        item: item.to_string(),
        status: "pending".to_string(),
    })
    .collect();

    Json(ChecklistResponse {
        topic: body.topic,
        items,
    })
}

/// Create a calendar entry (echo with generated id)
#[utoipa::path(
    post,
    path = "/v1/calendar/create",
    tag = "agent",
    request_body = CalendarRequest,
    responses(
        (status = 200, description = "Scheduled entry", body = CalendarResponse)
    )
)]
pub async fn calendar_create(Json(body): Json<CalendarRequest>) -> Json<CalendarResponse> {
    let id = format!("cal_{}", &Uuid::new_v4().simple().to_string()[..12]);

    Json(CalendarResponse {
        title: body.title,
        due: body.due,
        assignees: body.assignees.unwrap_or_default(),
        id,
        status: "scheduled".to_string(),
    })
}

/// Resolve a document download URL
#[utoipa::path(
    get,
    path = "/v1/docs/source",
    tag = "agent",
    params(
        ("id" = String, Query, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Download URL for the document", body = DocSourceResponse)
    )
)]
pub async fn doc_source(Query(params): Query<DocSourceParams>) -> Json<DocSourceResponse> {
    let download_url = format!("https://example.com/docs/{}", params.id);

    Json(DocSourceResponse {
        id: params.id,
        download_url,
        doc_type: "template".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ask_returns_citation_and_confidence() {
        let response = ask(Json(AskRequest {
            query: "When is the proposal due?".to_string(),
            user_id: None,
            context_preferences: None,
        }))
        .await;

        assert!(!response.answer.is_empty());
        assert_eq!(response.citations.len(), 1);
        assert_eq!(response.citations[0].source, "se_manual_2024.pdf");
        assert!(response.confidence > 0.0 && response.confidence <= 1.0);
        assert!(response.actions.is_empty());
    }

    #[tokio::test]
    async fn checklist_echoes_topic_with_three_pending_items() {
        let response = checklist(Json(ChecklistRequest {
            topic: "proposal".to_string(),
            constraints: None,
        }))
        .await;

        assert_eq!(response.topic, "proposal");
        assert_eq!(response.items.len(), 3);
        assert!(response.items.iter().all(|i| i.status == "pending"));
    }

    #[tokio::test]
    async fn calendar_create_generates_id_and_schedules() {
        let response = calendar_create(Json(CalendarRequest {
            title: "Proposal review".to_string(),
            due: "2025-03-01".to_string(),
            assignees: None,
        }))
        .await;

        assert_eq!(response.title, "Proposal review");
        assert!(response.id.starts_with("cal_"));
        assert_eq!(response.status, "scheduled");
        assert!(response.assignees.is_empty());
    }

    #[tokio::test]
    async fn doc_source_builds_download_url() {
        let response = doc_source(Query(DocSourceParams {
            id: "tpl-42".to_string(),
        }))
        .await;

        assert_eq!(response.id, "tpl-42");
        assert_eq!(response.download_url, "https://example.com/docs/tpl-42");
        assert_eq!(response.doc_type, "template");
    }
}
