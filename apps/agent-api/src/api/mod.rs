use axum::{
    Router,
    routing::{get, post},
};

pub mod agent;
pub mod index;

/// Creates the API routes with state applied.
///
/// Takes a reference to AppState; handlers share cheap Arc clones of the
/// index backend.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(agent::root))
        .route("/v1/ask", post(agent::ask))
        .route("/v1/checklist", post(agent::checklist))
        .route("/v1/calendar/create", post(agent::calendar_create))
        .route("/v1/docs/source", get(agent::doc_source))
        .route("/v1/index/insert", post(index::insert))
        .route("/v1/index/search", post(index::search))
        .with_state(state.clone())
}
