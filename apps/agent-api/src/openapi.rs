use utoipa::OpenApi;

/// Agent API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::agent::root,
        crate::api::agent::ask,
        crate::api::agent::checklist,
        crate::api::agent::calendar_create,
        crate::api::agent::doc_source,
        crate::api::index::insert,
        crate::api::index::search,
    ),
    components(schemas(
        crate::api::agent::RootInfo,
        crate::api::agent::AskRequest,
        crate::api::agent::AskResponse,
        crate::api::agent::Citation,
        crate::api::agent::ChecklistRequest,
        crate::api::agent::ChecklistResponse,
        crate::api::agent::ChecklistItem,
        crate::api::agent::CalendarRequest,
        crate::api::agent::CalendarResponse,
        crate::api::agent::DocSourceResponse,
        crate::api::index::InsertRequest,
        crate::api::index::InsertReply,
        crate::api::index::SearchRequest,
        crate::api::index::SearchReply,
        domain_flows::PointInput,
        domain_flows::SearchHit,
    )),
    info(
        title = "SE Agent API",
        version = "0.1.0",
        description = "Process Q&A stubs plus a vector index gateway over Qdrant"
    ),
    tags(
        (name = "agent", description = "Stub agent endpoints"),
        (name = "index", description = "Vector index insert/search")
    )
)]
pub struct ApiDoc;
