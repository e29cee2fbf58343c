use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "api",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Stubbed dashboard summary
#[utoipa::path(
    get,
    path = "/dashboard/summary",
    tag = "api",
    responses(
        (status = 200, description = "Fixed dashboard summary", body = DashboardSummaryResponse)
    )
)]
#[allow(dead_code)]
pub async fn dashboard_summary_doc() {}

/// Stubbed semantic search
#[utoipa::path(
    get,
    path = "/search",
    tag = "api",
    params(SearchQuery),
    responses(
        (status = 200, description = "Mock results echoing the query", body = SearchResponse),
        (status = 422, description = "Missing or empty 'q'", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn search_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        dashboard_summary_doc,
        search_doc,
    ),
    components(
        schemas(
            HealthResponse,
            MessageKind,
            MessageStub,
            DashboardSummary,
            DashboardSummaryResponse,
            SearchResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
