use axum::{extract::{Query, rejection::QueryRejection}, http::StatusCode, Json};
use crate::models::{error_response, ApiError, MessageKind, MessageStub, SearchQuery, SearchResponse};
use tracing::{debug, warn};

/// Search endpoint
///
/// Returns three mock results that echo the query back in their subjects.
pub async fn search(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(StatusCode, Json<SearchResponse>), ApiError> {

    let Query(pairs) = query.map_err(|e| {
        warn!("Rejected search query string: {}", e);
        error_response(StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid query string: {}", e.body_text()))
    })?;

    let q = match SearchQuery::from_pairs(pairs) {
        Some(SearchQuery { q }) if !q.is_empty() => q,
        Some(_) => {
            warn!("Search requested with empty 'q'");
            return Err(error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Query parameter 'q' must be at least 1 character long",
            ));
        }
        None => {
            warn!("Search requested without 'q'");
            return Err(error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Query parameter 'q' is required",
            ));
        }
    };

    debug!("Search requested for '{}'", q);
    let results = vec![
        MessageStub::new("s1", format!("Results for: {} — invoice from ACME", q), MessageKind::Bill),
        MessageStub::new("s2", format!("Results for: {} — follow up with Alex", q), MessageKind::Action),
        MessageStub::new("s3", format!("Results for: {} — subscription receipt", q), MessageKind::Subscription),
    ];

    Ok((
        StatusCode::OK,
        Json(SearchResponse {
            ok: true,
            query: q,
            results,
        }),
    ))
}
