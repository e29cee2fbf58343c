use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use super::MessageStub;

/// Query parameters for search
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Semantic search query, at least one character
    pub q: String,
}

impl SearchQuery {
    /// Pick `q` out of raw query pairs. A repeated `q` resolves to its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .filter(|(key, _)| key == "q")
            .last()
            .map(|(_, q)| SearchQuery { q })
    }
}

/// API response for search
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub ok: bool,
    pub query: String,
    pub results: Vec<MessageStub>,
}
