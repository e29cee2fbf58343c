use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::MessageStub;

/// Counts per category plus the most relevant messages
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub action_required: u32,
    pub bills: u32,
    pub subscriptions: u32,
    pub top: Vec<MessageStub>,
}

/// API response for the dashboard summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryResponse {
    pub ok: bool,
    pub payload: DashboardSummary,
}
