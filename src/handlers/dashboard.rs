use axum::Json;
use crate::models::{DashboardSummary, DashboardSummaryResponse, MessageKind, MessageStub};
use tracing::debug;

/// Dashboard summary endpoint
///
/// Returns fixed counts and top messages until a real aggregation exists.
/// The shape mirrors what the extension panel renders.
pub async fn dashboard_summary() -> Json<DashboardSummaryResponse> {
    debug!("Dashboard summary requested");
    Json(DashboardSummaryResponse {
        ok: true,
        payload: DashboardSummary {
            action_required: 3,
            bills: 2,
            subscriptions: 5,
            top: vec![
                MessageStub::new("msg1", "Invoice #123 due", MessageKind::Bill),
                MessageStub::new("msg2", "Reminder: reply to Alex", MessageKind::Action),
                MessageStub::new("msg3", "Spotify subscription renewed", MessageKind::Subscription),
            ],
        },
    })
}
