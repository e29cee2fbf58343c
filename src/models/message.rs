use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category a message was triaged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Bill,
    Action,
    Subscription,
}

/// Lightweight reference to a message, as shown in lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageStub {
    pub id: String,
    pub subject: String,
    pub kind: MessageKind,
}

impl MessageStub {
    pub fn new(id: &str, subject: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: id.to_string(),
            subject: subject.into(),
            kind,
        }
    }
}
