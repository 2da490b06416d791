use serde::{Deserialize, Serialize};

/// Body of a chat request. The prompt is optional at the wire level so the
/// relay can reject its absence with a 400 instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
