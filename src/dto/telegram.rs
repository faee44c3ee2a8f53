//! Payloads of the chat notification API.

use serde::Serialize;

/// Body of the `sendMessage` call.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub disable_web_page_preview: bool,
}

impl SendMessageRequest {
    /// Plain text message with link previews disabled.
    #[must_use]
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            disable_web_page_preview: true,
        }
    }
}

/// Status, content type and raw body of an upstream response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}
