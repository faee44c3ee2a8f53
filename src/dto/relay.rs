//! Relay endpoint request and response shapes.

use serde::{Deserialize, Serialize};

use crate::domain::lead::FormId;
use crate::dto::telegram::UpstreamResponse;

/// JSON body posted by the lead forms to the relay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub form_id: FormId,
    pub message: String,
}

/// Incoming relay invocation, independent of the hosting runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Raw request body, `None` when the request carried none.
    pub body: Option<String>,
}

impl RelayRequest {
    #[must_use]
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    /// Convenience constructor for a `POST` with the given body.
    #[must_use]
    pub fn post(body: impl Into<String>) -> Self {
        Self::new("POST", Some(body.into()))
    }
}

/// Response produced by the relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RelayResponse {
    /// Plain-text response generated by the relay itself.
    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<UpstreamResponse> for RelayResponse {
    fn from(upstream: UpstreamResponse) -> Self {
        Self {
            status: upstream.status,
            content_type: upstream.content_type,
            body: upstream.body,
        }
    }
}
