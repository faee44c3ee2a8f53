//! Outbound HTTP seams: the chat notification API and the relay endpoint.

use async_trait::async_trait;

use crate::domain::types::BotToken;
use crate::dto::relay::RelayPayload;
use crate::dto::telegram::{SendMessageRequest, UpstreamResponse};
use crate::gateway::errors::GatewayResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod relay;
pub mod telegram;

/// Delivers text messages to the managers' chat.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Sends one message, returning whatever the API answered.
    ///
    /// Non-2xx answers are returned as `Ok`; only a failed exchange is an error.
    async fn send_message(
        &self,
        token: &BotToken,
        request: &SendMessageRequest,
    ) -> GatewayResult<UpstreamResponse>;
}

/// Posts lead payloads to the relay endpoint.
#[async_trait]
pub trait RelayGateway: Send + Sync {
    /// Single attempt; any non-2xx answer is reported as [`errors::GatewayError::Rejected`].
    async fn send_lead(&self, payload: &RelayPayload) -> GatewayResult<()>;
}
