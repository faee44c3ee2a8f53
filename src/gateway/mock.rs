//! Mock gateway implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::types::BotToken;
use crate::dto::relay::RelayPayload;
use crate::dto::telegram::{SendMessageRequest, UpstreamResponse};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{NotificationGateway, RelayGateway};

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationGateway for Notifier {
        async fn send_message(
            &self,
            token: &BotToken,
            request: &SendMessageRequest,
        ) -> GatewayResult<UpstreamResponse>;
    }
}

mock! {
    pub Relay {}

    #[async_trait]
    impl RelayGateway for Relay {
        async fn send_lead(&self, payload: &RelayPayload) -> GatewayResult<()>;
    }
}
