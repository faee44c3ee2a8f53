//! HTTP client posting lead payloads to the relay endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::dto::relay::RelayPayload;
use crate::gateway::RelayGateway;
use crate::gateway::errors::{GatewayError, GatewayResult};

#[derive(Clone, Debug)]
pub struct HttpRelayGateway {
    client: Client,
    endpoint: String,
}

impl HttpRelayGateway {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayGateway for HttpRelayGateway {
    async fn send_lead(&self, payload: &RelayPayload) -> GatewayResult<()> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
