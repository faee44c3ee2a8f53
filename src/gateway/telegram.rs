//! Telegram Bot API client used by the relay.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::domain::types::BotToken;
use crate::dto::telegram::{SendMessageRequest, UpstreamResponse};
use crate::gateway::NotificationGateway;
use crate::gateway::errors::GatewayResult;

/// Public Bot API host.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Clone, Debug)]
pub struct TelegramGateway {
    client: Client,
    api_url: String,
}

impl TelegramGateway {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn send_message_url(&self, token: &BotToken) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, token.as_str())
    }
}

#[async_trait]
impl NotificationGateway for TelegramGateway {
    async fn send_message(
        &self,
        token: &BotToken,
        request: &SendMessageRequest,
    ) -> GatewayResult<UpstreamResponse> {
        let response = self
            .client
            .post(self.send_message_url(token))
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_token_and_strips_trailing_slash() {
        let gateway = TelegramGateway::new(Client::new(), "http://localhost:8081/");
        let token = BotToken::new("123:abc").unwrap();

        assert_eq!(
            gateway.send_message_url(&token),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }
}
