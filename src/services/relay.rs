//! Stateless relay forwarding lead messages to the managers' chat.
//!
//! Every invocation is answered: configuration, request and transport
//! failures are turned into plain-text responses, while the chat API's own
//! answer is passed through untouched.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::domain::types::{BotToken, ChatId, LeadMessage};
use crate::dto::relay::{RelayRequest, RelayResponse};
use crate::dto::telegram::SendMessageRequest;
use crate::gateway::NotificationGateway;
use crate::gateway::errors::GatewayError;

/// Secrets the relay needs, taken from the server configuration snapshot
/// and checked on every request.
#[derive(Clone, Debug, Default)]
pub struct RelaySettings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl RelaySettings {
    fn bot_token(&self) -> Result<BotToken, RelayError> {
        self.bot_token
            .as_deref()
            .and_then(|token| BotToken::new(token).ok())
            .ok_or(RelayError::MissingBotToken)
    }

    fn chat_id(&self) -> Result<ChatId, RelayError> {
        self.chat_id
            .as_deref()
            .and_then(|chat_id| ChatId::new(chat_id).ok())
            .ok_or(RelayError::MissingChatId)
    }
}

/// Reasons the relay answers on its own instead of forwarding.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Missing TELEGRAM_BOT_TOKEN env var")]
    MissingBotToken,

    #[error(
        "Missing TELEGRAM_CHAT_ID env var (numeric). For personal account: start the bot and set your user id as TELEGRAM_CHAT_ID."
    )]
    MissingChatId,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Empty message")]
    EmptyMessage,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl RelayError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed => 405,
            RelayError::InvalidJson(_) | RelayError::EmptyMessage => 400,
            RelayError::MissingBotToken | RelayError::MissingChatId | RelayError::Gateway(_) => {
                500
            }
        }
    }
}

impl From<RelayError> for RelayResponse {
    fn from(err: RelayError) -> Self {
        RelayResponse::text(err.status(), err.to_string())
    }
}

/// Handles one relay invocation.
pub async fn relay_message<G>(
    gateway: &G,
    settings: &RelaySettings,
    request: RelayRequest,
) -> RelayResponse
where
    G: NotificationGateway + ?Sized,
{
    match forward(gateway, settings, request).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                RelayError::MissingBotToken | RelayError::MissingChatId => {
                    log::error!("Relay is misconfigured: {err}");
                }
                RelayError::Gateway(inner) => {
                    log::error!("Failed to reach the notification API: {inner}");
                }
                _ => log::warn!("Rejected relay request: {err}"),
            }
            err.into()
        }
    }
}

async fn forward<G>(
    gateway: &G,
    settings: &RelaySettings,
    request: RelayRequest,
) -> Result<RelayResponse, RelayError>
where
    G: NotificationGateway + ?Sized,
{
    if request.method != "POST" {
        return Err(RelayError::MethodNotAllowed);
    }

    let token = settings.bot_token()?;

    let body = parse_body(request.body.as_deref())?;
    let message = LeadMessage::new(coerce_message(body.get("message")))
        .map_err(|_| RelayError::EmptyMessage)?;
    let form_id = body
        .get("formId")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let chat_id = settings.chat_id()?;

    let outgoing = SendMessageRequest::new(chat_id.into_inner(), message.into_inner());
    let response = RelayResponse::from(gateway.send_message(&token, &outgoing).await?);

    if response.is_success() {
        log::info!("Forwarded lead from form {form_id}");
    } else {
        log::warn!(
            "Notification API answered {} for lead from form {form_id}",
            response.status
        );
    }

    Ok(response)
}

/// An absent or empty body counts as an empty JSON object.
fn parse_body(body: Option<&str>) -> Result<Value, RelayError> {
    match body {
        None | Some("") => Ok(Value::Object(Map::new())),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|err| RelayError::InvalidJson(err.to_string()))
        }
    }
}

/// Turns the `message` field into text; falsy JSON values become empty.
fn coerce_message(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(other) => stringify(other),
    }
}

/// Script-style string conversion: arrays join their elements with `,`
/// (`null` elements are empty) and objects collapse to `[object Object]`.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => stringify_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn stringify_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}
