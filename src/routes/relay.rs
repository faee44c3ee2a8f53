use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::relay::{RelayRequest, RelayResponse};
use crate::gateway::NotificationGateway;
use crate::models::config::ServerConfig;
use crate::services::relay::relay_message;

/// Path of the relay below the `/api` scope.
pub const RELAY_PATH: &str = "/telegram";

/// Relay handler registered for every method; the service answers `405`
/// for anything but `POST`.
pub async fn telegram_relay(
    req: HttpRequest,
    body: web::Bytes,
    gateway: web::Data<dyn NotificationGateway>,
    server_config: web::Data<ServerConfig>,
) -> HttpResponse {
    let body = (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned());
    let request = RelayRequest::new(req.method().as_str(), body);

    let response = relay_message(gateway.get_ref(), &server_config.relay_settings(), request).await;

    into_http_response(response)
}

fn into_http_response(response: RelayResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = response.content_type {
        builder.insert_header((header::CONTENT_TYPE, content_type));
    }
    builder.body(response.body)
}
