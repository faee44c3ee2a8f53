use std::sync::{Arc, Mutex};

use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use async_trait::async_trait;

use domzzzon_leads::domain::types::BotToken;
use domzzzon_leads::dto::telegram::{SendMessageRequest, UpstreamResponse};
use domzzzon_leads::gateway::NotificationGateway;
use domzzzon_leads::gateway::errors::GatewayResult;
use domzzzon_leads::models::config::ServerConfig;
use domzzzon_leads::routes::calculator::api_v1_price;
use domzzzon_leads::routes::relay::{RELAY_PATH, telegram_relay};

/// Records every message and answers with a canned upstream response.
struct StubGateway {
    answer: UpstreamResponse,
    sent: Mutex<Vec<SendMessageRequest>>,
}

impl StubGateway {
    fn answering(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: UpstreamResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: body.to_string(),
            },
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<SendMessageRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationGateway for StubGateway {
    async fn send_message(
        &self,
        _token: &BotToken,
        request: &SendMessageRequest,
    ) -> GatewayResult<UpstreamResponse> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(self.answer.clone())
    }
}

fn server_config(token: Option<&str>) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        static_dir: "./assets".to_string(),
        telegram_api_url: "http://localhost".to_string(),
        telegram_bot_token: token.map(str::to_string),
        telegram_chat_id: Some("123456".to_string()),
    }
}

macro_rules! relay_app {
    ($gateway:expr, $config:expr) => {{
        let gateway: Arc<dyn NotificationGateway> = $gateway;
        test::init_service(
            App::new()
                .app_data(web::Data::from(gateway))
                .app_data(web::Data::new($config))
                .service(
                    web::scope("/api")
                        .service(api_v1_price)
                        .service(web::resource(RELAY_PATH).route(web::route().to(telegram_relay))),
                ),
        )
        .await
    }};
}

#[actix_web::test]
async fn get_on_relay_is_method_not_allowed() {
    let gateway = StubGateway::answering(200, "{}");
    let app = relay_app!(gateway.clone(), server_config(Some("123:abc")));

    let req = test::TestRequest::get().uri("/api/telegram").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(gateway.sent().is_empty());
}

#[actix_web::test]
async fn empty_post_is_bad_request() {
    let gateway = StubGateway::answering(200, "{}");
    let app = relay_app!(gateway.clone(), server_config(Some("123:abc")));

    let req = test::TestRequest::post().uri("/api/telegram").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.sent().is_empty());
}

#[actix_web::test]
async fn missing_token_is_internal_error_naming_it() {
    let gateway = StubGateway::answering(200, "{}");
    let app = relay_app!(gateway.clone(), server_config(None));

    let req = test::TestRequest::post()
        .uri("/api/telegram")
        .set_payload(r#"{"formId":"callback","message":"hello"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("TELEGRAM_BOT_TOKEN"));
}

#[actix_web::test]
async fn upstream_answer_is_relayed_verbatim() {
    let upstream_body = r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked by the user"}"#;
    let gateway = StubGateway::answering(403, upstream_body);
    let app = relay_app!(gateway.clone(), server_config(Some("123:abc")));

    let req = test::TestRequest::post()
        .uri("/api/telegram")
        .set_payload(r#"{"formId":"callback","message":" Телефон: 89937725252 "}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, upstream_body.as_bytes());

    let sent = gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, "123456");
    assert_eq!(sent[0].text, "Телефон: 89937725252");
    assert!(sent[0].disable_web_page_preview);
}

#[actix_web::test]
async fn price_endpoint_returns_breakdown() {
    let gateway = StubGateway::answering(200, "{}");
    let app = relay_app!(gateway, server_config(Some("123:abc")));

    let req = test::TestRequest::get()
        .uri("/api/v1/price?length=5&type=Bay&corners=0")
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["price"], 24700);
    assert_eq!(resp["price_per_extra_meter"], 4300);
    assert_eq!(resp["corner_surcharge"], 0);
}

#[actix_web::test]
async fn price_endpoint_rejects_too_many_corners() {
    let gateway = StubGateway::answering(200, "{}");
    let app = relay_app!(gateway, server_config(Some("123:abc")));

    let req = test::TestRequest::get()
        .uri("/api/v1/price?length=2&type=Angled&corners=12")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
