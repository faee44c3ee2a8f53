#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::gateway::NotificationGateway;
#[cfg(feature = "server")]
use crate::gateway::telegram::TelegramGateway;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::calculator::api_v1_price;
#[cfg(feature = "server")]
use crate::routes::relay::{RELAY_PATH, telegram_relay};

pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
pub mod forms;
#[cfg(feature = "server")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let gateway: Arc<dyn NotificationGateway> = Arc::new(TelegramGateway::new(
        reqwest::Client::new(),
        server_config.telegram_api_url.clone(),
    ));
    let gateway = web::Data::from(gateway);

    if server_config.telegram_bot_token.is_none() || server_config.telegram_chat_id.is_none() {
        log::warn!("Relay secrets are not fully configured, lead submissions will fail");
    }

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_v1_price)
                    .service(web::resource(RELAY_PATH).route(web::route().to(telegram_relay))),
            )
            .service(Files::new("/", &server_config.static_dir).index_file("index.html"))
            .app_data(gateway.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
