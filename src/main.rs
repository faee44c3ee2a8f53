use dotenvy::dotenv;

use domzzzon_leads::models::config::{ServerConfig, load_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting landing server on {}:{}",
        server_config.address,
        server_config.port
    );

    domzzzon_leads::run(server_config).await
}
