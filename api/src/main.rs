use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use fg_api::app::{build_state, configure_routes};
use fg_api::middleware::cors::create_cors;
use fg_infra::sms::SmsServiceAdapter;
use fg_infra::store::{MemorySessionStore, MemoryTokenStore};
use fg_shared::config::{ServerConfig, SmsConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting FolioGate API server");

    let server_config = ServerConfig::from_env();
    let sms_config = SmsConfig::from_env();
    info!("SMS provider: {}", sms_config.provider);

    let state = web::Data::new(build_state(&sms_config));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_origin = server_config.cors_origin.clone();

    HttpServer::new(move || {
        let cors = create_cors(&cors_origin);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(
                configure_routes::<SmsServiceAdapter, MemorySessionStore, MemoryTokenStore>,
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
