use actix_web::{middleware::Logger, web, App, HttpServer};
use fridge_content::config::EnvConfig;
use fridge_content::db::postgres_service::PostgresService;
use fridge_content::i18n::MessageCatalog;
use fridge_content::routes::configure_routes;
use fridge_content::services::FridgeContentService;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("{}:{}", config.bind_address, config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );
    let catalog = Arc::new(MessageCatalog::bundled().map_err(io::Error::other)?);

    let service = web::Data::new(FridgeContentService::new(
        postgres_service.clone(),
        postgres_service,
        catalog,
    ));
    let default_locale = web::Data::new(config.default_locale.clone());

    info!("Starting server on {} (default locale {})", addr, config.default_locale);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .app_data(default_locale.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
