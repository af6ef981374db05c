use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use hotel_booking_api::{
    config::AppConfig, models::room::PricingConfig, routes,
    services::booking_ledger::BookingLedger,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let pricing = web::Data::new(PricingConfig::default());
    let ledger = web::Data::new(BookingLedger::new());

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pricing.clone())
            .app_data(ledger.clone())
            .configure(routes::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
