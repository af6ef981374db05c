use actix_cors::Cors;
use actix_web::web;

pub mod bookings;
pub mod catalog;
pub mod health;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(bookings::index))
        .route("/book", web::post().to(bookings::book))
        .route("/reset", web::post().to(bookings::reset))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allowed_methods(vec!["GET"])
                        .max_age(3600),
                )
                .route("/catalog", web::get().to(catalog::get_catalog))
                .route("/bookings", web::get().to(bookings::list_bookings)),
        );
}
