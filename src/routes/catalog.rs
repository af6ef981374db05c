use actix_web::{web, HttpResponse, Responder};

use crate::models::room::PricingConfig;

pub async fn get_catalog(config: web::Data<PricingConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
