use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::services::booking_ledger::BookingLedger;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    version: String,
    bookings: usize,
}

pub async fn health_check(ledger: web::Data<BookingLedger>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bookings: ledger.total_count(),
    })
}
