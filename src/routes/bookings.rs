use std::panic::{catch_unwind, AssertUnwindSafe};

use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use log::{error, warn};

use crate::middleware::flash::{FlashMessage, FlashMessages, FLASH_COOKIE};
use crate::models::{
    bookings::{BookingForm, BookingListResponse},
    error::BookingError,
    room::PricingConfig,
};
use crate::services::{
    booking_ledger::BookingLedger,
    booking_service::{BookingConfirmation, BookingService},
};
use crate::views::IndexPage;

fn redirect_home(flashes: &FlashMessages) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(flashes.cookie())
        .finish()
}

pub async fn index(
    req: HttpRequest,
    config: web::Data<PricingConfig>,
    ledger: web::Data<BookingLedger>,
    flashes: FlashMessages,
) -> impl Responder {
    let bookings = ledger.display_list();

    let page = IndexPage {
        config: &config,
        bookings: &bookings,
        total_bookings: ledger.total_count(),
        flashes: &flashes,
    };

    let mut response = HttpResponse::Ok();
    response.content_type("text/html; charset=utf-8");
    if req.cookie(FLASH_COOKIE).is_some() {
        response.cookie(FlashMessages::removal_cookie());
    }
    response.body(page.render())
}

/// Run a submission so that a panic becomes [`BookingError::Unexpected`]
/// instead of tearing down the worker.
fn run_guarded<F>(submit: F) -> Result<BookingConfirmation, BookingError>
where
    F: FnOnce() -> Result<BookingConfirmation, BookingError>,
{
    catch_unwind(AssertUnwindSafe(submit))
        .unwrap_or_else(|_| Err(BookingError::Unexpected("booking handler panicked".to_string())))
}

/// Undecodable bodies are handled like an empty form. Messages still pending
/// from an earlier redirect are kept ahead of the new ones.
pub async fn book(
    config: web::Data<PricingConfig>,
    ledger: web::Data<BookingLedger>,
    pending: FlashMessages,
    form: Option<web::Form<Vec<(String, String)>>>,
) -> impl Responder {
    let form = form
        .map(|f| BookingForm::from_pairs(f.into_inner()))
        .unwrap_or_default();
    let mut flashes = pending;

    match run_guarded(|| BookingService::submit(&config, &ledger, form)) {
        Ok(confirmation) => {
            flashes.push(FlashMessage::success(confirmation.message()));
            if let Some(notice) = confirmation.promo_notice() {
                flashes.push(FlashMessage::info(notice));
            }
        }
        Err(err) => {
            match &err {
                BookingError::Unexpected(_) => error!("Booking failed: {}", err),
                _ => warn!("Booking rejected: {}", err),
            }
            flashes.push(FlashMessage::error(err.user_message()));
        }
    }

    redirect_home(&flashes)
}

pub async fn reset(ledger: web::Data<BookingLedger>, pending: FlashMessages) -> impl Responder {
    BookingService::reset(&ledger);

    let mut flashes = pending;
    flashes.push(FlashMessage::info("All bookings cleared."));
    redirect_home(&flashes)
}

pub async fn list_bookings(ledger: web::Data<BookingLedger>) -> impl Responder {
    HttpResponse::Ok().json(BookingListResponse {
        bookings: ledger.display_list(),
        total_bookings: ledger.total_count(),
    })
}
