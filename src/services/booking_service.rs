use log::info;

use crate::models::{
    bookings::{BookingForm, BookingRecord, PricingRequest},
    error::BookingError,
    room::{PricingConfig, CURRENCY},
};
use crate::services::{booking_ledger::BookingLedger, pricing_service::PricingService};

/// Result of an accepted booking, ready to be shown to the guest.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub record: BookingRecord,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Booking confirmed. Total cost: {}{:.2}",
            CURRENCY, self.record.total_cost
        )
    }

    /// Shown for any non-empty code, recognized or not.
    pub fn promo_notice(&self) -> Option<String> {
        if self.record.promo_code.is_empty() {
            None
        } else {
            Some(format!("Promo applied: {}", self.record.promo_code))
        }
    }
}

pub struct BookingService;

impl BookingService {
    /// Normalize, validate and price a raw form, then append it to the ledger.
    ///
    /// The ledger is only touched once every check has passed.
    pub fn submit(
        config: &PricingConfig,
        ledger: &BookingLedger,
        form: BookingForm,
    ) -> Result<BookingConfirmation, BookingError> {
        let name = normalize(&form.name);
        let room_type = normalize(&form.room_type).to_lowercase();
        let season = normalize(&form.season).to_lowercase();
        let promo_code = normalize(&form.promo_code).to_uppercase();

        let nights = parse_int_field("nights", &form.nights)?;
        let guests = parse_int_field("guests", &form.guests)?;
        let breakfast = parse_yes_no_field(&form.breakfast);

        if name.is_empty() {
            return Err(BookingError::EmptyName);
        }

        if !PricingService::validate(config, &room_type, nights, guests)? {
            return Err(BookingError::ValidationFailed);
        }

        let request = PricingRequest {
            room_type,
            season,
            nights,
            guests,
            breakfast,
            promo_code,
        };
        let total = PricingService::calculate_total(config, &request)?;

        let record = BookingRecord::new(name, request, total);
        info!(
            "Accepted booking {} for {}: {} room, {} night(s), {}{:.2}",
            record.id, record.name, record.room_type, record.nights, CURRENCY, total
        );
        ledger.accept(record.clone());

        Ok(BookingConfirmation { record })
    }

    pub fn reset(ledger: &BookingLedger) {
        let cleared = ledger.total_count();
        ledger.reset_all();
        info!("Cleared {} booking(s)", cleared);
    }
}

fn normalize(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_string()
}

/// Only a zero-length field defaults to 0; anything else must parse.
fn parse_int_field(field: &'static str, raw: &Option<String>) -> Result<i64, BookingError> {
    let raw = raw.as_deref().unwrap_or("");
    if raw.is_empty() {
        return Ok(0);
    }

    raw.trim()
        .parse::<i64>()
        .map_err(|_| BookingError::MalformedNumericField {
            field,
            value: raw.to_string(),
        })
}

fn parse_yes_no_field(raw: &Option<String>) -> bool {
    normalize(raw).eq_ignore_ascii_case("yes")
}
