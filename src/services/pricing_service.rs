use crate::models::{
    bookings::PricingRequest,
    error::BookingError,
    room::{PricingConfig, RoomCatalogEntry},
};

const BREAKFAST_PER_GUEST: f64 = 12.0;
const PROMO_CODE: &str = "SAVE10";
const PROMO_THRESHOLD: f64 = 300.0;
const PROMO_FACTOR: f64 = 0.90;
const LONG_STAY_NIGHTS: i64 = 5;
const LONG_STAY_FACTOR: f64 = 0.95;

pub struct PricingService;

impl PricingService {
    fn room<'a>(
        config: &'a PricingConfig,
        room_type: &str,
    ) -> Result<&'a RoomCatalogEntry, BookingError> {
        config
            .rooms
            .get(room_type)
            .ok_or_else(|| BookingError::unknown(room_type))
    }

    /// Check nights and guest count for a room type.
    ///
    /// Nights are checked before the room lookup, so a non-positive night count
    /// is `Ok(false)` even for an unknown room. Guests must satisfy
    /// `1 <= guests < max_guests`; the upper bound is exclusive.
    pub fn validate(
        config: &PricingConfig,
        room_type: &str,
        nights: i64,
        guests: i64,
    ) -> Result<bool, BookingError> {
        if nights <= 0 {
            return Ok(false);
        }

        let max_guests = Self::room(config, room_type)?.max_guests;

        Ok(guests >= 1 && guests < max_guests)
    }

    /// Total cost for an already validated request, rounded to cents.
    ///
    /// Steps run in a fixed order on one running subtotal: base rate times
    /// season, flat breakfast surcharge per guest (not per night), SAVE10 above
    /// 300, then the long-stay discount. Both discounts can apply together.
    pub fn calculate_total(
        config: &PricingConfig,
        request: &PricingRequest,
    ) -> Result<f64, BookingError> {
        let nightly_rate = Self::room(config, &request.room_type)?.nightly_rate;
        let multiplier = config
            .seasons
            .multiplier(&request.season)
            .ok_or_else(|| BookingError::unknown(&request.season))?;

        let mut subtotal = nightly_rate * request.nights as f64 * multiplier;

        if request.breakfast {
            subtotal += BREAKFAST_PER_GUEST * request.guests as f64;
        }

        if request.promo_code == PROMO_CODE && subtotal > PROMO_THRESHOLD {
            subtotal *= PROMO_FACTOR;
        }

        if request.nights >= LONG_STAY_NIGHTS {
            subtotal *= LONG_STAY_FACTOR;
        }

        Ok(round_to_cents(subtotal))
    }
}

/// Half away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
