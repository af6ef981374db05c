use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw `/book` form submission. Missing fields are treated as empty text.
#[derive(Debug, Default, Clone)]
pub struct BookingForm {
    pub name: Option<String>,
    pub room_type: Option<String>,
    pub season: Option<String>,
    pub nights: Option<String>,
    pub guests: Option<String>,
    pub breakfast: Option<String>,
    pub promo_code: Option<String>,
}

impl BookingForm {
    /// Build from decoded form pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "room_type" => &mut form.room_type,
                "season" => &mut form.season,
                "nights" => &mut form.nights,
                "guests" => &mut form.guests,
                "breakfast" => &mut form.breakfast,
                "promo_code" => &mut form.promo_code,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

/// Normalized inputs to the pricing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    pub room_type: String,
    pub season: String,
    pub nights: i64,
    pub guests: i64,
    pub breakfast: bool,
    pub promo_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub name: String,
    pub room_type: String,
    pub season: String,
    pub nights: i64,
    pub guests: i64,
    pub breakfast: bool,
    pub promo_code: String,
    pub total_cost: f64,
    pub booked_at: DateTime<Utc>,
}

impl BookingRecord {
    pub fn new(name: String, request: PricingRequest, total_cost: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            room_type: request.room_type,
            season: request.season,
            nights: request.nights,
            guests: request.guests,
            breakfast: request.breakfast,
            promo_code: request.promo_code,
            total_cost,
            booked_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingRecord>,
    pub total_bookings: usize,
}
