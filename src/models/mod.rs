pub mod bookings;
pub mod error;
pub mod room;
