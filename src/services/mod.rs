pub mod booking_ledger;
pub mod booking_service;
pub mod pricing_service;
