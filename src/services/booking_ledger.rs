use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::bookings::BookingRecord;

/// In-memory, append-only list of accepted bookings.
///
/// Lives for the process lifetime and is only emptied by [`reset_all`].
/// Every operation is a single short critical section, so a poisoned lock
/// still guards a consistent vector and is recovered rather than propagated.
///
/// [`reset_all`]: BookingLedger::reset_all
#[derive(Debug, Default)]
pub struct BookingLedger {
    records: Mutex<Vec<BookingRecord>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<BookingRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn accept(&self, record: BookingRecord) {
        self.records().push(record);
    }

    /// Every record except the most recently accepted one.
    pub fn display_list(&self) -> Vec<BookingRecord> {
        let records = self.records();
        match records.split_last() {
            Some((_, earlier)) => earlier.to_vec(),
            None => Vec::new(),
        }
    }

    pub fn total_count(&self) -> usize {
        self.records().len()
    }

    pub fn reset_all(&self) {
        self.records().clear();
    }
}
