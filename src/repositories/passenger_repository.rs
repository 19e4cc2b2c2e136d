use std::sync::RwLock;

use crate::models::passenger::PassengerRecord;

/// Append-only store of registered passengers, scoped by flight key.
pub trait PassengerStore: Send + Sync {
    fn get_all(&self) -> Vec<PassengerRecord>;

    /// Appends the record and returns the key it was stored under. A blank
    /// return value signals that the record was not created.
    fn create(&self, passenger: PassengerRecord) -> String;
}

pub struct PassengerRepository {
    passengers: RwLock<Vec<PassengerRecord>>,
}

impl PassengerRepository {
    pub fn new() -> Self {
        PassengerRepository {
            passengers: RwLock::new(Vec::new()),
        }
    }
}

impl Default for PassengerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PassengerStore for PassengerRepository {
    fn get_all(&self) -> Vec<PassengerRecord> {
        self.passengers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn create(&self, passenger: PassengerRecord) -> String {
        let key = passenger.key.clone();
        self.passengers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(passenger);
        key
    }
}
