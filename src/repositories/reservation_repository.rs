use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::reservation::ReservationRecord;
use crate::utils::error::{AppError, AppResult};

/// Store of persisted reservations, keyed by confirmation key.
pub trait ReservationStore: Send + Sync {
    fn key_exists(&self, key: &str) -> bool;

    /// Insert-if-absent: a reservation whose key is already taken is
    /// rejected rather than overwritten.
    fn create(&self, reservation: ReservationRecord) -> AppResult<String>;

    /// Lookup is case-insensitive on the confirmation key.
    fn get(&self, key: &str) -> Option<ReservationRecord>;
}

pub struct ReservationRepository {
    reservations: RwLock<HashMap<String, ReservationRecord>>,
}

impl ReservationRepository {
    pub fn new() -> Self {
        ReservationRepository {
            reservations: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore for ReservationRepository {
    fn key_exists(&self, key: &str) -> bool {
        self.reservations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(key)
    }

    fn create(&self, reservation: ReservationRecord) -> AppResult<String> {
        if reservation.key.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Reservation must have a key.".to_string(),
            ));
        }

        let mut reservations = self
            .reservations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if reservations.contains_key(&reservation.key) {
            return Err(AppError::InvalidArgument(format!(
                "Reservation with key: {} already exists.",
                reservation.key
            )));
        }

        let key = reservation.key.clone();
        reservations.insert(key.clone(), reservation);

        Ok(key)
    }

    fn get(&self, key: &str) -> Option<ReservationRecord> {
        self.reservations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .find(|x| x.key.eq_ignore_ascii_case(key))
            .cloned()
    }
}
