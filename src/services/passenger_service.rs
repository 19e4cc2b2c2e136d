use std::sync::Arc;

use chrono::Utc;

use crate::models::passenger::{Passenger, PassengerRecord};
use crate::repositories::passenger_repository::PassengerStore;
use crate::utils::error::{AppError, AppResult};

#[derive(Clone)]
pub struct PassengerService {
    passenger_store: Arc<dyn PassengerStore>,
}

impl PassengerService {
    pub fn new(passenger_store: Arc<dyn PassengerStore>) -> Self {
        PassengerService { passenger_store }
    }

    /// Returns every passenger registered on the given flight. Fetches the
    /// store exactly once per call and filters in memory.
    pub fn get_passengers_by_flight_key(&self, flight_key: &str) -> AppResult<Vec<Passenger>> {
        if flight_key.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, provide flight key.".to_string(),
            ));
        }

        let passengers = self
            .passenger_store
            .get_all()
            .into_iter()
            .filter(|x| x.flight_id == flight_key)
            .map(|x| Passenger {
                name: x.name,
                bags: x.bags,
                seat: x.seat,
            })
            .collect();

        Ok(passengers)
    }

    /// Registers the passengers on the flight, stamping each record with the
    /// owning flight key and a store key. A store that does not hand back a
    /// usable key makes the whole reservation fail; already-registered
    /// passengers are not rolled back.
    pub fn create_passengers(&self, flight_key: &str, passengers: &[Passenger]) -> AppResult<()> {
        if flight_key.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, provide flight key.".to_string(),
            ));
        }

        for passenger in passengers {
            // No ORM generates ids here, so a timestamp serves as the key.
            let record = PassengerRecord {
                key: Utc::now().timestamp_micros().to_string(),
                flight_id: flight_key.to_string(),
                name: passenger.name.clone(),
                bags: passenger.bags,
                seat: passenger.seat.clone(),
            };

            let attempted_key = record.key.clone();
            let created_key = self.passenger_store.create(record);

            if created_key.trim().is_empty() {
                return Err(AppError::RegistrationFailed(format!(
                    "Error occurred during creation of passenger with key: {}.",
                    attempted_key
                )));
            }
        }

        Ok(())
    }
}
