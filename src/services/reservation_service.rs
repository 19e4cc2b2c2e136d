use std::sync::Arc;

use crate::models::reservation::{
    CreateReservationRequest, Reservation, ReservationFlight, ReservationRecord,
};
use crate::repositories::flight_repository::FlightStore;
use crate::repositories::reservation_repository::ReservationStore;
use crate::services::flight_service::FlightService;
use crate::services::passenger_service::PassengerService;
use crate::utils::error::{AppError, AppResult};
use crate::utils::key_generator;
use crate::validators::passenger_validator::PassengerValidator;

pub struct ReservationService {
    reservation_store: Arc<dyn ReservationStore>,
    flight_store: Arc<dyn FlightStore>,
    passenger_service: PassengerService,
    passenger_validator: PassengerValidator,
    flight_service: FlightService,
}

impl ReservationService {
    pub fn new(
        reservation_store: Arc<dyn ReservationStore>,
        flight_store: Arc<dyn FlightStore>,
        passenger_service: PassengerService,
        passenger_validator: PassengerValidator,
        flight_service: FlightService,
    ) -> Self {
        ReservationService {
            reservation_store,
            flight_store,
            passenger_service,
            passenger_validator,
            flight_service,
        }
    }

    /// Creates a reservation and returns its confirmation key.
    ///
    /// Every flight is validated and resolved against the catalog before any
    /// passenger is registered, so a failing flight aborts the whole request
    /// without a partial commit.
    pub fn create_reservation(&self, reservation: CreateReservationRequest) -> AppResult<String> {
        if reservation.flights.is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, select flights to reserve.".to_string(),
            ));
        }

        let mut resolved_flights = Vec::with_capacity(reservation.flights.len());

        for flight in &reservation.flights {
            self.passenger_validator
                .validate_passengers(&flight.key, flight.passengers.as_deref())?;

            let catalog_flight = self.flight_store.get(&flight.key).ok_or_else(|| {
                AppError::NotFound(format!("Flight with key: {} was not found.", flight.key))
            })?;

            resolved_flights.push(catalog_flight);
        }

        self.flight_service
            .create_passengers_for_flights(&reservation.flights)?;

        let key = self.generate_reservation_key();

        self.reservation_store.create(ReservationRecord {
            key,
            email: reservation.email,
            credit_card: reservation.credit_card,
            flights: resolved_flights,
        })
    }

    /// Looks up a reservation and re-attaches each flight's passengers from
    /// the passenger store.
    pub fn get_reservation_by_key(&self, reservation_key: &str) -> AppResult<Reservation> {
        if reservation_key.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, provide reservation key.".to_string(),
            ));
        }

        let record = self.reservation_store.get(reservation_key).ok_or_else(|| {
            AppError::NotFound(format!(
                "Reservation with key: {} was not found.",
                reservation_key
            ))
        })?;

        let mut flights = Vec::with_capacity(record.flights.len());

        for flight in &record.flights {
            let passengers = self
                .passenger_service
                .get_passengers_by_flight_key(&flight.key)?;

            flights.push(ReservationFlight {
                key: flight.key.clone(),
                passengers: Some(passengers),
            });
        }

        Ok(Reservation {
            key: record.key,
            email: record.email,
            credit_card: record.credit_card,
            flights,
        })
    }

    // Generate keys until one is free in the store. The key space (26^3 *
    // 900) is large relative to expected load, so the loop terminates fast.
    fn generate_reservation_key(&self) -> String {
        let mut key = key_generator::generate_key();

        while self.reservation_store.key_exists(&key) {
            key = key_generator::generate_key();
        }

        key
    }
}
