use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::flight::{Flight, MAX_FLIGHT_PASSENGERS_NUMBER};
use crate::models::reservation::ReservationFlight;
use crate::repositories::flight_repository::FlightStore;
use crate::services::passenger_service::PassengerService;
use crate::utils::error::{AppError, AppResult};

#[derive(Clone)]
pub struct FlightService {
    flight_store: Arc<dyn FlightStore>,
    passenger_service: PassengerService,
}

impl FlightService {
    pub fn new(flight_store: Arc<dyn FlightStore>, passenger_service: PassengerService) -> Self {
        FlightService {
            flight_store,
            passenger_service,
        }
    }

    /// Searches the catalog for flights that can still take `passengers`
    /// seats on the requested route and date. A round trip unions the
    /// outbound matches with a second leg searched in the opposite
    /// direction on `date_in`.
    pub fn search_available_flights(
        &self,
        passengers: i32,
        origin: &str,
        destination: &str,
        date_out: NaiveDate,
        date_in: Option<NaiveDate>,
        round_trip: bool,
    ) -> AppResult<Vec<Flight>> {
        let mut available_flights = self.search_leg(passengers, origin, destination, date_out)?;

        let date_in = match (round_trip, date_in) {
            (false, _) | (true, None) => return Ok(available_flights),
            (true, Some(date_in)) => date_in,
        };

        let return_flights = self.search_leg(passengers, destination, origin, date_in)?;

        // Set union: the two legs are disjoint in practice since the route
        // is swapped, but a flight already present is not added twice.
        for flight in return_flights {
            if !available_flights.iter().any(|x| x.key == flight.key) {
                available_flights.push(flight);
            }
        }

        Ok(available_flights)
    }

    fn search_leg(
        &self,
        passengers: i32,
        origin: &str,
        destination: &str,
        date_out: NaiveDate,
    ) -> AppResult<Vec<Flight>> {
        if passengers <= 0 {
            return Err(AppError::InvalidArgument(
                "Please, provide number of passengers greater than 0.".to_string(),
            ));
        }

        if origin.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, provide origin of the flight.".to_string(),
            ));
        }

        if destination.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Please, provide destination of the flight.".to_string(),
            ));
        }

        let mut matches = Vec::new();

        for flight in self.flight_store.get_all() {
            let registered = self
                .passenger_service
                .get_passengers_by_flight_key(&flight.key)?
                .len();

            // Time of day is ignored; only the calendar date must match.
            if registered + passengers as usize <= MAX_FLIGHT_PASSENGERS_NUMBER
                && flight.origin.eq_ignore_ascii_case(origin)
                && flight.destination.eq_ignore_ascii_case(destination)
                && flight.time.date() == date_out
            {
                matches.push(flight);
            }
        }

        Ok(matches)
    }

    /// Registers the proposed passengers of every flight in the request.
    pub fn create_passengers_for_flights(&self, flights: &[ReservationFlight]) -> AppResult<()> {
        for flight in flights {
            let passengers = flight.passengers.as_deref().unwrap_or_default();
            self.passenger_service
                .create_passengers(&flight.key, passengers)?;
        }

        Ok(())
    }
}
