use std::collections::HashSet;

use indexmap::IndexMap;

use crate::models::passenger::Passenger;
use crate::services::passenger_service::PassengerService;
use crate::utils::error::{AppError, AppResult};

const MAX_BAGS_PER_PASSENGER: i16 = 5;
const MAX_BAGS_PER_FLIGHT: i32 = 50;
const MAX_SEAT_NUMBER: i32 = 50;

/// Checks a batch of passengers proposed for one flight against the seat
/// and baggage rules. Rules run in a fixed order and the first violation is
/// reported; callers rely on receiving exactly the first-triggered message.
#[derive(Clone)]
pub struct PassengerValidator {
    passenger_service: PassengerService,
}

impl PassengerValidator {
    pub fn new(passenger_service: PassengerService) -> Self {
        PassengerValidator { passenger_service }
    }

    pub fn validate_passengers(
        &self,
        flight_key: &str,
        passengers: Option<&[Passenger]>,
    ) -> AppResult<()> {
        let passengers = passengers.ok_or_else(|| {
            AppError::InvalidArgument("Please, provide passengers for the flight.".to_string())
        })?;

        if passengers
            .iter()
            .any(|x| x.bags > MAX_BAGS_PER_PASSENGER || x.bags < 0)
        {
            return Err(AppError::ValidationError(
                "Passenger can take only 0 - 5 bags.".to_string(),
            ));
        }

        // Single store fetch per validation; reused by the capacity rule.
        let passengers_on_flight = self
            .passenger_service
            .get_passengers_by_flight_key(flight_key)?;

        let proposed_seats: HashSet<&str> = passengers.iter().map(|x| x.seat.as_str()).collect();

        let booked_seats: Vec<&str> = passengers_on_flight
            .iter()
            .filter(|x| proposed_seats.contains(x.seat.as_str()))
            .map(|x| x.seat.as_str())
            .collect();

        if !booked_seats.is_empty() {
            return Err(AppError::ValidationError(format!(
                "One or more seats are already booked. Seats: #{}.",
                booked_seats.join(", ")
            )));
        }

        let necessary_bags: i32 = passengers.iter().map(|x| i32::from(x.bags)).sum();
        let registered_bags: i32 = passengers_on_flight.iter().map(|x| i32::from(x.bags)).sum();
        let total_bags = necessary_bags + registered_bags;

        if total_bags > MAX_BAGS_PER_FLIGHT {
            return Err(AppError::ValidationError(format!(
                "Unfortunately, there is no place for such number of bags: {}.",
                total_bags - MAX_BAGS_PER_FLIGHT
            )));
        }

        if passengers.iter().any(|x| {
            x.seat
                .parse::<i32>()
                .map_or(true, |seat| !(0..=MAX_SEAT_NUMBER).contains(&seat))
        }) {
            return Err(AppError::ValidationError(
                "Passengers can take seats only between '01' and '50'.".to_string(),
            ));
        }

        // Group by seat label, preserving first-observed order.
        let mut seats_usage: IndexMap<&str, usize> = IndexMap::new();
        for passenger in passengers {
            *seats_usage.entry(passenger.seat.as_str()).or_insert(0) += 1;
        }

        let duplicate_seats: Vec<&str> = seats_usage
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(&seat, _)| seat)
            .collect();

        if !duplicate_seats.is_empty() {
            return Err(AppError::ValidationError(format!(
                "One or more seats were selected more than one time. Seats: #{}.",
                duplicate_seats.join(", ")
            )));
        }

        Ok(())
    }
}
