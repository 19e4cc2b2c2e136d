use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::flight::Flight;
use crate::models::passenger::Passenger;

/// One flight within a reservation request, carrying the passengers
/// proposed for it. `passengers` stays optional so an absent list can be
/// told apart from an empty one during validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFlight {
    pub key: String,
    pub passengers: Option<Vec<Passenger>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub credit_card: String,
    #[serde(default)]
    pub flights: Vec<ReservationFlight>,
}

/// Reservation as persisted: contact fields plus the resolved catalog
/// snapshot of each flight. Passengers are not duplicated here; they are
/// re-resolved from the passenger store on read.
#[derive(Debug, Clone)]
pub struct ReservationRecord {
    pub key: String,
    pub email: String,
    pub credit_card: String,
    pub flights: Vec<Flight>,
}

/// Hydrated reservation returned by lookup, with passengers re-attached
/// per flight.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub key: String,
    pub email: String,
    pub credit_card: String,
    pub flights: Vec<ReservationFlight>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetReservationFlightResponse {
    pub key: String,
    pub passengers: Vec<Passenger>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetReservationResponse {
    pub reservation_number: String,
    pub email: String,
    pub flights: Vec<GetReservationFlightResponse>,
}

impl From<Reservation> for GetReservationResponse {
    fn from(reservation: Reservation) -> Self {
        GetReservationResponse {
            reservation_number: reservation.key,
            email: reservation.email,
            flights: reservation
                .flights
                .into_iter()
                .map(|flight| GetReservationFlightResponse {
                    key: flight.key,
                    passengers: flight.passengers.unwrap_or_default(),
                })
                .collect(),
        }
    }
}
