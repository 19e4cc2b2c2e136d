use log::error;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::models::flight::Flight;
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use crate::validators::flight_search_request_validator::validate_flight_search_request;

/// Search available flights, optionally as a round trip
#[openapi(tag = "Flights")]
#[get("/flights?<passengers>&<origin>&<destination>&<date_out>&<date_in>&<round_trip>")]
pub async fn search_flights(
    passengers: Option<i32>,
    origin: Option<String>,
    destination: Option<String>,
    date_out: Option<String>,
    date_in: Option<String>,
    round_trip: Option<bool>,
    flight_service: &State<FlightService>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let passengers = passengers.unwrap_or(0);
    let origin = origin.unwrap_or_default();
    let destination = destination.unwrap_or_default();
    let round_trip = round_trip.unwrap_or(false);

    let dates = validate_flight_search_request(
        passengers,
        &origin,
        &destination,
        date_out.as_deref(),
        date_in.as_deref(),
        round_trip,
    )
    .map_err(AppError::InvalidArguments)?;

    let flights = flight_service
        .search_available_flights(
            passengers,
            &origin,
            &destination,
            dates.date_out,
            dates.date_in,
            round_trip,
        )
        .map_err(|err| {
            error!("Error occurred during flight search: {}", err);
            err
        })?;

    Ok(Json(flights))
}
