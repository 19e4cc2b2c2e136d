use log::error;
use rocket::serde::json::Json;
use rocket::serde::json::{json, Value};
use rocket::State;
use rocket_okapi::openapi;

use crate::models::reservation::{CreateReservationRequest, GetReservationResponse};
use crate::services::reservation_service::ReservationService;
use crate::utils::error::AppError;
use crate::validators::reservation_validator::validate_reservation;

/// Create a reservation and return its confirmation key
#[openapi(tag = "Reservations")]
#[post("/reservation", format = "json", data = "<request>")]
pub async fn create_reservation(
    request: Json<CreateReservationRequest>,
    reservation_service: &State<ReservationService>,
) -> Result<Json<Value>, AppError> {
    let request = request.into_inner();

    validate_reservation(&request).map_err(AppError::InvalidArguments)?;

    let reservation_key = reservation_service
        .create_reservation(request)
        .map_err(|err| {
            error!("Error occurred during creation of reservation: {}", err);
            err
        })?;

    Ok(Json(json!({ "reservationNumber": reservation_key })))
}

/// Look up a reservation by confirmation key
#[openapi(tag = "Reservations")]
#[get("/reservation/<reservation_key>")]
pub async fn get_reservation(
    reservation_key: String,
    reservation_service: &State<ReservationService>,
) -> Result<Json<GetReservationResponse>, AppError> {
    let reservation = reservation_service
        .get_reservation_by_key(&reservation_key)
        .map_err(|err| {
            error!(
                "Error occurred during search for reservation {}: {}",
                reservation_key, err
            );
            err
        })?;

    Ok(Json(GetReservationResponse::from(reservation)))
}
