#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod swagger;
pub mod utils;
pub mod validators;

use std::sync::Arc;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;

use crate::repositories::flight_repository::FlightStore;
use crate::repositories::passenger_repository::PassengerStore;
use crate::repositories::reservation_repository::ReservationStore;
use crate::services::flight_service::FlightService;
use crate::services::passenger_service::PassengerService;
use crate::services::reservation_service::ReservationService;
use crate::validators::passenger_validator::PassengerValidator;

/// Wires the services over the given stores and builds the rocket
/// application. Used by `main` with the seeded catalog and by the route
/// tests with stores prepared per test.
pub fn build_app(
    flight_store: Arc<dyn FlightStore>,
    passenger_store: Arc<dyn PassengerStore>,
    reservation_store: Arc<dyn ReservationStore>,
) -> Rocket<Build> {
    let passenger_service = PassengerService::new(passenger_store);
    let flight_service = FlightService::new(flight_store.clone(), passenger_service.clone());
    let passenger_validator = PassengerValidator::new(passenger_service.clone());
    let reservation_service = ReservationService::new(
        reservation_store,
        flight_store,
        passenger_service,
        passenger_validator,
        flight_service.clone(),
    );

    rocket::build()
        .manage(flight_service)
        .manage(reservation_service)
        .mount(
            "/api",
            openapi_get_routes![
                routes::flight_route::search_flights,
                routes::reservation_route::create_reservation,
                routes::reservation_route::get_reservation,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger::swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
