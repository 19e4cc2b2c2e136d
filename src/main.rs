use std::fs;
use std::sync::Arc;

use dotenv::dotenv;

use flight_reservation_system::build_app;
use flight_reservation_system::models::flight::Flight;
use flight_reservation_system::repositories::flight_repository::FlightRepository;
use flight_reservation_system::repositories::passenger_repository::PassengerRepository;
use flight_reservation_system::repositories::reservation_repository::ReservationRepository;

#[rocket::launch]
fn rocket() -> _ {
    dotenv().ok();

    // Seed the flight catalog
    let data_path =
        std::env::var("FLIGHT_DATA").unwrap_or_else(|_| "data/flights.json".to_string());
    let data = fs::read_to_string(&data_path)
        .unwrap_or_else(|_| panic!("Failed to read flight data from {}", data_path));
    let flights: Vec<Flight> =
        serde_json::from_str(&data).expect("Failed to parse flight data");

    println!("Loaded {} flights from {}", flights.len(), data_path);

    build_app(
        Arc::new(FlightRepository::new(flights)),
        Arc::new(PassengerRepository::new()),
        Arc::new(ReservationRepository::new()),
    )
}
