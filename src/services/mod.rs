pub mod flight_service;
pub mod passenger_service;
pub mod reservation_service;
