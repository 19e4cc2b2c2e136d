pub mod flight_repository;
pub mod passenger_repository;
pub mod reservation_repository;
