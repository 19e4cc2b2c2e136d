pub mod flight;
pub mod passenger;
pub mod reservation;
