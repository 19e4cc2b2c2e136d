pub mod flight_route;
pub mod reservation_route;
