pub mod flight_search_request_validator;
pub mod passenger_validator;
pub mod reservation_validator;
