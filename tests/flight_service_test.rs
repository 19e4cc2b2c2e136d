use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use flight_reservation_system::{
    models::{flight::Flight, passenger::Passenger},
    repositories::{
        flight_repository::FlightRepository, passenger_repository::PassengerRepository,
    },
    services::{flight_service::FlightService, passenger_service::PassengerService},
    utils::error::AppError,
};

struct FlightServiceContext {
    flight_service: FlightService,
    passenger_service: PassengerService,
}

impl FlightServiceContext {
    fn new(flights: Vec<Flight>) -> Self {
        let passenger_service = PassengerService::new(Arc::new(PassengerRepository::new()));
        let flight_service = FlightService::new(
            Arc::new(FlightRepository::new(flights)),
            passenger_service.clone(),
        );

        FlightServiceContext {
            flight_service,
            passenger_service,
        }
    }

    fn register_passengers(&self, flight_key: &str, count: usize) -> Result<(), AppError> {
        let passengers: Vec<Passenger> = (1..=count)
            .map(|i| Passenger {
                name: format!("Passenger {}", i),
                bags: 1,
                seat: format!("{:02}", i),
            })
            .collect();

        self.passenger_service
            .create_passengers(flight_key, &passengers)
    }
}

fn flight(key: &str, origin: &str, destination: &str, time: &str) -> Flight {
    Flight {
        key: key.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        time: NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S")
            .expect("invalid test flight time"),
    }
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("invalid test date")
}

#[test]
fn search_rejects_non_positive_passenger_count() {
    let ctx = FlightServiceContext::new(vec![]);

    for passengers in [0, -1] {
        let result = ctx.flight_service.search_available_flights(
            passengers,
            "DUBLIN",
            "LONDON",
            date("2019-04-16"),
            None,
            false,
        );

        match result {
            Err(AppError::InvalidArgument(msg)) => {
                assert_eq!(msg, "Please, provide number of passengers greater than 0.")
            }
            other => panic!("Expected InvalidArgument, got {:?}", other.map(|f| f.len())),
        }
    }
}

#[test]
fn search_rejects_blank_origin_and_destination() {
    let ctx = FlightServiceContext::new(vec![]);

    let result = ctx.flight_service.search_available_flights(
        2,
        "  ",
        "LONDON",
        date("2019-04-16"),
        None,
        false,
    );
    match result {
        Err(AppError::InvalidArgument(msg)) => {
            assert_eq!(msg, "Please, provide origin of the flight.")
        }
        other => panic!("Expected InvalidArgument, got {:?}", other.map(|f| f.len())),
    }

    let result = ctx.flight_service.search_available_flights(
        2,
        "DUBLIN",
        "",
        date("2019-04-16"),
        None,
        false,
    );
    match result {
        Err(AppError::InvalidArgument(msg)) => {
            assert_eq!(msg, "Please, provide destination of the flight.")
        }
        other => panic!("Expected InvalidArgument, got {:?}", other.map(|f| f.len())),
    }
}

#[test]
fn search_matches_route_case_insensitively_on_calendar_date() -> Result<(), AppError> {
    let ctx = FlightServiceContext::new(vec![
        flight("Flight0001", "DUBLIN", "LONDON", "2019-04-16T07:00:00"),
        flight("Flight0002", "DUBLIN", "LONDON", "2019-04-16T23:30:00"),
        flight("Flight0003", "DUBLIN", "LONDON", "2019-04-17T07:00:00"),
        flight("Flight0004", "LONDON", "DUBLIN", "2019-04-16T07:00:00"),
    ]);

    let flights = ctx.flight_service.search_available_flights(
        2,
        "dublin",
        "London",
        date("2019-04-16"),
        None,
        false,
    )?;

    let keys: Vec<&str> = flights.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Flight0001", "Flight0002"]);

    Ok(())
}

#[test]
fn search_excludes_flights_over_capacity() -> Result<(), AppError> {
    let ctx = FlightServiceContext::new(vec![
        flight("Flight0001", "DUBLIN", "LONDON", "2019-04-16T07:00:00"),
        flight("Flight0002", "DUBLIN", "LONDON", "2019-04-16T11:30:00"),
    ]);

    // 45 already on board: room for 5 more but not for 6.
    ctx.register_passengers("Flight0001", 45)?;

    let flights = ctx.flight_service.search_available_flights(
        6,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        None,
        false,
    )?;
    let keys: Vec<&str> = flights.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Flight0002"]);

    let flights = ctx.flight_service.search_available_flights(
        5,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        None,
        false,
    )?;
    assert_eq!(flights.len(), 2);

    Ok(())
}

#[test]
fn round_trip_search_unions_outbound_and_return_legs() -> Result<(), AppError> {
    let ctx = FlightServiceContext::new(vec![
        flight("Flight0001", "DUBLIN", "LONDON", "2019-04-16T07:00:00"),
        flight("Flight0004", "LONDON", "DUBLIN", "2019-04-20T08:45:00"),
        flight("Flight0005", "LONDON", "DUBLIN", "2019-04-21T08:45:00"),
    ]);

    let flights = ctx.flight_service.search_available_flights(
        2,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        Some(date("2019-04-20")),
        true,
    )?;

    let keys: Vec<&str> = flights.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Flight0001", "Flight0004"]);

    Ok(())
}

#[test]
fn one_way_search_ignores_date_in() -> Result<(), AppError> {
    let ctx = FlightServiceContext::new(vec![
        flight("Flight0001", "DUBLIN", "LONDON", "2019-04-16T07:00:00"),
        flight("Flight0004", "LONDON", "DUBLIN", "2019-04-20T08:45:00"),
    ]);

    let flights = ctx.flight_service.search_available_flights(
        2,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        Some(date("2019-04-20")),
        false,
    )?;
    let keys: Vec<&str> = flights.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Flight0001"]);

    // Round trip without a return date falls back to the outbound leg only.
    let flights = ctx.flight_service.search_available_flights(
        2,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        None,
        true,
    )?;
    let keys: Vec<&str> = flights.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Flight0001"]);

    Ok(())
}

#[test]
fn search_finds_flight_with_existing_passengers() -> Result<(), AppError> {
    let ctx = FlightServiceContext::new(vec![flight(
        "Flight0002",
        "DUBLIN",
        "LONDON",
        "2019-04-16T11:30:00",
    )]);

    ctx.register_passengers("Flight0002", 2)?;

    let flights = ctx.flight_service.search_available_flights(
        10,
        "DUBLIN",
        "LONDON",
        date("2019-04-16"),
        None,
        false,
    )?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].key, "Flight0002");
    assert_eq!(flights[0].origin, "DUBLIN");
    assert_eq!(flights[0].destination, "LONDON");

    Ok(())
}
