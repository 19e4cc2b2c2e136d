use crate::models::flight::Flight;

/// Read-only access to the flight catalog.
pub trait FlightStore: Send + Sync {
    fn get_all(&self) -> Vec<Flight>;
    fn get(&self, key: &str) -> Option<Flight>;
}

/// In-memory flight catalog, seeded once at startup and never mutated.
pub struct FlightRepository {
    flights: Vec<Flight>,
}

impl FlightRepository {
    pub fn new(flights: Vec<Flight>) -> Self {
        FlightRepository { flights }
    }
}

impl FlightStore for FlightRepository {
    fn get_all(&self) -> Vec<Flight> {
        self.flights.clone()
    }

    fn get(&self, key: &str) -> Option<Flight> {
        self.flights.iter().find(|x| x.key == key).cloned()
    }
}
