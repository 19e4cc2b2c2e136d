use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Passenger as supplied in a reservation request and echoed in responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub name: String,
    pub bags: i16,
    pub seat: String,
}

/// Passenger as persisted: stamped with a store key and the owning flight.
#[derive(Debug, Clone)]
pub struct PassengerRecord {
    pub key: String,
    pub flight_id: String,
    pub name: String,
    pub bags: i16,
    pub seat: String,
}
