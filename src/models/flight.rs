use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A flight in the catalog. Records are seeded at startup and never
/// modified; remaining capacity is derived from the passenger store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub key: String,
    pub origin: String,
    pub destination: String,
    pub time: NaiveDateTime,
}

/// Maximum number of passengers a single flight can carry.
pub const MAX_FLIGHT_PASSENGERS_NUMBER: usize = 50;
