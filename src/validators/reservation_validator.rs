use crate::models::reservation::CreateReservationRequest;

const ROUNDTRIP_FLIGHTS_COUNT: usize = 2;

/// Request-level validation of a reservation payload; collects every
/// violation rather than stopping at the first.
pub fn validate_reservation(reservation: &CreateReservationRequest) -> Result<(), Vec<String>> {
    let mut error_messages = Vec::new();

    if reservation.email.trim().is_empty() {
        error_messages.push("Please, provide email address.".to_string());
    }

    if reservation.credit_card.trim().is_empty() {
        error_messages.push("Please, provide credit card.".to_string());
    }

    if reservation.flights.is_empty() {
        error_messages.push("Please, provide flights to reserve.".to_string());

        return Err(error_messages);
    }

    if reservation.flights.len() == ROUNDTRIP_FLIGHTS_COUNT
        && reservation.flights[0].key == reservation.flights[1].key
    {
        error_messages.push("For roundtrip flights please, select different airplanes.".to_string());
    }

    if error_messages.is_empty() {
        Ok(())
    } else {
        Err(error_messages)
    }
}
