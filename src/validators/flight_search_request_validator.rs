use chrono::NaiveDate;

const MAX_SEARCH_PASSENGERS: i32 = 50;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates parsed out of a valid search request.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedSearchDates {
    pub date_out: NaiveDate,
    pub date_in: Option<NaiveDate>,
}

/// Request-level validation of the flight search query. Unlike the
/// passenger rules, every violation is collected so the caller sees all of
/// them at once.
pub fn validate_flight_search_request(
    passengers: i32,
    origin: &str,
    destination: &str,
    date_out: Option<&str>,
    date_in: Option<&str>,
    round_trip: bool,
) -> Result<ValidatedSearchDates, Vec<String>> {
    let mut error_messages = Vec::new();

    if !(0..=MAX_SEARCH_PASSENGERS).contains(&passengers) {
        error_messages.push("Please, provide number of passengers between 0 and 50.".to_string());
    }

    if origin.trim().is_empty() {
        error_messages.push("Please, provide origin of the flight.".to_string());
    }

    if destination.trim().is_empty() {
        error_messages.push("Please, provide destination of the flight.".to_string());
    }

    let parsed_date_out =
        date_out.and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok());

    if parsed_date_out.is_none() {
        error_messages.push("Please, provide valid date out.".to_string());
    }

    let parsed_date_in = date_in.and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok());

    if round_trip {
        let date_in_is_valid = match (parsed_date_in, parsed_date_out) {
            (Some(date_in), Some(date_out)) => date_in >= date_out,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if !date_in_is_valid {
            error_messages.push("Please, provide valid date in.".to_string());
        }
    }

    match (error_messages.is_empty(), parsed_date_out) {
        (true, Some(date_out)) => Ok(ValidatedSearchDates {
            date_out,
            date_in: parsed_date_in,
        }),
        _ => Err(error_messages),
    }
}
