use jiff::civil::Time;

/// Departure time of the delivery, e.g. "10", "10:30" or "10:30:00".
pub fn parse_departure(input: &str) -> Result<Time, String> {
    let input = input.trim();

    if let Ok(hour) = input.parse::<i8>() {
        return Time::new(hour, 0, 0, 0).map_err(|error| error.to_string());
    }

    if let Some((hour, minute)) = input.split_once(':')
        && let (Ok(hour), Ok(minute)) = (hour.parse::<i8>(), minute.parse::<i8>())
    {
        return Time::new(hour, minute, 0, 0).map_err(|error| error.to_string());
    }

    if let Ok(time) = input.parse::<Time>() {
        return Ok(time);
    }

    Err(format!("Invalid departure time: {input}"))
}
