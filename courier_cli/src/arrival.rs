use std::fmt::Display;

use courier_routing::types::Weight;
use jiff::{SignedDuration, civil::Time};

const MINUTES_PER_DAY: i64 = 24 * 60;

pub const DEFAULT_DEPARTURE: Time = Time::constant(10, 0, 0, 0);

/// Arrival at the warehouse, one minute of travel per unit of route cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalTime {
    time: Time,
    days_later: i64,
}

impl ArrivalTime {
    pub fn estimate(departure: Time, travel_minutes: Weight) -> ArrivalTime {
        let travel_minutes = i64::try_from(travel_minutes).unwrap_or(i64::MAX);
        let departure_minutes = i64::from(departure.hour()) * 60 + i64::from(departure.minute());

        ArrivalTime {
            time: departure.wrapping_add(SignedDuration::from_mins(
                travel_minutes % MINUTES_PER_DAY,
            )),
            days_later: (departure_minutes + travel_minutes % MINUTES_PER_DAY) / MINUTES_PER_DAY
                + travel_minutes / MINUTES_PER_DAY,
        }
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn days_later(&self) -> i64 {
        self.days_later
    }

    /// Hour on a 12-hour clock, noon and midnight are 12.
    pub fn hour12(&self) -> i8 {
        match self.time.hour() % 12 {
            0 => 12,
            hour => hour,
        }
    }

    pub fn minute(&self) -> i8 {
        self.time.minute()
    }

    pub fn meridiem(&self) -> &'static str {
        if self.time.hour() >= 12 { "pm" } else { "am" }
    }
}

impl Display for ArrivalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.hour12(), self.minute(), self.meridiem())?;

        match self.days_later {
            0 => Ok(()),
            1 => write!(f, " (next day)"),
            days => write!(f, " (+{days} days)"),
        }
    }
}
