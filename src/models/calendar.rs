//! Month and weekday domains used by the filters.
//!
//! The trip files only cover January to June, so the month domain stops there.

use chrono::{Month, Weekday};

pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in prompt order (the week starts on Sunday).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn month_domain() -> Vec<String> {
    MONTHS.iter().map(|m| m.name().to_lowercase()).collect()
}

pub fn weekday_domain() -> Vec<String> {
    WEEKDAYS
        .iter()
        .map(|d| weekday_name(*d).to_lowercase())
        .collect()
}

pub fn month_from_input(s: &str) -> Option<Month> {
    let s = s.trim().to_lowercase();
    MONTHS.into_iter().find(|m| m.name().to_lowercase() == s)
}

pub fn weekday_from_input(s: &str) -> Option<Weekday> {
    let s = s.trim().to_lowercase();
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).to_lowercase() == s)
}

/// English month name for a 1-based month number.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

/// Title-case weekday name, e.g. "Friday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
