use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bike trip as read from a city file.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Option<String>,              // ⇔ unnamed index column
    pub start_time: NaiveDateTime,       // ⇔ "Start Time"
    pub end_time: Option<NaiveDateTime>, // ⇔ "End Time" (blank in partial rows)
    pub duration: Option<f64>,           // ⇔ "Trip Duration" (seconds)
    pub start_station: String,           // ⇔ "Start Station"
    pub end_station: String,             // ⇔ "End Station"
    pub user_type: Option<String>,       // ⇔ "User Type"
    pub gender: Option<String>,          // ⇔ "Gender" (not every city)
    pub birth_year: Option<i32>,         // ⇔ "Birth Year" (not every city)

    // derived from start_time once, at load
    pub month: u32,
    pub weekday: Weekday,
    pub start_hour: u32,
}

/// Raw field values of a trip, before the derived columns are added.
#[derive(Debug, Clone)]
pub struct TripFields {
    pub id: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn new(fields: TripFields) -> Self {
        let start = fields.start_time;
        Self {
            id: fields.id,
            start_time: start,
            end_time: fields.end_time,
            duration: fields.duration,
            start_station: fields.start_station,
            end_station: fields.end_station,
            user_type: fields.user_type,
            gender: fields.gender,
            birth_year: fields.birth_year,
            month: start.month(),
            weekday: start.weekday(),
            start_hour: start.hour(),
        }
    }

    /// "Start - End" station pair; `None` when either station is blank.
    pub fn route(&self) -> Option<String> {
        if self.start_station.is_empty() || self.end_station.is_empty() {
            return None;
        }
        Some(format!("{} - {}", self.start_station, self.end_station))
    }
}
