use super::calendar::weekday_name;
use super::city::City;
use chrono::{Month, Weekday};
use std::fmt;

/// City, month and weekday selections. Each list is non-empty once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub cities: Vec<City>,
    pub months: Vec<Month>,
    pub weekdays: Vec<Weekday>,
}

impl FilterSpec {
    pub fn new(cities: Vec<City>, months: Vec<Month>, weekdays: Vec<Weekday>) -> Self {
        Self {
            cities,
            months,
            weekdays,
        }
    }

    pub fn cities_label(&self) -> String {
        join(self.cities.iter().map(|c| c.name().to_string()))
    }

    pub fn months_label(&self) -> String {
        join(self.months.iter().map(|m| m.name().to_lowercase()))
    }

    pub fn weekdays_label(&self) -> String {
        join(self.weekdays.iter().map(|d| weekday_name(*d).to_lowercase()))
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " City(ies): {}", self.cities_label())?;
        writeln!(f, " Month(s): {}", self.months_label())?;
        write!(f, " Weekday(s): {}", self.weekdays_label())
    }
}
