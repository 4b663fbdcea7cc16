//! Month / weekday filtering.
//!
//! A multi-value selection is the concatenation of one filtered pass per
//! requested value: rows come out grouped by the value they matched, in the
//! order the values were requested, and keep their source order inside each
//! group.

use crate::models::{Dataset, FilterSpec, Trip};
use chrono::{Month, Weekday};
use tracing::debug;

pub struct TripFilter;

impl TripFilter {
    /// Month filter, then weekday filter on its result.
    pub fn apply(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
        let by_month = Self::by_months(dataset, &spec.months);
        let filtered = Self::by_weekdays(&by_month, &spec.weekdays);

        debug!(
            loaded = dataset.len(),
            after_month = by_month.len(),
            after_weekday = filtered.len(),
            "filters applied"
        );
        filtered
    }

    pub fn by_months(dataset: &Dataset, months: &[Month]) -> Dataset {
        let trips = concat_per_value(&dataset.trips, months, |trip, month| {
            trip.month == month.number_from_month()
        });
        dataset.with_trips(trips)
    }

    pub fn by_weekdays(dataset: &Dataset, weekdays: &[Weekday]) -> Dataset {
        let trips =
            concat_per_value(&dataset.trips, weekdays, |trip, day| trip.weekday == *day);
        dataset.with_trips(trips)
    }
}

fn concat_per_value<V>(
    trips: &[Trip],
    values: &[V],
    matches: impl Fn(&Trip, &V) -> bool,
) -> Vec<Trip> {
    let mut out = Vec::new();
    for value in values {
        out.extend(trips.iter().filter(|trip| matches(trip, value)).cloned());
    }
    out
}
