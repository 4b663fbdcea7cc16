//! Aggregates computed over a filtered dataset.
//!
//! "Mode" everywhere means the most frequent value; on a tie, the value
//! encountered first wins.

use crate::models::Dataset;
use chrono::Weekday;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts in first-encounter order.
pub fn frequencies<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}

pub fn mode<T, I>(items: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in frequencies(items) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Counts sorted by descending frequency; ties keep first-encounter order.
pub fn value_counts<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = frequencies(items);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------
// Time
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TimeStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let trips = &dataset.trips;
        Some(Self {
            month: mode(trips.iter().map(|t| t.month))?,
            weekday: mode(trips.iter().map(|t| t.weekday))?,
            hour: mode(trips.iter().map(|t| t.start_hour))?,
        })
    }
}

// ---------------------------
// Stations
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub route: String,
}

impl StationStats {
    /// Blank station cells are skipped.
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let trips = &dataset.trips;
        let starts = trips.iter().map(|t| t.start_station.as_str()).filter(|s| !s.is_empty());
        let ends = trips.iter().map(|t| t.end_station.as_str()).filter(|s| !s.is_empty());
        Some(Self {
            start_station: mode(starts)?.to_string(),
            end_station: mode(ends)?.to_string(),
            route: mode(trips.iter().filter_map(|t| t.route()))?,
        })
    }
}

// ---------------------------
// Trip duration
// ---------------------------

/// Whole-second split of a total duration into d/h/m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Minutes/seconds split used for the mean duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanBreakdown {
    pub minutes: u64,
    pub seconds: u64,
}

impl MeanBreakdown {
    pub fn from_seconds(mean: f64) -> Self {
        let mean = mean.max(0.0);
        Self {
            minutes: (mean / 60.0).floor() as u64,
            seconds: (mean % 60.0).floor() as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// Trips that carry a duration; the mean divides by this.
    pub counted: usize,
}

impl DurationStats {
    /// Rows without a duration are left out of both the total and the mean.
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let (total, counted) = dataset
            .trips
            .iter()
            .filter_map(|t| t.duration)
            .fold((0.0_f64, 0_usize), |(sum, n), d| (sum + d, n + 1));
        if counted == 0 {
            return None;
        }
        Some(Self {
            total_seconds: total,
            mean_seconds: total / counted as f64,
            counted,
        })
    }

    pub fn total(&self) -> DurationBreakdown {
        DurationBreakdown::from_seconds(self.total_seconds.floor() as u64)
    }

    pub fn mean(&self) -> MeanBreakdown {
        MeanBreakdown::from_seconds(self.mean_seconds)
    }
}

// ---------------------------
// Users
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub popular: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when no selected city has a gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the column is absent or holds no value in the filtered rows.
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let trips = &dataset.trips;

        let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

        let genders = dataset
            .columns
            .gender
            .then(|| value_counts(trips.iter().filter_map(|t| t.gender.clone())));

        let birth_years = if dataset.columns.birth_year {
            let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
            match (years.iter().min(), years.iter().max(), mode(years.iter().copied())) {
                (Some(&earliest), Some(&most_recent), Some(popular)) => Some(BirthYearStats {
                    earliest,
                    most_recent,
                    popular,
                }),
                _ => None,
            }
        } else {
            None
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}
