//! Raw-data paging state and sorting.

use crate::models::{Dataset, Trip};
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::StartTime,
        SortKey::EndTime,
        SortKey::TripDuration,
        SortKey::StartStation,
        SortKey::EndStation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::StartTime => "Start Time",
            SortKey::EndTime => "End Time",
            SortKey::TripDuration => "Trip Duration",
            SortKey::StartStation => "Start Station",
            SortKey::EndStation => "End Station",
        }
    }

    /// Menu code ("1".."5") → key.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SortKey::ALL.get(i).copied())
    }

    /// Ordering of two trips on this key. `None` when either side has no
    /// value, so the caller can keep blanks last in both directions.
    fn compare(&self, a: &Trip, b: &Trip) -> Option<Ordering> {
        match self {
            SortKey::StartTime => Some(a.start_time.cmp(&b.start_time)),
            SortKey::EndTime => Some(a.end_time?.cmp(&b.end_time?)),
            SortKey::TripDuration => Some(a.duration?.total_cmp(&b.duration?)),
            SortKey::StartStation => Some(a.start_station.cmp(&b.start_station)),
            SortKey::EndStation => Some(a.end_station.cmp(&b.end_station)),
        }
    }

    fn is_blank(&self, trip: &Trip) -> bool {
        match self {
            SortKey::EndTime => trip.end_time.is_none(),
            SortKey::TripDuration => trip.duration.is_none(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(SortOrder::Ascending),
            "2" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

/// Row indices of `dataset` in viewer order (stable, blanks last).
pub fn sorted_indices(dataset: &Dataset, key: SortKey, order: SortOrder) -> Vec<usize> {
    let trips = &dataset.trips;
    let mut indices: Vec<usize> = (0..trips.len()).collect();
    indices.sort_by(|&a, &b| {
        let (a, b) = (&trips[a], &trips[b]);
        match key.compare(a, b) {
            Some(ord) if order == SortOrder::Descending => ord.reverse(),
            Some(ord) => ord,
            None => key.is_blank(a).cmp(&key.is_blank(b)),
        }
    });
    indices
}

/// Position of the next unread row in the raw-data viewer, plus the sort
/// chosen when the current pass started.
///
/// The sort only affects the viewer; reports keep reading the dataset in
/// load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerState {
    pub offset: usize,
    pub sort: Option<(SortKey, SortOrder)>,
    // row indices for the sorted pass, built once in `restart`
    order: Option<Vec<usize>>,
}

impl PagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start a new pass over `dataset` from the first row.
    pub fn restart(&mut self, dataset: &Dataset, sort: Option<(SortKey, SortOrder)>) {
        self.offset = 0;
        self.sort = sort;
        self.order = sort.map(|(key, order)| sorted_indices(dataset, key, order));
    }

    pub fn has_history(&self) -> bool {
        self.offset > 0
    }

    pub fn is_exhausted(&self, dataset: &Dataset) -> bool {
        self.offset >= dataset.len()
    }

    /// Rows of the next page in viewer order; moves the offset past them
    /// (never beyond the end).
    pub fn next_page<'a>(&mut self, dataset: &'a Dataset, page_size: usize) -> Vec<&'a Trip> {
        let start = self.offset.min(dataset.len());
        let end = start.saturating_add(page_size).min(dataset.len());
        self.offset = end;

        match &self.order {
            Some(order) => order
                .get(start..end)
                .unwrap_or_default()
                .iter()
                .filter_map(|&i| dataset.trips.get(i))
                .collect(),
            None => dataset.trips[start..end].iter().collect(),
        }
    }
}
