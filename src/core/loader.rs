//! Reads city trip files into a [`Dataset`].
//!
//! Columns are looked up by header name, so files whose columns come in a
//! different order (or lack the optional ones) load the same way.

use crate::errors::{AppError, AppResult};
use crate::models::{City, Columns, Dataset, Trip, TripFields};
use crate::utils::time::parse_timestamp;
use csv::StringRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const TRIP_DURATION: &str = "Trip Duration";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Header positions inside one file.
struct Layout {
    id: Option<usize>,
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord, path: &Path) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
        };

        Ok(Self {
            id: headers
                .iter()
                .position(|h| h.trim().is_empty() || h.trim() == "Unnamed: 0"),
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: find(USER_TYPE),
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn columns(&self) -> Columns {
        Columns {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

pub struct Loader;

impl Loader {
    /// Path of a city's file inside `data_dir`.
    pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
        data_dir.join(city.file_name())
    }

    /// Load and concatenate the trips of every selected city, in selection order.
    pub fn load(data_dir: &Path, cities: &[City]) -> AppResult<Dataset> {
        let mut columns = Columns::default();
        let mut trips = Vec::new();

        for &city in cities {
            let (city_columns, mut city_trips) = Self::load_city(data_dir, city)?;
            columns = columns.union(city_columns);
            trips.append(&mut city_trips);
        }

        log_loaded(cities, trips.len());
        Ok(Dataset::new(cities.to_vec(), columns, trips))
    }

    /// Load a single city file.
    pub fn load_city(data_dir: &Path, city: City) -> AppResult<(Columns, Vec<Trip>)> {
        let path = Self::city_path(data_dir, city);
        if !path.is_file() {
            return Err(AppError::MissingDataFile {
                city: city.title().to_string(),
                path,
            });
        }

        // partial rows (short or with blank cells) still load
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .flexible(true)
            .from_path(&path)?;
        let layout = Layout::from_headers(rdr.headers()?, &path)?;

        let mut trips = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            // header is line 1
            trips.push(parse_record(&record, &layout, i + 2)?);
        }

        debug!(city = city.name(), rows = trips.len(), path = %path.display(), "loaded city file");
        Ok((layout.columns(), trips))
    }
}

fn log_loaded(cities: &[City], rows: usize) {
    let names: Vec<&str> = cities.iter().map(|c| c.name()).collect();
    info!(cities = ?names, rows, "dataset loaded");
}

fn parse_record(record: &StringRecord, layout: &Layout, row: usize) -> AppResult<Trip> {
    let text = |idx: usize| record.get(idx).unwrap_or("").to_string();
    let optional = |idx: Option<usize>| {
        idx.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let raw_start = record.get(layout.start_time).unwrap_or("");
    let start_time = parse_timestamp(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
        row,
        value: raw_start.to_string(),
    })?;

    let end_time = match optional(Some(layout.end_time)) {
        Some(v) => Some(parse_timestamp(&v).ok_or(AppError::InvalidTimestamp { row, value: v })?),
        None => None,
    };

    let duration = match optional(Some(layout.duration)) {
        Some(v) => Some(parse_number(&v, TRIP_DURATION, row)?),
        None => None,
    };

    let birth_year = match optional(layout.birth_year) {
        Some(v) => Some(parse_number(&v, BIRTH_YEAR, row)?.trunc() as i32),
        None => None,
    };

    if end_time.is_none() || duration.is_none() {
        warn!(row, "partial row: missing end time or trip duration");
    }

    Ok(Trip::new(TripFields {
        id: optional(layout.id),
        start_time,
        end_time,
        duration,
        start_station: text(layout.start_station),
        end_station: text(layout.end_station),
        user_type: optional(layout.user_type),
        gender: optional(layout.gender),
        birth_year,
    }))
}

fn parse_number(raw: &str, column: &str, row: usize) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::InvalidNumber {
            column: column.to_string(),
            row,
            value: raw.to_string(),
        })
}
