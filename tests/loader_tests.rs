mod common;

use bikeshare::core::loader::Loader;
use bikeshare::errors::AppError;
use bikeshare::models::City;
use chrono::{Timelike, Weekday};
use common::fixture_dir;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_single_city_derives_fields() {
    let dir = fixture_dir();
    let ds = Loader::load(dir.path(), &[City::Chicago]).expect("load chicago");

    assert_eq!(ds.len(), 8);
    assert!(ds.columns.gender);
    assert!(ds.columns.birth_year);

    let first = &ds.trips[0];
    assert_eq!(first.id.as_deref(), Some("0"));
    assert_eq!(first.month, 3);
    assert_eq!(first.weekday, Weekday::Fri);
    assert_eq!(first.start_hour, 8);
    assert_eq!(first.duration, Some(600.0));
    assert_eq!(first.gender.as_deref(), Some("Male"));
    assert_eq!(first.birth_year, Some(1985));

    // empty cells are "no value"
    let third = &ds.trips[2];
    assert_eq!(third.gender, None);
    assert_eq!(third.birth_year, None);
}

#[test]
fn test_city_without_optional_columns() {
    let dir = fixture_dir();
    let ds = Loader::load(dir.path(), &[City::Washington]).expect("load washington");

    assert_eq!(ds.len(), 3);
    assert!(!ds.columns.gender);
    assert!(!ds.columns.birth_year);
    assert!(ds.trips.iter().all(|t| t.gender.is_none()));
    assert_eq!(ds.trips[0].duration, Some(1200.5));
    let end = ds.trips[0].end_time.expect("end time");
    assert_eq!(end.nanosecond(), 500_000_000);
}

#[test]
fn test_columns_found_by_name_in_any_order() {
    let dir = fixture_dir();
    let ds = Loader::load(dir.path(), &[City::NewYorkCity]).expect("load nyc");

    assert_eq!(ds.len(), 3);
    assert_eq!(ds.trips[0].id.as_deref(), Some("10"));
    assert_eq!(ds.trips[0].start_station, "Broadway");
    assert_eq!(ds.trips[1].user_type, None);
    assert_eq!(ds.trips[2].weekday, Weekday::Fri);
}

#[test]
fn test_multiple_cities_are_concatenated_in_selection_order() {
    let dir = fixture_dir();
    let ds = Loader::load(dir.path(), &[City::Washington, City::Chicago]).expect("load both");

    assert_eq!(ds.len(), 11);
    assert_eq!(ds.cities, vec![City::Washington, City::Chicago]);
    assert_eq!(ds.trips[0].start_station, "14th St");
    assert_eq!(ds.trips[3].start_station, "Clark St");
    // union of the column sets
    assert!(ds.columns.gender);
    assert!(ds.columns.birth_year);
    assert!(ds.trips[..3].iter().all(|t| t.gender.is_none()));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let err = Loader::load(dir.path(), &[City::Chicago]).unwrap_err();
    assert!(matches!(err, AppError::MissingDataFile { .. }));
    assert!(err.to_string().contains("Chicago"));
}

#[test]
fn test_missing_required_column() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("chicago.csv"),
        ",Start Time,End Time,Start Station,End Station\n0,2017-03-03 08:00:00,2017-03-03 08:10:00,A,B\n",
    )
    .expect("write");

    let err = Loader::load(dir.path(), &[City::Chicago]).unwrap_err();
    match err {
        AppError::MissingColumn { column, .. } => assert_eq!(column, "Trip Duration"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_timestamp_reports_row() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("washington.csv"),
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         0,2017-03-03 08:00:00,2017-03-03 08:10:00,600,A,B,Subscriber\n\
         1,yesterday,2017-03-03 08:10:00,600,A,B,Subscriber\n",
    )
    .expect("write");

    let err = Loader::load(dir.path(), &[City::Washington]).unwrap_err();
    match err {
        AppError::InvalidTimestamp { row, value } => {
            assert_eq!(row, 3);
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_partial_rows_are_kept() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("new_york_city.csv"),
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
         0,2017-03-03 08:00:00,2017-03-03 08:10:00,600,A,B,Subscriber,Male,1980.0\n\
         1,2017-03-03 09:00:00,,,,,,,\n\
         2,2017-03-03 10:00:00\n",
    )
    .expect("write");

    let ds = Loader::load(dir.path(), &[City::NewYorkCity]).expect("partial rows load");
    assert_eq!(ds.len(), 3);

    let blank = &ds.trips[1];
    assert_eq!(blank.start_hour, 9);
    assert_eq!(blank.end_time, None);
    assert_eq!(blank.duration, None);
    assert_eq!(blank.start_station, "");
    assert_eq!(blank.user_type, None);
    assert_eq!(blank.birth_year, None);

    let short = &ds.trips[2];
    assert_eq!(short.start_hour, 10);
    assert_eq!(short.duration, None);
    assert_eq!(short.gender, None);
}

#[test]
fn test_bad_duration_is_still_an_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("washington.csv"),
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         0,2017-03-03 08:00:00,2017-03-03 08:10:00,ten,A,B,Subscriber\n",
    )
    .expect("write");

    let err = Loader::load(dir.path(), &[City::Washington]).unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber { row: 2, .. }));
}

#[test]
fn test_csv_error_message_is_not_prefixed_twice() {
    let mut rdr = csv::Reader::from_reader("a,b\n1\n".as_bytes());
    let csv_err = rdr
        .records()
        .find_map(Result::err)
        .expect("unequal row lengths");
    let text = csv_err.to_string();

    let err = AppError::from(csv_err);
    assert_eq!(err.to_string(), text);
    assert!(!err.to_string().contains("CSV error: CSV error"));
}
