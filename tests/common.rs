#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::models::{City, Columns, Dataset, Trip, TripFields};
use bikeshare::utils::time::parse_timestamp;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-03 08:05:00,2017-03-03 08:15:00,600,Clark St,Lake St,Subscriber,Male,1985.0
1,2017-03-03 08:30:00,2017-03-03 08:40:00,600,Clark St,Lake St,Subscriber,Female,1990.0
2,2017-03-10 17:10:00,2017-03-10 17:30:00,1200,Wood St,Clark St,Customer,,
3,2017-03-06 09:00:00,2017-03-06 09:05:00,300,Lake St,Wood St,Subscriber,Male,1985.0
4,2017-01-06 08:00:00,2017-01-06 08:15:00,900,Wood St,Lake St,Subscriber,Male,1970.0
5,2017-06-02 12:00:00,2017-06-02 12:07:30,450,Clark St,Wood St,Customer,Female,1999.0
6,2017-06-05 07:45:00,2017-06-05 08:46:40,3700,Lake St,Clark St,Subscriber,Male,1985.0
7,2017-03-10 08:20:00,2017-03-10 08:21:40,100,Clark St,Wood St,Subscriber,Female,1990.0
";

/// Same columns, different order, one row without user data.
pub const NEW_YORK_CITY_CSV: &str = "\
Start Time,,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-03 18:00:00,10,2017-03-03 18:10:00,600,Broadway,5th Ave,Subscriber,Male,1980.0
2017-03-06 18:00:00,11,2017-03-06 18:05:00,300,5th Ave,Broadway,,,
2017-05-05 09:00:00,12,2017-05-05 09:11:40,700,Broadway,5th Ave,Customer,Female,1992.0
";

/// No Gender / Birth Year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-03 10:00:00,2017-03-03 10:20:00.500,1200.5,14th St,K St,Subscriber
1,2017-03-03 10:30:00,2017-03-03 10:45:00.250,900.25,K St,14th St,Customer
2,2017-04-07 11:00:00,2017-04-07 11:05:00,300,14th St,K St,Subscriber
";

/// Temp directory holding the three city files.
pub fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write_fixtures(dir.path());
    dir
}

pub fn write_fixtures(dir: &Path) {
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
}

/// Binary pointed at `dir`, with an empty config file so the user's own
/// configuration is never read.
pub fn bikeshare_in(dir: &Path) -> Command {
    let config_path = dir.join("bikeshare.conf");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("write config");
    }
    let config = config_path.to_string_lossy().to_string();
    let data_dir = dir.to_string_lossy().to_string();

    let mut cmd = bikeshare();
    cmd.args(["--config", &config, "--data-dir", &data_dir]);
    cmd
}

pub fn trip(start: &str, duration: f64, from: &str, to: &str) -> Trip {
    let start_time = parse_timestamp(start).expect("valid timestamp");
    Trip::new(TripFields {
        id: None,
        start_time,
        end_time: Some(start_time),
        duration: Some(duration),
        start_station: from.to_string(),
        end_station: to.to_string(),
        user_type: Some("Subscriber".to_string()),
        gender: None,
        birth_year: None,
    })
}

pub fn dataset(trips: Vec<Trip>) -> Dataset {
    Dataset::new(vec![City::Chicago], Columns::default(), trips)
}
