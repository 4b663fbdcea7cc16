use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for bikeshare.
/// Every flag is optional: without any, the program reads the city files
/// from the configured data directory and asks everything interactively.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter trips by city, month and weekday and print statistics",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.bikeshare/bikeshare.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Stop after this many invalid answers to the same question
    #[arg(long = "max-attempts", value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Log level (error, warn, info, debug, trace); logs go to stderr
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
