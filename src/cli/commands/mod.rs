pub mod raw_data;
pub mod station_stats;
pub mod time_stats;
pub mod trip_duration;
pub mod user_stats;
