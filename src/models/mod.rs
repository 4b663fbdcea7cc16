pub mod calendar;
pub mod city;
pub mod dataset;
pub mod filter_spec;
pub mod trip;

pub use city::City;
pub use dataset::{Columns, Dataset};
pub use filter_spec::FilterSpec;
pub use trip::{Trip, TripFields};
