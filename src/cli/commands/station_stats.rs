use crate::core::stats::StationStats;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{timing, warning};
use crate::utils::time::elapsed_secs;
use std::io::Write;
use std::time::Instant;

pub fn handle<W: Write>(dataset: &Dataset, out: &mut W) -> AppResult<()> {
    writeln!(
        out,
        "\nCalculating The Most Popular Stations and Trip according to your responds...\n"
    )?;
    let start = Instant::now();

    match StationStats::compute(dataset) {
        Some(stats) => {
            writeln!(
                out,
                "For the selected filters, the popular start station is: {}",
                stats.start_station
            )?;
            writeln!(
                out,
                "For the selected filters, the popular end station is: {}",
                stats.end_station
            )?;
            writeln!(
                out,
                "For the selected filters, the popular start-end combination of stations is: {}",
                stats.route
            )?;
        }
        None => warning(out, "No trips match the selected filters.")?,
    }

    timing(out, elapsed_secs(start))?;
    Ok(())
}
