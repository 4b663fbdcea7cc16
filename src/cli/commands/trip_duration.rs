use crate::core::stats::DurationStats;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::{timing, warning};
use crate::utils::formatting::{mean_duration, total_duration};
use crate::utils::time::elapsed_secs;
use std::io::Write;
use std::time::Instant;

/// Total and mean trip duration.
pub fn handle<W: Write>(dataset: &Dataset, out: &mut W) -> AppResult<()> {
    writeln!(out, "\nCalculating Trip Duration according to your responds...\n")?;
    let start = Instant::now();

    match DurationStats::compute(dataset) {
        Some(stats) => {
            writeln!(
                out,
                "For the selected filters, the total travel time is : {}.",
                total_duration(&stats.total())
            )?;
            writeln!(
                out,
                "For the selected filters, the mean travel time is : {}.",
                mean_duration(&stats.mean())
            )?;
        }
        None if dataset.is_empty() => warning(out, "No trips match the selected filters.")?,
        None => warning(out, "No trip durations are recorded for the selected filters.")?,
    }

    timing(out, elapsed_secs(start))?;
    Ok(())
}
