use crate::core::stats::TimeStats;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::models::calendar::{month_name, weekday_name};
use crate::ui::messages::{timing, warning};
use crate::utils::time::elapsed_secs;
use std::io::Write;
use std::time::Instant;

/// Most frequent month, weekday and start hour.
pub fn handle<W: Write>(dataset: &Dataset, out: &mut W) -> AppResult<()> {
    writeln!(
        out,
        "\nDisplaying the statistics on the most frequent times of travel according to your responds...\n"
    )?;
    let start = Instant::now();

    match TimeStats::compute(dataset) {
        Some(stats) => {
            let month = month_name(stats.month).unwrap_or("Unknown");
            writeln!(
                out,
                "For the selected filter, the month with the most travels is: {}.",
                month
            )?;
            writeln!(
                out,
                "For the selected filter, the popular day of the week is: {}.",
                weekday_name(stats.weekday)
            )?;
            writeln!(
                out,
                "For the selected filter, the popular start hour is: {}.",
                stats.hour
            )?;
        }
        None => warning(out, "No trips match the selected filters.")?,
    }

    timing(out, elapsed_secs(start))?;
    Ok(())
}
