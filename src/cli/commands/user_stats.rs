use crate::core::stats::UserStats;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::models::city::titles;
use crate::ui::messages::{timing, warning};
use crate::utils::formatting::counts_block;
use crate::utils::time::elapsed_secs;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

/// User type, gender and birth year statistics.
///
/// Gender and birth year are not recorded by every city: a missing column is
/// reported with a message naming the city and the report goes on.
pub fn handle<W: Write>(dataset: &Dataset, out: &mut W) -> AppResult<()> {
    writeln!(out, "\nCalculating User Stats according to your responds...\n")?;
    let start = Instant::now();

    if dataset.is_empty() {
        warning(out, "No trips match the selected filters.")?;
    }

    let stats = UserStats::compute(dataset);
    let city = titles(&dataset.cities);

    writeln!(out, "Distribution for user types:")?;
    writeln!(out, "{}", counts_block(&stats.user_types))?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "\nDistribution for each gender:")?;
            writeln!(out, "{}", counts_block(genders))?;
        }
        None => {
            debug!(city = %city, "no gender column");
            writeln!(
                out,
                "\nWe're sorry! There is no data of user genders for {}.",
                city
            )?;
        }
    }

    match &stats.birth_years {
        Some(years) => {
            writeln!(
                out,
                "\nFor the selected filter, the oldest person to ride one bike was born in: {}",
                years.earliest
            )?;
            writeln!(
                out,
                "For the selected filter, the youngest person to ride one bike was born in: {}",
                years.most_recent
            )?;
            writeln!(
                out,
                "For the selected filter, the popular birth year amongst riders is: {}",
                years.popular
            )?;
        }
        None => {
            debug!(city = %city, "no birth year data");
            writeln!(
                out,
                "\nWe're sorry! There is no data of birth year for {}.",
                city
            )?;
        }
    }

    timing(out, elapsed_secs(start))?;
    Ok(())
}
