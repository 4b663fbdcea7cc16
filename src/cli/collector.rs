use crate::errors::AppResult;
use crate::models::calendar::{month_domain, month_from_input, weekday_domain, weekday_from_input};
use crate::models::{City, FilterSpec};
use crate::ui::messages::separator;
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use tracing::info;

const END_HINT: &str = "Type end at any time if you would like to exit the program";

/// Ask city, month(s) and weekday(s) until the user confirms the selection.
pub fn collect_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<FilterSpec> {
    writeln!(console.out(), "\n\nLet's explore some US bikeshare data!\n")?;
    writeln!(console.out(), "{END_HINT}.\n")?;

    let cities = City::domain();
    let months = month_domain();
    let weekdays = weekday_domain();

    let spec = loop {
        let city = console.ask(
            &format!(
                "\nFor what city/cities do you want do select data, New York City, Chicago or \
                 Washington? Use commas to list the names.\n{END_HINT}\n>"
            ),
            cities.as_slice(),
        )?;
        let month = console.ask(
            &format!(
                "\nFrom January to June, for what month/months do you want do filter data? \
                 Use commas to list the names.\n{END_HINT}\n>"
            ),
            months.as_slice(),
        )?;
        let day = console.ask(
            &format!(
                "\nFor what day/days do you want do filter bikeshare data? Use commas to list \
                 the names.\n{END_HINT}\n>"
            ),
            weekdays.as_slice(),
        )?;

        // every token already passed validation against the domains above
        let spec = FilterSpec::new(
            city.into_values()
                .iter()
                .filter_map(|c| City::from_input(c))
                .collect(),
            month
                .into_values()
                .iter()
                .filter_map(|m| month_from_input(m))
                .collect(),
            day.into_values()
                .iter()
                .filter_map(|d| weekday_from_input(d))
                .collect(),
        );

        let confirmed = console.confirm(&format!(
            "\nPlease confirm that you would like to apply the following filters to the \
             bikeshare data.\n\n{spec}\n\n [y] Yes\n [n] No\n{END_HINT}\n\n>"
        ))?;
        if confirmed {
            break spec;
        }
        writeln!(console.out(), "\nTry this again!")?;
    };

    separator(console.out())?;
    info!(
        cities = %spec.cities_label(),
        months = %spec.months_label(),
        weekdays = %spec.weekdays_label(),
        "filters confirmed"
    );
    Ok(spec)
}
