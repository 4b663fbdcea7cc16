use crate::core::pager::{PagerState, SortKey, SortOrder};
use crate::errors::AppResult;
use crate::models::calendar::weekday_name;
use crate::models::{Columns, Dataset, Trip};
use crate::ui::messages::{info, separator};
use crate::ui::prompt::Console;
use crate::utils::formatting::duration_cell;
use crate::utils::table::Table;
use std::io::{BufRead, Write};
use tracing::debug;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Page through the dataset, resuming from `pager.offset` when asked to.
/// The pager keeps the offset to resume from next time.
pub fn handle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &Dataset,
    pager: &mut PagerState,
    page_size: usize,
) -> AppResult<()> {
    writeln!(console.out(), "\nViewing raw data.")?;

    if pager.has_history() {
        let resume = console.confirm(
            "\nWould you like to continue from where you stopped last time? \n [y] Yes\n [n] No\n \
             Type end at any time if you would like to exit the program\n\n>",
        )?;
        if !resume {
            pager.reset();
        }
    }

    if !pager.has_history() {
        let sort = ask_sort(console)?;
        pager.restart(dataset, sort);
    }

    if pager.is_exhausted(dataset) {
        info(console.out(), "There are no more rows to display.")?;
        return Ok(());
    }

    loop {
        let rows = pager.next_page(dataset, page_size);
        let table = render_rows(&rows, &dataset.columns);
        writeln!(console.out(), "\n\n{}\n", table)?;
        debug!(offset = pager.offset, total = dataset.len(), "raw data page shown");

        if pager.is_exhausted(dataset) {
            info(console.out(), "You have reached the end of the data.")?;
            break;
        }
        if !console.confirm("Do you want to keep printing raw data?\n\n[y]Yes\n[n]No\n\n>")? {
            break;
        }
    }

    separator(console.out())?;
    Ok(())
}

/// Optional sort column and direction. An empty answer keeps the current order.
fn ask_sort<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<(SortKey, SortOrder)>> {
    let mut text = String::from(
        "\nHow would you like to sort the way the data is displayed in the dataframe? \
         Hit Enter to view unsorted.\n \n",
    );
    let mut codes = vec![String::new()];
    for (i, key) in SortKey::ALL.iter().enumerate() {
        text.push_str(&format!(" [{}] {}\n", i + 1, key.label()));
        codes.push((i + 1).to_string());
    }
    text.push_str(" Type end at any time if you would like to exit the program\n\n>");

    let choice = console.ask_one(&text, codes.as_slice())?;
    let Some(key) = SortKey::from_code(&choice) else {
        return Ok(None);
    };

    let order = console.ask_one(
        "\nWould you like it to be sorted ascending or descending? \n [1] Ascending\n \
         [2] Descending\n Type end at any time if you would like to exit the program.\n\n\n>",
        &["1", "2"][..],
    )?;
    Ok(SortOrder::from_code(&order).map(|order| (key, order)))
}

fn render_rows(rows: &[&Trip], columns: &Columns) -> String {
    let mut table = Table::new(columns.headers());
    for trip in rows {
        let mut cells = vec![
            trip.id.clone().unwrap_or_default(),
            trip.start_time.format(TIME_FORMAT).to_string(),
            trip.end_time
                .map(|t| t.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
            trip.duration.map(duration_cell).unwrap_or_default(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if columns.gender {
            cells.push(trip.gender.clone().unwrap_or_default());
        }
        if columns.birth_year {
            cells.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        cells.push(trip.month.to_string());
        cells.push(weekday_name(trip.weekday).to_string());
        cells.push(trip.start_hour.to_string());
        table.add_row(cells);
    }
    table.render()
}
