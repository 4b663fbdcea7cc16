use crate::cli::collector::collect_filters;
use crate::cli::menu::MenuChoice;
use crate::config::Config;
use crate::core::filter::TripFilter;
use crate::core::loader::Loader;
use crate::core::pager::PagerState;
use crate::errors::AppResult;
use crate::models::{Dataset, FilterSpec};
use crate::ui::messages::{timing, warning};
use crate::ui::prompt::Console;
use crate::utils::time::elapsed_secs;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::info;

/// What the session does after a menu entry has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Restart,
    Exit,
}

/// Outer loop: filters → dataset → menu, until the user stops restarting.
pub struct Session<R, W> {
    console: Console<R, W>,
    cfg: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, cfg: Config) -> Self {
        Self { console, cfg }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self) -> AppResult<()> {
        loop {
            let spec = collect_filters(&mut self.console)?;
            let dataset = self.load(&spec)?;

            if self.menu_loop(&dataset)? == Flow::Exit {
                info!("exit selected from the menu");
                return Ok(());
            }

            let restart = self.console.confirm(
                "\nWould you like to restart?\n\n[y]Yes\n[n]No\n\
                 Type end at any time if you would like to exit the program\n\n>",
            )?;
            if !restart {
                info!("session finished");
                return Ok(());
            }
            info!("session restarted");
        }
    }

    /// Load the selected cities and apply the month/weekday filters.
    fn load(&mut self, spec: &FilterSpec) -> AppResult<Dataset> {
        writeln!(
            self.console.out(),
            "\nThe program is loading the data for the filters according to your responds."
        )?;
        let start = Instant::now();

        let loaded = Loader::load(&self.cfg.data_path(), &spec.cities)?;
        let dataset = TripFilter::apply(&loaded, spec);

        if dataset.is_empty() {
            warning(self.console.out(), "No trips match the selected filters.")?;
        }
        timing(self.console.out(), elapsed_secs(start))?;
        Ok(dataset)
    }

    /// Inner loop over the menu; the pager offset lives as long as the dataset.
    fn menu_loop(&mut self, dataset: &Dataset) -> AppResult<Flow> {
        let mut pager = PagerState::new();
        let codes = MenuChoice::codes();
        let prompt = MenuChoice::prompt();

        loop {
            let code = self.console.ask_one(&prompt, codes.as_slice())?;
            let Some(choice) = MenuChoice::from_code(&code) else {
                continue;
            };

            match crate::dispatch(choice, &mut self.console, dataset, &mut pager, &self.cfg)? {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
    }
}
