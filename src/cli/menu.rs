/// Entries of the main menu shown once a dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TimeStats,
    StationStats,
    TripDurationStats,
    UserStats,
    RawData,
    Restart,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::TimeStats,
        MenuChoice::StationStats,
        MenuChoice::TripDurationStats,
        MenuChoice::UserStats,
        MenuChoice::RawData,
        MenuChoice::Restart,
        MenuChoice::Exit,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MenuChoice::TimeStats => "1",
            MenuChoice::StationStats => "2",
            MenuChoice::TripDurationStats => "3",
            MenuChoice::UserStats => "4",
            MenuChoice::RawData => "5",
            MenuChoice::Restart => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::TimeStats => "Time Stats",
            MenuChoice::StationStats => "Station Stats",
            MenuChoice::TripDurationStats => "Trip Duration Stats",
            MenuChoice::UserStats => "User Stats",
            MenuChoice::RawData => "Display Raw Data",
            MenuChoice::Restart => "Restart",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        MenuChoice::ALL.into_iter().find(|c| c.code() == code.trim())
    }

    pub fn codes() -> Vec<&'static str> {
        MenuChoice::ALL.iter().map(|c| c.code()).collect()
    }

    pub fn prompt() -> String {
        let mut text = String::from("\nPlease select the information you would like to obtain.\n\n");
        for choice in MenuChoice::ALL {
            text.push_str(&format!(" [{}] {}\n", choice.code(), choice.label()));
        }
        text.push_str(" Type end at any time if you would like to exit the program\n\n>");
        text
    }
}
