use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name, as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// CSV file backing this city, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Helper: convert prompt input (any case, surrounding blanks) to a city
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.name() == s)
    }

    /// Allowed answers for the city prompt.
    pub fn domain() -> Vec<&'static str> {
        City::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// "Chicago, Washington" for a multi-city selection.
pub fn titles(cities: &[City]) -> String {
    cities
        .iter()
        .map(|c| c.title())
        .collect::<Vec<_>>()
        .join(", ")
}
