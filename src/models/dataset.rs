use super::city::City;
use super::trip::Trip;

/// Optional columns available in the loaded sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    /// Union of two column sets (used when several cities are concatenated).
    pub fn union(self, other: Columns) -> Columns {
        Columns {
            gender: self.gender || other.gender,
            birth_year: self.birth_year || other.birth_year,
        }
    }

    /// Header labels in canonical order, derived columns included.
    pub fn headers(&self) -> Vec<&'static str> {
        let mut out = vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ];
        if self.gender {
            out.push("Gender");
        }
        if self.birth_year {
            out.push("Birth Year");
        }
        out.extend(["Month", "Weekday", "Start Hour"]);
        out
    }
}

/// Trips loaded for one or more cities.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub cities: Vec<City>,
    pub columns: Columns,
    pub trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(cities: Vec<City>, columns: Columns, trips: Vec<Trip>) -> Self {
        Self {
            cities,
            columns,
            trips,
        }
    }

    /// Same cities and columns, different rows.
    pub fn with_trips(&self, trips: Vec<Trip>) -> Self {
        Self {
            cities: self.cities.clone(),
            columns: self.columns,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
