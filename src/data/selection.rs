//! Filter Selection Types
//! City, month and weekday choices made once per session iteration.

use std::fmt;

/// The cities this tool has trip data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Title-case name used in report text.
    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Case-insensitive lookup of a city by name.
    pub fn parse(input: &str) -> Option<City> {
        let wanted = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|city| city.name() == wanted)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Months covered by the datasets (January through June).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.number() as usize - 1]
    }

    /// 1-based calendar month number.
    pub fn number(self) -> i32 {
        self as i32 + 1
    }

    pub fn parse(input: &str) -> Option<Month> {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(wanted))
    }
}

/// Calendar month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up a calendar month name from its 1-based number.
pub fn month_name(number: i32) -> Option<&'static str> {
    usize::try_from(number - 1)
        .ok()
        .and_then(|idx| MONTH_NAMES.get(idx).copied())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English weekday name, matching the derived `day_of_week` column.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn parse(input: &str) -> Option<Weekday> {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
    }
}

/// City plus optional month and day restriction. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl Selection {
    pub fn new(city: City, month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// Month filter label: the month name or the literal "all".
    pub fn month_label(&self) -> &'static str {
        self.month.map(Month::name).unwrap_or("all")
    }

    /// Day filter label: the weekday name or the literal "all".
    pub fn day_label(&self) -> &'static str {
        self.day.map(Weekday::name).unwrap_or("all")
    }

    /// One-line summary of the active filters, printed above the report.
    pub fn banner(&self) -> String {
        let city = self.city.title();
        match (self.month, self.day) {
            (None, None) => format!("For all months and all days in {city}:"),
            (None, Some(day)) => format!("For all months and all {}s in {city}:", day.name()),
            (Some(month), None) => {
                format!("For all days in the month of {} in {city}:", month.name())
            }
            (Some(month), Some(day)) => format!(
                "For all {}s in the month of {} in {city}:",
                day.name(),
                month.name()
            ),
        }
    }
}
