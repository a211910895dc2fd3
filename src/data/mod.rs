//! Data module - CSV loading, time derivation and filtering

#[cfg(test)]
pub(crate) mod fixtures;
mod loader;
mod processor;
mod selection;

pub use loader::{
    DataLoader, TripTable, BIRTH_YEAR, END_STATION, GENDER, START_STATION, TRIP_DURATION,
    USER_TYPE,
};
pub use processor::{DAY_OF_WEEK, HOUR, MONTH};
pub use selection::{month_name, City, Month, Selection, Weekday};
