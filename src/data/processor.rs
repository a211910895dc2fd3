//! Data Processor Module
//! Derives time columns from the start timestamp and applies month/day filters.

use log::debug;
use polars::prelude::*;

use super::loader::START_TIME;
use super::selection::Selection;

pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";

/// Timestamp layout used by every city file.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handles data transformation for trip tables.
pub struct DataProcessor;

impl DataProcessor {
    /// Parse `Start Time` and append `month`, `day_of_week` and `hour`.
    ///
    /// Output columns: input columns + [month: i32, day_of_week: str, hour: i32]
    pub fn derive_time_columns(df: &DataFrame) -> PolarsResult<DataFrame> {
        let options = StrptimeOptions {
            format: Some(START_TIME_FORMAT.into()),
            strict: true,
            ..Default::default()
        };

        let derived = df
            .clone()
            .lazy()
            .with_column(col(START_TIME).str().to_datetime(
                Some(TimeUnit::Microseconds),
                None,
                options,
                lit("raise"),
            ))
            .with_columns([
                col(START_TIME).dt().month().cast(DataType::Int32).alias(MONTH),
                col(START_TIME).dt().strftime("%A").alias(DAY_OF_WEEK),
                col(START_TIME).dt().hour().cast(DataType::Int32).alias(HOUR),
            ])
            .collect()?;

        Ok(derived)
    }

    /// Keep only rows matching the selection's month and day.
    ///
    /// Filtering changes row membership only; derived columns pass through untouched.
    pub fn apply_selection(df: &DataFrame, selection: &Selection) -> PolarsResult<DataFrame> {
        let mut lf = df.clone().lazy();

        if let Some(month) = selection.month {
            lf = lf.filter(col(MONTH).eq(lit(month.number())));
        }
        if let Some(day) = selection.day {
            lf = lf.filter(col(DAY_OF_WEEK).eq(lit(day.name())));
        }

        let filtered = lf.collect()?;
        debug!(
            "selection kept {} of {} rows",
            filtered.height(),
            df.height()
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::loader::DataLoader;
    use crate::data::selection::{City, Month, Weekday};
    use tempfile::tempdir;

    fn chicago_derived() -> DataFrame {
        let dir = tempdir().unwrap();
        let path = fixtures::write_chicago(dir.path());
        let raw = DataLoader::load_csv(&path).unwrap();
        DataProcessor::derive_time_columns(&raw.df).unwrap()
    }

    #[test]
    fn test_derived_columns_follow_start_time() {
        let df = chicago_derived();

        let months: Vec<Option<i32>> = df.column(MONTH).unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(
            months,
            vec![Some(1), Some(1), Some(3), Some(3), Some(6), Some(3)]
        );

        let days: Vec<Option<&str>> = df
            .column(DAY_OF_WEEK)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            days,
            vec![
                Some("Sunday"),
                Some("Monday"),
                Some("Monday"),
                Some("Monday"),
                Some("Monday"),
                Some("Saturday")
            ]
        );

        let hours: Vec<Option<i32>> = df.column(HOUR).unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(
            hours,
            vec![Some(9), Some(9), Some(17), Some(9), Some(8), Some(12)]
        );
    }

    #[test]
    fn test_month_filter_keeps_matching_rows_only() {
        let df = chicago_derived();
        let selection = Selection::new(City::Chicago, Some(Month::March), None);

        let filtered = DataProcessor::apply_selection(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 3);
        assert!(filtered
            .column(MONTH)
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .all(|m| m == Some(3)));
    }

    #[test]
    fn test_day_filter_keeps_matching_rows_only() {
        let df = chicago_derived();
        let selection = Selection::new(City::Chicago, None, Some(Weekday::Monday));

        let filtered = DataProcessor::apply_selection(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 4);
        assert!(filtered
            .column(DAY_OF_WEEK)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .all(|d| d == Some("Monday")));
    }

    #[test]
    fn test_every_month_and_day_combination_filters_consistently() {
        let df = chicago_derived();

        for month in Month::ALL {
            for day in Weekday::ALL {
                let selection = Selection::new(City::Chicago, Some(month), Some(day));
                let filtered = DataProcessor::apply_selection(&df, &selection).unwrap();

                let months = filtered.column(MONTH).unwrap().i32().unwrap();
                let days = filtered.column(DAY_OF_WEEK).unwrap().str().unwrap();
                for (m, d) in months.into_iter().zip(days.into_iter()) {
                    assert_eq!(m, Some(month.number()));
                    assert_eq!(d, Some(day.name()));
                }
            }
        }
    }

    #[test]
    fn test_filter_with_no_matches_yields_empty_table() {
        let df = chicago_derived();
        let selection = Selection::new(City::Chicago, Some(Month::February), None);

        let filtered = DataProcessor::apply_selection(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.width(), df.width());
    }

    #[test]
    fn test_malformed_start_time_fails() {
        let df = df!(
            START_TIME => ["not a timestamp"],
        )
        .unwrap();
        assert!(DataProcessor::derive_time_columns(&df).is_err());
    }
}
