//! Statistics Calculator Module
//! Frequency counts, duration totals and birth-year summaries over a trip table.

use polars::prelude::*;
use statrs::statistics::Statistics;
use thiserror::Error;

use crate::data::{BIRTH_YEAR, END_STATION, START_STATION, TRIP_DURATION};

/// Name of the tally column produced by [`StatsCalculator::value_counts`].
pub const COUNT: &str = "count";

/// Name of the combined start/end station column.
pub const TRIP: &str = "Trip";

/// Label substituted for missing values in labelled counts.
pub const NULL_LABEL: &str = "N/A";

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No values in column '{0}'")]
    EmptyColumn(String),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A value and how many rows carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: u64,
}

/// Total and mean trip duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSummary {
    pub total: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Handles statistical calculations over a filtered trip table.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Count occurrences of each value in `column`.
    ///
    /// Output columns: [column, "count"], ordered by count descending and then
    /// by value ascending, so equal counts resolve to the smallest value.
    /// Nulls are dropped, or replaced by `null_label` when one is given.
    pub fn value_counts(
        df: &DataFrame,
        column: &str,
        null_label: Option<&str>,
    ) -> Result<DataFrame, StatsError> {
        let mut lf = df.clone().lazy();
        lf = match null_label {
            Some(label) => lf.select([col(column).fill_null(lit(label))]),
            None => lf
                .select([col(column)])
                .filter(col(column).is_not_null()),
        };

        let counts = lf
            .group_by([col(column)])
            .agg([len().cast(DataType::UInt64).alias(COUNT)])
            .sort_by_exprs(
                [col(COUNT), col(column)],
                SortMultipleOptions::default().with_order_descending_multi([true, false]),
            )
            .collect()?;

        Ok(counts)
    }

    /// Most frequent non-null string in `column`.
    pub fn most_frequent_str(df: &DataFrame, column: &str) -> Result<ValueCount<String>, StatsError> {
        let counts = Self::value_counts(df, column, None)?;
        let values = counts.column(column)?.str()?;
        let tallies = counts.column(COUNT)?.u64()?;

        match (values.get(0), tallies.get(0)) {
            (Some(value), Some(count)) => Ok(ValueCount {
                value: value.to_string(),
                count,
            }),
            _ => Err(StatsError::EmptyColumn(column.to_string())),
        }
    }

    /// Most frequent non-null integer in `column`.
    pub fn most_frequent_i32(df: &DataFrame, column: &str) -> Result<ValueCount<i32>, StatsError> {
        let counts = Self::value_counts(df, column, None)?;
        let values = counts.column(column)?.i32()?;
        let tallies = counts.column(COUNT)?.u64()?;

        match (values.get(0), tallies.get(0)) {
            (Some(value), Some(count)) => Ok(ValueCount { value, count }),
            _ => Err(StatsError::EmptyColumn(column.to_string())),
        }
    }

    /// Counts for every value of a string column, missing values labelled "N/A".
    pub fn labelled_counts(
        df: &DataFrame,
        column: &str,
    ) -> Result<Vec<ValueCount<String>>, StatsError> {
        let counts = Self::value_counts(df, column, Some(NULL_LABEL))?;
        let values = counts.column(column)?.str()?;
        let tallies = counts.column(COUNT)?.u64()?;

        Ok(values
            .into_iter()
            .zip(tallies.into_iter())
            .map(|(value, count)| ValueCount {
                value: value.unwrap_or(NULL_LABEL).to_string(),
                count: count.unwrap_or(0),
            })
            .collect())
    }

    /// Build the "<start> to <end>" trip column.
    ///
    /// Rows missing either station are left out.
    pub fn trips(df: &DataFrame) -> Result<DataFrame, StatsError> {
        let starts = df.column(START_STATION)?.str()?;
        let ends = df.column(END_STATION)?.str()?;

        let trips: Vec<String> = starts
            .into_iter()
            .zip(ends.into_iter())
            .filter_map(|pair| match pair {
                (Some(start), Some(end)) => Some(format!("{start} to {end}")),
                _ => None,
            })
            .collect();

        Ok(DataFrame::new(vec![Column::new(TRIP.into(), trips)])?)
    }

    /// Most frequent start-to-end route.
    pub fn most_popular_trip(df: &DataFrame) -> Result<ValueCount<String>, StatsError> {
        let trips = Self::trips(df)?;
        Self::most_frequent_str(&trips, TRIP)
    }

    /// Sum and mean of `Trip Duration`.
    pub fn duration_summary(df: &DataFrame) -> Result<DurationSummary, StatsError> {
        let durations = df.column(TRIP_DURATION)?.cast(&DataType::Float64)?;
        let values: Vec<f64> = durations.f64()?.into_iter().flatten().collect();

        if values.is_empty() {
            return Err(StatsError::EmptyColumn(TRIP_DURATION.to_string()));
        }

        Ok(DurationSummary {
            total: values.iter().sum(),
            mean: values.iter().mean(),
        })
    }

    /// Earliest, most recent and most common birth year.
    ///
    /// Returns `None` when every birth year in the table is missing.
    pub fn birth_year_summary(df: &DataFrame) -> Result<Option<BirthYearSummary>, StatsError> {
        let years = df
            .clone()
            .lazy()
            .select([col(BIRTH_YEAR).cast(DataType::Int32)])
            .collect()?;

        let column = years.column(BIRTH_YEAR)?.i32()?;
        let (Some(earliest), Some(most_recent)) = (column.min(), column.max()) else {
            return Ok(None);
        };
        let most_common = Self::most_frequent_i32(&years, BIRTH_YEAR)?.value;

        Ok(Some(BirthYearSummary {
            earliest,
            most_recent,
            most_common,
        }))
    }
}
