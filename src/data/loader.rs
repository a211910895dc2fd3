//! CSV Data Loader Module
//! Reads a city's trip file with Polars and records which optional columns it carries.

use log::{debug, info};
use polars::prelude::*;
use polars::prelude::Schema as FrameSchema;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::processor::DataProcessor;
use super::selection::Selection;

pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Numeric columns read as Float64 whatever their first rows look like.
pub const FLOAT_COLUMNS: [&str; 2] = [TRIP_DURATION, BIRTH_YEAR];

/// Columns every city file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Trip file not found: {0}")]
    MissingFile(PathBuf),
    #[error("Trip file {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Optional columns present in a loaded dataset.
///
/// Decided once from the CSV header; statistics consult this instead of
/// probing the frame at each use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn detect(df: &DataFrame) -> Self {
        Self {
            has_gender: has_column(df, GENDER),
            has_birth_year: has_column(df, BIRTH_YEAR),
        }
    }
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Trip records for one session iteration plus their schema capabilities.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub df: DataFrame,
    pub schema: Schema,
}

impl TripTable {
    pub fn height(&self) -> usize {
        self.df.height()
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read a trip CSV as-is. No derived columns, no filtering.
    pub fn load_csv(path: &Path) -> Result<TripTable, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::MissingFile(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_dtype_overwrite(Some(Arc::new(Self::float_overrides(path)?)))
            .finish()?
            .collect()?;

        for column in REQUIRED_COLUMNS {
            if !has_column(&df, column) {
                return Err(LoaderError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let schema = Schema::detect(&df);
        debug!(
            "read {} rows from {} (gender: {}, birth year: {})",
            df.height(),
            path.display(),
            schema.has_gender,
            schema.has_birth_year
        );

        Ok(TripTable { df, schema })
    }

    /// Float64 dtypes for whichever of [`FLOAT_COLUMNS`] the file's header names.
    ///
    /// Inference only looks at the leading rows, so a duration column that turns
    /// fractional later, or a birth-year column that starts out empty, would
    /// otherwise get the wrong dtype.
    fn float_overrides(path: &Path) -> Result<FrameSchema, LoaderError> {
        let header = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect_schema()?;

        let mut overrides = FrameSchema::with_capacity(FLOAT_COLUMNS.len());
        for column in FLOAT_COLUMNS {
            if header.contains(column) {
                overrides.with_column(column.into(), DataType::Float64);
            }
        }
        Ok(overrides)
    }

    /// Load a city file, derive time columns and apply the selection's filters.
    pub fn load_trips(path: &Path, selection: &Selection) -> Result<TripTable, LoaderError> {
        let raw = Self::load_csv(path)?;
        let derived = DataProcessor::derive_time_columns(&raw.df)?;
        let df = DataProcessor::apply_selection(&derived, selection)?;

        info!(
            "loaded {} of {} trips for {} (month: {}, day: {})",
            df.height(),
            raw.height(),
            selection.city.name(),
            selection.month_label(),
            selection.day_label()
        );

        Ok(TripTable {
            df,
            schema: raw.schema,
        })
    }
}
