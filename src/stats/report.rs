//! Report Module
//! Writes the four statistics sections for a filtered trip table.

use log::debug;
use std::io::Write;
use std::time::Instant;

use super::calculator::{StatsCalculator, StatsError};
use super::duration::format_duration;
use crate::data::{
    month_name, Selection, TripTable, DAY_OF_WEEK, END_STATION, GENDER, HOUR, MONTH,
    START_STATION, USER_TYPE,
};

pub const SEPARATOR: &str = "----------------------------------------";

/// Run `body` under a heading, then report how long it took.
fn section<W, F>(out: &mut W, heading: &str, body: F) -> Result<(), StatsError>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<(), StatsError>,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();

    body(out)?;

    let elapsed = started.elapsed().as_secs_f64();
    debug!("{heading} finished in {elapsed:.6}s");
    writeln!(out, "\nThis took {elapsed} seconds.")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Popular month (when not filtered), day (when not filtered) and hour.
pub fn time_stats<W: Write>(
    out: &mut W,
    table: &TripTable,
    selection: &Selection,
) -> Result<(), StatsError> {
    section(out, "Calculating The Most Frequent Times of Travel...", |out| {
        if selection.month.is_none() {
            let month = StatsCalculator::most_frequent_i32(&table.df, MONTH)?;
            let name = month_name(month.value).unwrap_or("Unknown");
            writeln!(
                out,
                "The most popular month was {name}, with {} bikerides.",
                month.count
            )?;
        }

        if selection.day.is_none() {
            let day = StatsCalculator::most_frequent_str(&table.df, DAY_OF_WEEK)?;
            writeln!(
                out,
                "The most popular day was {}, with {} bikerides.",
                day.value, day.count
            )?;
        }

        let hour = StatsCalculator::most_frequent_i32(&table.df, HOUR)?;
        writeln!(
            out,
            "The most popular hour was {} o'clock with {} bikerides.",
            hour.value, hour.count
        )?;
        Ok(())
    })
}

/// Popular start station, end station and start-to-end trip.
pub fn station_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<(), StatsError> {
    section(out, "Calculating The Most Popular Stations and Trip...", |out| {
        let start = StatsCalculator::most_frequent_str(&table.df, START_STATION)?;
        writeln!(
            out,
            "The most popular start station was {} with {} trips starting there.",
            start.value, start.count
        )?;

        let end = StatsCalculator::most_frequent_str(&table.df, END_STATION)?;
        writeln!(
            out,
            "The most popular ending station was {} with {} trips ending there.",
            end.value, end.count
        )?;

        let trip = StatsCalculator::most_popular_trip(&table.df)?;
        writeln!(
            out,
            "The most popular trip was {} with {} trips.",
            trip.value, trip.count
        )?;
        Ok(())
    })
}

/// Total and mean trip duration.
pub fn duration_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<(), StatsError> {
    section(out, "Calculating Trip Duration...", |out| {
        let summary = StatsCalculator::duration_summary(&table.df)?;
        writeln!(
            out,
            "The total travel duration was {}.",
            format_duration(summary.total)
        )?;
        writeln!(
            out,
            "The mean travel duration was {}.",
            format_duration(summary.mean)
        )?;
        Ok(())
    })
}

fn trips(count: u64) -> String {
    if count == 1 {
        "1 trip".to_string()
    } else {
        format!("{count} trips")
    }
}

/// User type, gender and birth-year breakdown.
///
/// Gender and birth year are only reported when the city's file has those
/// columns; otherwise a notice is printed in their place.
pub fn user_stats<W: Write>(
    out: &mut W,
    table: &TripTable,
    selection: &Selection,
) -> Result<(), StatsError> {
    let city = selection.city.title();

    section(out, "Calculating User Stats...", |out| {
        for entry in StatsCalculator::labelled_counts(&table.df, USER_TYPE)? {
            writeln!(out, "{} users took {}.", entry.value, trips(entry.count))?;
        }
        writeln!(out)?;

        if table.schema.has_gender {
            for entry in StatsCalculator::labelled_counts(&table.df, GENDER)? {
                writeln!(out, "{} riders took {}.", entry.value, trips(entry.count))?;
            }
        } else {
            writeln!(out, "{city} has no gender data available.")?;
        }
        writeln!(out)?;

        if table.schema.has_birth_year {
            match StatsCalculator::birth_year_summary(&table.df)? {
                Some(years) => writeln!(
                    out,
                    "The earliest user birth year is {}. The most recent user birth year is {}. \
                     The most common user birth year is {}.",
                    years.earliest, years.most_recent, years.most_common
                )?,
                None => writeln!(out, "No birth years were recorded for these trips.")?,
            }
        } else {
            writeln!(out, "{city} has no birth year data available.")?;
        }
        Ok(())
    })
}

/// Write every statistics section, preceded by the filter banner.
pub fn full_report<W: Write>(
    out: &mut W,
    table: &TripTable,
    selection: &Selection,
) -> Result<(), StatsError> {
    writeln!(out, "{}\n", selection.banner())?;
    time_stats(out, table, selection)?;
    station_stats(out, table)?;
    duration_stats(out, table)?;
    user_stats(out, table, selection)?;
    Ok(())
}
