//! Filter selection prompts: city, then optional month and day.

use std::io::{BufRead, Write};

use super::prompt::{PromptError, Prompter};
use crate::data::{City, Month, Selection, Weekday};
use crate::stats::SEPARATOR;

const CITY_QUESTION: &str = "Would you like to investigate Chicago, Washington, or New York City? ";
const MONTH_TOGGLE_QUESTION: &str = "Would you like to filter data by month? Enter yes or no: ";
const MONTH_QUESTION: &str =
    "Filter by which month? This program has data for January through June: ";
const DAY_TOGGLE_QUESTION: &str = "Would you like to filter data by day? Enter yes or no: ";
const DAY_QUESTION: &str = "Filter by which day? ";

/// Collect a validated [`Selection`] from the user.
pub fn select_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Selection, PromptError> {
    writeln!(prompter.output(), "Hello! Let's explore some US bikeshare data!")?;

    let city = prompter.ask_until(
        CITY_QUESTION,
        "That's not a valid city for this program.",
        City::parse,
    )?;

    let month = if prompter.yes_no(
        MONTH_TOGGLE_QUESTION,
        "Not a valid input. Please specify yes or no",
    )? {
        Some(prompter.ask_until(
            MONTH_QUESTION,
            "Not a valid month for this program.",
            Month::parse,
        )?)
    } else {
        None
    };

    let day = if prompter.yes_no(DAY_TOGGLE_QUESTION, "Please specify yes or no.")? {
        Some(prompter.ask_until(DAY_QUESTION, "Not a valid day.", Weekday::parse)?)
    } else {
        None
    };

    writeln!(prompter.output(), "{SEPARATOR}")?;
    Ok(Selection::new(city, month, day))
}
