//! Raw data browser: pages through the filtered table on request.
//!
//! Rows are written one field per line so every column and the full text of
//! each value stay visible, however wide the table is.

use log::debug;
use polars::prelude::*;
use std::io::{BufRead, Write};

use super::prompt::{PromptError, Prompter};

const RETRY: &str = "Not a valid input. Please enter yes or no: ";
const MISSING: &str = "N/A";

/// Rows `[offset, offset + page_size)`; past the end this is short or empty.
pub fn page(df: &DataFrame, offset: usize, page_size: usize) -> DataFrame {
    df.slice(offset as i64, page_size)
}

fn field_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => MISSING.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Write each row of `rows` as a block of `column: value` lines.
///
/// `first_row` is the position of the page's first row in the full table.
pub fn write_page<W: Write>(
    out: &mut W,
    rows: &DataFrame,
    first_row: usize,
) -> Result<(), PromptError> {
    if rows.height() == 0 {
        writeln!(out, "No more rows to show.")?;
        return Ok(());
    }

    let columns = rows.get_columns();
    for i in 0..rows.height() {
        writeln!(out, "Row {}:", first_row + i)?;
        for column in columns {
            let value = column
                .get(i)
                .map(field_text)
                .unwrap_or_else(|_| MISSING.to_string());
            writeln!(out, "  {}: {value}", column.name())?;
        }
    }
    Ok(())
}

/// Offer raw rows `page_size` at a time until the user declines.
pub fn browse<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    df: &DataFrame,
    page_size: usize,
) -> Result<(), PromptError> {
    let question = format!("Would you like to see the raw data ({page_size} rows)? Enter yes or no: ");
    if !prompter.yes_no(&question, RETRY)? {
        return Ok(());
    }

    let more = format!("Would you like to see {page_size} more rows? Enter yes or no: ");
    let mut offset = 0;
    loop {
        let rows = page(df, offset, page_size);
        debug!("showing rows {offset}..{} ({} returned)", offset + page_size, rows.height());
        write_page(prompter.output(), &rows, offset)?;

        if !prompter.yes_no(&more, RETRY)? {
            return Ok(());
        }
        offset += page_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{fixtures, City, DataLoader, Selection};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn numbers(n: i32) -> DataFrame {
        df!("n" => (0..n).collect::<Vec<i32>>()).unwrap()
    }

    fn n_values(df: &DataFrame) -> Vec<i32> {
        df.column("n").unwrap().i32().unwrap().into_no_null_iter().collect()
    }

    fn browse_output(df: &DataFrame, input: &str) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        browse(&mut prompter, df, 5).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_page_windows() {
        let df = numbers(12);
        assert_eq!(n_values(&page(&df, 0, 5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(n_values(&page(&df, 10, 5)), vec![10, 11]);
        assert_eq!(page(&df, 15, 5).height(), 0);
    }

    #[test]
    fn test_declining_shows_nothing() {
        let output = browse_output(&numbers(12), "no\n");
        assert!(!output.contains("Row 0:"));
    }

    #[test]
    fn test_paging_past_the_end_is_not_an_error() {
        let output = browse_output(&numbers(7), "yes\nyes\nwhat\nyes\nno\n");

        assert!(output.contains("Row 0:\n  n: 0\n"));
        assert!(output.contains("Row 4:\n  n: 4\n"));
        assert!(output.contains("Row 6:\n  n: 6\n"));
        assert!(!output.contains("Row 7:"));
        assert!(output.contains("No more rows to show."));
        assert_eq!(output.matches(RETRY).count(), 1);
    }

    #[test]
    fn test_page_shows_every_column_in_full() {
        let dir = tempdir().unwrap();
        let path = fixtures::write_chicago(dir.path());
        let selection = Selection::new(City::Chicago, None, None);
        let table = DataLoader::load_trips(&path, &selection).unwrap();

        let output = browse_output(&table.df, "yes\nno\n");

        for name in table.df.get_column_names() {
            assert!(
                output.contains(&format!("  {name}: ")),
                "column {name} missing from page"
            );
        }
        assert!(output.contains("  End Station: Clinton St & Madison St\n"));
        assert!(output.contains("  day_of_week: Sunday\n"));
        assert!(output.contains("  User Type: N/A\n"));
        assert!(output.contains("Row 4:"));
        assert!(!output.contains("Row 5:"));
    }
}
