//! Interactive session loop: select, load, report, browse, repeat.

use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

use super::browser::browse;
use super::filters::select_filters;
use super::prompt::{PromptError, Prompter};
use crate::config::Config;
use crate::data::DataLoader;
use crate::stats::full_report;

const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Run one selection/report/browse pass per iteration until the user stops.
pub fn run<R: BufRead, W: Write>(config: &Config, prompter: &mut Prompter<R, W>) -> Result<()> {
    loop {
        let selection = select_filters(prompter)?;

        let path = config.city_path(selection.city);
        let table = DataLoader::load_trips(&path, &selection)
            .with_context(|| format!("loading {} trips", selection.city))?;

        full_report(prompter.output(), &table, &selection)
            .with_context(|| format!("computing statistics for {}", selection.banner()))?;

        browse(prompter, &table.df, config.page_size)?;

        let restart = match prompter.ask(RESTART_QUESTION) {
            Ok(answer) => answer,
            Err(PromptError::Closed(_)) => break,
            Err(err) => return Err(err.into()),
        };
        if restart.to_lowercase() != "yes" {
            break;
        }
        info!("restarting session");
    }

    Ok(())
}
