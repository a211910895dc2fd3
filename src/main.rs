//! Bikeshare Stats - US Bikeshare Trip Explorer
//!
//! Interactive console tool that filters a city's bikeshare trips by month and
//! day and reports popular times, stations, trip durations and user statistics.

mod cli;
mod config;
mod data;
mod stats;

use anyhow::Result;
use cli::Prompter;
use config::Config;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    cli::run(&config, &mut prompter)
}
