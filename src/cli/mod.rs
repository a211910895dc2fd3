//! CLI module - interactive prompts, raw data browser and the session loop

mod browser;
mod filters;
mod prompt;
mod session;

pub use prompt::Prompter;
pub use session::run;
