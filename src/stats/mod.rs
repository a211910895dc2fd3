//! Stats module - trip statistics and report sections

mod calculator;
mod duration;
mod report;

pub use report::{full_report, SEPARATOR};
