//! Run summary types and helpers.

mod failure;
mod run_summary;

pub use failure::FetchFailure;
pub use run_summary::RunSummary;
