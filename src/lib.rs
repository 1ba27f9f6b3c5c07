//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod screening;

pub use config::Config;
pub use error::{Result, ScreenerError};
pub use screening::{HaltReason, ScreeningOutcome, ScreeningPipeline, ScreeningRequest};
