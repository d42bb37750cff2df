// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use config::ScrapeConfig;
pub use error::{FailureKind, GameError, RunError};
pub use scrape::{GamePipeline, RunSummary};
