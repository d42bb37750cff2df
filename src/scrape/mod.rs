// src/scrape/mod.rs
mod pipeline;

pub use pipeline::{GameFailure, GamePipeline, RunSummary};
