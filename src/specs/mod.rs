// src/specs/mod.rs
//! # Box-score page specs
//!
//! Everything that knows *where the data lives* in a game page. Each module
//! reads one kind of record from a parsed [`Document`] and nothing else:
//!
//! - `game`    – one [`GameRecord`] (teams, scores, partials, date, referees, venue)
//! - `players` – one [`StatLine`] per player row, both stat blocks
//! - `teams`   – one [`StatLine`] per stat block, from the totals row
//! - `cells`   – the shared cell decoder (plain token vs. `made/att pct%`)
//! - `boxscore`– shared layout: team header blocks, stat tables, sides
//!
//! ## Conventions
//! - Local vs. visiting is decided by **position** (first block vs. second),
//!   never by labels on the page.
//! - Positions are fixed. A missing element is an [`ExtractError`]; there is no
//!   partial-record recovery.
//! - No fetching, no writing, no logging here. The pipeline decides what a
//!   failure means for the run.
//!
//! ```text
//! scrape::GamePipeline → fetch → Document::parse → specs::extract_all
//!                                                 ↘ file::OutputTables
//! ```
pub mod boxscore;
pub mod cells;
pub mod game;
pub mod players;
pub mod teams;

use crate::core::Document;
use crate::error::ExtractError;

pub use boxscore::{Side, StatLine};
pub use cells::{Cell, decode_cell};
pub use game::{GameRecord, extract_game};
pub use players::extract_player_stats;
pub use teams::{TEAM_TOTALS_SKIPPED_COLUMNS, extract_team_stats};

/// Everything read from one page. Only built when all three extractors succeed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameExtract {
    pub game: GameRecord,
    pub players: Vec<StatLine>,
    pub teams: Vec<StatLine>,
}

pub fn extract_all(doc: &Document) -> Result<GameExtract, ExtractError> {
    Ok(GameExtract {
        game: extract_game(doc)?,
        players: extract_player_stats(doc)?,
        teams: extract_team_stats(doc)?,
    })
}
