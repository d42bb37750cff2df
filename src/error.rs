// src/error.rs
use std::{error::Error, fmt, io, path::PathBuf};

use crate::config::ConfigError;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Structural problem found while reading a box-score page.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("expected 8 partial scores, found {found}")]
    PartialScores { found: usize },
    #[error("expected 3 referees, found {found}")]
    RefereeCount { found: usize },
    #[error("malformed shot cell: {0:?}")]
    MalformedCell(String),
    #[error("expected at most 2 stat blocks, found {found}")]
    TooManyStatBlocks { found: usize },
    #[error("stat block {block} has no table")]
    MissingTable { block: usize },
    #[error("stat block {block} has no totals row")]
    MissingTotalsRow { block: usize },
    #[error("bad selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
}

/// Transport-level failure (connect, timeout, body read).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Http,
    Parsing,
    Unexpected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::Http => "http",
            FailureKind::Parsing => "parsing",
            FailureKind::Unexpected => "unexpected",
        })
    }
}

/// Why one game id produced no rows. Scoped to that id; never ends the run.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game {game_id}: HTTP request failed with status code {status}")]
    Http { game_id: u32, status: u16 },

    #[error("game {game_id}: could not parse box-score page")]
    Parsing {
        game_id: u32,
        #[source]
        source: ExtractError,
    },

    #[error("game {game_id}: unexpected failure")]
    Unexpected {
        game_id: u32,
        #[source]
        source: BoxError,
    },
}

impl GameError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GameError::Http { .. } => FailureKind::Http,
            GameError::Parsing { .. } => FailureKind::Parsing,
            GameError::Unexpected { .. } => FailureKind::Unexpected,
        }
    }

    pub fn game_id(&self) -> u32 {
        match self {
            GameError::Http { game_id, .. }
            | GameError::Parsing { game_id, .. }
            | GameError::Unexpected { game_id, .. } => *game_id,
        }
    }

    /// Message plus every `source()` below it, joined with ": ".
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut cur = self.source();
        while let Some(e) = cur {
            out.push_str(": ");
            out.push_str(&e.to_string());
            cur = e.source();
        }
        out
    }
}

/// Failures that end the whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not open output table {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("could not write output rows: {0}")]
    Write(#[from] io::Error),
}
