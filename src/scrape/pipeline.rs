// src/scrape/pipeline.rs
use std::{io::Write, ops::Range};

use crate::{
    config::ScrapeConfig,
    core::{Document, Transport},
    error::{FailureKind, GameError, RunError},
    file::OutputTables,
    progress::Progress,
    specs::{self, GameExtract},
};

/// One skipped game id and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFailure {
    pub game_id: u32,
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub written: usize,
    pub player_rows: usize,
    pub team_rows: usize,
    pub failures: Vec<GameFailure>,
}

impl RunSummary {
    pub fn failed(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }
}

/// Fetch → parse → extract → write, one game id at a time.
/// Holds the transport rather than being one, so tests can hand it a fake.
pub struct GamePipeline<'c, T: Transport> {
    config: &'c ScrapeConfig,
    transport: T,
}

impl<'c, T: Transport> GamePipeline<'c, T> {
    pub fn new(config: &'c ScrapeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Everything for one id, or the classified reason there is nothing.
    /// Never touches the output tables.
    pub fn process_game(&self, game_id: u32) -> Result<GameExtract, GameError> {
        let url = self.config.game_url(game_id);

        // Fetching
        let page = self
            .transport
            .fetch(&url)
            .map_err(|e| GameError::Unexpected { game_id, source: Box::new(e) })?;
        if !page.is_success() {
            return Err(GameError::Http { game_id, status: page.status });
        }

        // Parsing + extracting
        let doc = Document::parse(&page.body);
        specs::extract_all(&doc).map_err(|source| GameError::Parsing { game_id, source })
    }

    /// Walk `ids` in ascending order. Per-id failures are logged, counted and
    /// skipped; only a failing output table stops the run.
    pub fn run<W: Write>(
        &self,
        ids: Range<u32>,
        tables: &mut OutputTables<W>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(ids.len());
        }

        for game_id in ids {
            let _span = tracing::info_span!("game", id = game_id).entered();
            logf!("Processing game {game_id}");
            summary.attempted += 1;

            match self.process_game(game_id) {
                Ok(extract) => {
                    tables.write_game(game_id, &extract)?;
                    summary.written += 1;
                    summary.player_rows += extract.players.len();
                    summary.team_rows += extract.teams.len();
                    logf!(
                        "Game {game_id} processed: {} player rows, {} team rows",
                        extract.players.len(),
                        extract.teams.len()
                    );
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(game_id);
                    }
                }
                Err(e) => {
                    let message = e.chain();
                    match e.kind() {
                        FailureKind::Http => loge!("HTTP request failed for game {game_id}: {e}"),
                        FailureKind::Parsing => loge!("Could not parse game {game_id}: {message}"),
                        FailureKind::Unexpected => {
                            loge!("Unexpected error for game {game_id}: {message}");
                            loge!("Error detail: {e:?}");
                        }
                    }
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(game_id, e.kind(), &message);
                    }
                    summary.failures.push(GameFailure {
                        game_id,
                        kind: e.kind(),
                        message,
                    });
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!(
            "Run finished: {}/{} games written, {} failed",
            summary.written,
            summary.attempted,
            summary.failures.len()
        );
        Ok(summary)
    }
}
