// tests/config_file.rs
//
// The shipped config parses, and its header rows line up with what the
// extractors emit for the sample page.
//
use std::fs;
use std::path::PathBuf;

use boxscore_scrape::config::consts::{DEFAULT_CONFIG_PATH, GAMES_FILE, PLAYER_STATS_FILE, TEAM_STATS_FILE};
use boxscore_scrape::core::Document;
use boxscore_scrape::specs::extract_all;
use boxscore_scrape::{ScrapeConfig, config::ConfigError};

fn manifest_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

#[test]
fn shipped_config_headers_match_row_widths() {
    let cfg = ScrapeConfig::load(&manifest_path(DEFAULT_CONFIG_PATH)).unwrap();
    assert!(!cfg.game_ids().is_empty());

    let html = fs::read_to_string(manifest_path("tests/fixtures/boxscore.html")).unwrap();
    let extract = extract_all(&Document::parse(&html)).unwrap();

    assert_eq!(cfg.headers_for(GAMES_FILE).len(), 1 + extract.game.to_row().len());
    assert_eq!(cfg.headers_for(PLAYER_STATS_FILE).len(), 1 + extract.players[0].fields().len());
    assert_eq!(cfg.headers_for(TEAM_STATS_FILE).len(), 1 + extract.teams[0].fields().len());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = ScrapeConfig::load(&manifest_path("config/nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}
