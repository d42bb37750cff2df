// src/config/consts.rs

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Input
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

// Logging
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "boxscore_scrape";
pub const LOG_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const LOG_BACKUPS: usize = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "Output";
pub const OUT_SEP: char = ',';

// Table file names; also the keys of `output_headers` in the config file.
pub const GAMES_FILE: &str = "partidos.csv";
pub const PLAYER_STATS_FILE: &str = "player_stats.csv";
pub const TEAM_STATS_FILE: &str = "estadisticas_total_equipo.csv";
