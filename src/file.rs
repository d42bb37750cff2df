// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::ScrapeConfig;
use crate::config::consts::{GAMES_FILE, OUT_SEP, PLAYER_STATS_FILE, TEAM_STATS_FILE};
use crate::csv::write_row;
use crate::error::RunError;
use crate::specs::{GameExtract, StatLine};

/// One append-only output table. The header row goes out on creation,
/// even when it is empty.
pub struct TableSink<W: Write> {
    name: &'static str,
    out: W,
    rows: usize,
}

impl<W: Write> TableSink<W> {
    pub fn new(name: &'static str, mut out: W, headers: &[String]) -> io::Result<Self> {
        write_row(&mut out, headers, OUT_SEP)?;
        out.flush()?;
        Ok(Self { name, out, rows: 0 })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Data rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Write a batch of already-rendered rows in one go.
    fn append(&mut self, rendered: &[u8], count: usize) -> io::Result<()> {
        self.out.write_all(rendered)?;
        self.out.flush()?;
        self.rows += count;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The three tables of a run: games, player stats, team stats.
pub struct OutputTables<W: Write> {
    pub games: TableSink<W>,
    pub players: TableSink<W>,
    pub teams: TableSink<W>,
}

impl OutputTables<BufWriter<File>> {
    /// Create (truncate) the three files under `dir`.
    pub fn create(dir: &Path, config: &ScrapeConfig) -> Result<Self, RunError> {
        ensure_directory(dir).map_err(|source| RunError::Output {
            path: dir.to_path_buf(),
            source,
        })?;

        let open = |name: &'static str| -> Result<TableSink<BufWriter<File>>, RunError> {
            let path = dir.join(name);
            File::create(&path)
                .map(BufWriter::new)
                .and_then(|w| TableSink::new(name, w, config.headers_for(name)))
                .map_err(|source| RunError::Output { path, source })
        };

        Ok(Self {
            games: open(GAMES_FILE)?,
            players: open(PLAYER_STATS_FILE)?,
            teams: open(TEAM_STATS_FILE)?,
        })
    }

    pub fn paths(dir: &Path) -> [PathBuf; 3] {
        [GAMES_FILE, PLAYER_STATS_FILE, TEAM_STATS_FILE].map(|name| dir.join(name))
    }
}

impl<W: Write> OutputTables<W> {
    /// Wrap arbitrary writers (in-memory buffers in tests).
    pub fn from_writers(games: W, players: W, teams: W, config: &ScrapeConfig) -> io::Result<Self> {
        Ok(Self {
            games: TableSink::new(GAMES_FILE, games, config.headers_for(GAMES_FILE))?,
            players: TableSink::new(PLAYER_STATS_FILE, players, config.headers_for(PLAYER_STATS_FILE))?,
            teams: TableSink::new(TEAM_STATS_FILE, teams, config.headers_for(TEAM_STATS_FILE))?,
        })
    }

    /// Emit every row of one game, each prefixed with its id.
    /// All rows are rendered before any table is touched.
    pub fn write_game(&mut self, game_id: u32, extract: &GameExtract) -> io::Result<()> {
        let id = game_id.to_string();

        let mut games = Vec::new();
        let mut row = vec![id.clone()];
        row.extend(extract.game.to_row());
        write_row(&mut games, &row, OUT_SEP)?;

        let players = render_lines(&id, &extract.players)?;
        let teams = render_lines(&id, &extract.teams)?;

        self.games.append(&games, 1)?;
        self.players.append(&players, extract.players.len())?;
        self.teams.append(&teams, extract.teams.len())?;
        Ok(())
    }

    pub fn into_inner(self) -> (W, W, W) {
        (self.games.into_inner(), self.players.into_inner(), self.teams.into_inner())
    }
}

fn render_lines(id: &str, lines: &[StatLine]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    for line in lines {
        let mut row = vec![s!(id)];
        row.extend(line.fields());
        write_row(&mut buf, &row, OUT_SEP)?;
    }
    Ok(buf)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Document;
    use crate::specs::extract_all;

    const PAGE: &str = include_str!("../tests/fixtures/boxscore.html");

    fn config(headers: &str) -> ScrapeConfig {
        ScrapeConfig::from_json(&format!(
            r#"{{"user_agent": "t", "url_base": "http://x/", "url_num_inicial": 1,
                "url_num_final": 2, "output_headers": {headers}}}"#
        ))
        .unwrap()
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_header_entry_writes_blank_line() {
        let cfg = config(r#"{"partidos.csv": ["id", "local"]}"#);
        let tables = OutputTables::from_writers(Vec::new(), Vec::new(), Vec::new(), &cfg).unwrap();
        let (games, players, teams) = tables.into_inner();
        assert_eq!(text(games), "id,local\n");
        assert_eq!(text(players), "\n");
        assert_eq!(text(teams), "\n");
    }

    #[test]
    fn game_rows_are_prefixed_with_id() {
        let cfg = config("{}");
        let doc = Document::parse(PAGE);
        let extract = extract_all(&doc).unwrap();

        let mut tables = OutputTables::from_writers(Vec::new(), Vec::new(), Vec::new(), &cfg).unwrap();
        tables.write_game(42, &extract).unwrap();
        assert_eq!(tables.games.rows_written(), 1);
        assert_eq!(tables.players.rows_written(), 5);
        assert_eq!(tables.teams.rows_written(), 2);

        let (games, players, teams) = tables.into_inner();
        let games = text(games);
        assert!(games.starts_with("\n42,Valencia Basket,88,Baskonia,79,\"22,19,25,22\""));
        assert!(text(players).lines().skip(1).all(|l| l.starts_with("42,")));
        let teams = text(teams);
        let team_lines: Vec<&str> = teams.lines().skip(1).collect();
        assert!(team_lines[0].starts_with("42,Valencia Basket,200:00,88,25,48,52.1,"));
        assert!(team_lines[1].starts_with("42,Baskonia,"));
    }

    #[test]
    fn create_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("Output");
        let tables = OutputTables::create(&out, &config("{}")).unwrap();
        assert_eq!(tables.games.name(), GAMES_FILE);
        drop(tables);
        for path in OutputTables::paths(&out) {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }

    #[test]
    fn create_fails_when_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("Output");
        fs::write(&blocker, "not a dir").unwrap();
        assert!(matches!(
            OutputTables::create(&blocker, &config("{}")),
            Err(RunError::Output { .. })
        ));
    }
}
