// src/cli.rs
use std::path::PathBuf;

use crate::{
    config::{
        ScrapeConfig,
        consts::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_DIR, DEFAULT_OUT_DIR},
    },
    core::HttpTransport,
    error::{FailureKind, RunError},
    file::OutputTables,
    progress::Progress,
    scrape::{GamePipeline, RunSummary},
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid game id for {flag}: {value}")]
    BadId { flag: &'static str, value: String },
    #[error("Unknown arg: {0}")]
    UnknownArg(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub config: PathBuf,
    pub out_dir: PathBuf,
    pub log_dir: PathBuf,
    pub first_id: Option<u32>,
    pub end_id: Option<u32>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            first_id: None,
            end_id: None,
        }
    }
}

pub const HELP: &str = include_str!("cli_help.txt");

/// `Ok(None)` means help was asked for.
pub fn parse_args<I>(args: I) -> Result<Option<Params>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--config" => {
                params.config = PathBuf::from(args.next().ok_or(CliError::MissingValue("--config"))?);
            }
            "-o" | "--out" => {
                params.out_dir = PathBuf::from(args.next().ok_or(CliError::MissingValue("--out"))?);
            }
            "--logs" => {
                params.log_dir = PathBuf::from(args.next().ok_or(CliError::MissingValue("--logs"))?);
            }
            "--from" => params.first_id = Some(parse_id("--from", args.next())?),
            "--to" => params.end_id = Some(parse_id("--to", args.next())?),
            "-h" | "--help" => return Ok(None),
            _ => return Err(CliError::UnknownArg(a)),
        }
    }

    Ok(Some(params))
}

fn parse_id(flag: &'static str, v: Option<String>) -> Result<u32, CliError> {
    let v = v.ok_or(CliError::MissingValue(flag))?;
    v.trim().parse().map_err(|_| CliError::BadId { flag, value: v })
}

/// Prints one line per game id to stdout.
struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scraping {total} games…");
    }

    fn item_done(&mut self, game_id: u32) {
        self.seen += 1;
        println!("[{}/{}] game {game_id} ok", self.seen, self.total);
    }

    fn item_failed(&mut self, game_id: u32, kind: FailureKind, msg: &str) {
        self.seen += 1;
        println!("[{}/{}] game {game_id} skipped ({kind}): {msg}", self.seen, self.total);
    }
}

/// Whole run: logging, config, output tables, pipeline.
pub fn run(params: &Params) -> Result<RunSummary, RunError> {
    match crate::log::init(&params.log_dir) {
        Ok(path) => println!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: file logging disabled: {e}"),
    }
    logf!("Starting run");

    let config = ScrapeConfig::load(&params.config)?
        .with_range(params.first_id, params.end_id)?;

    // Client first: opening the tables truncates the previous run's output.
    let transport = HttpTransport::new(&config.user_agent, config.timeout())
        .map_err(RunError::Client)?;
    let mut tables = OutputTables::create(&params.out_dir, &config)?;
    let pipeline = GamePipeline::new(&config, transport);

    let mut progress = CliProgress { total: 0, seen: 0 };
    let summary = pipeline.run(config.game_ids(), &mut tables, Some(&mut progress))?;

    let [games, players, teams] = OutputTables::paths(&params.out_dir);
    println!(
        "Stats saved to {}, {} and {}",
        games.display(),
        players.display(),
        teams.display()
    );
    println!(
        "{} of {} games written ({} http, {} parsing, {} unexpected failures)",
        summary.written,
        summary.attempted,
        summary.failed(FailureKind::Http),
        summary.failed(FailureKind::Parsing),
        summary.failed(FailureKind::Unexpected),
    );
    logf!("Program finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let p = parse_args(args(&[])).unwrap().unwrap();
        assert_eq!(p, Params::default());
    }

    #[test]
    fn range_and_paths() {
        let p = parse_args(args(&["--from", "100", "--to", "120", "-o", "out", "--config", "c.json"]))
            .unwrap()
            .unwrap();
        assert_eq!((p.first_id, p.end_id), (Some(100), Some(120)));
        assert_eq!(p.out_dir, PathBuf::from("out"));
        assert_eq!(p.config, PathBuf::from("c.json"));
    }

    #[test]
    fn help_and_errors() {
        assert!(parse_args(args(&["-h"])).unwrap().is_none());
        assert!(matches!(parse_args(args(&["--to"])), Err(CliError::MissingValue("--to"))));
        assert!(matches!(parse_args(args(&["--from", "x"])), Err(CliError::BadId { .. })));
        assert!(matches!(parse_args(args(&["--all"])), Err(CliError::UnknownArg(_))));
    }

    #[test]
    fn bad_client_leaves_previous_output_alone() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(
            &config,
            r#"{"user_agent": "bad\nagent", "url_base": "http://127.0.0.1:9/",
                "url_num_inicial": 1, "url_num_final": 2}"#,
        )
        .unwrap();
        let out_dir = dir.path().join("Output");
        std::fs::create_dir(&out_dir).unwrap();
        let games = out_dir.join(crate::config::consts::GAMES_FILE);
        std::fs::write(&games, "id\n7,old\n").unwrap();

        let params = Params {
            config,
            out_dir,
            log_dir: dir.path().join("logs"),
            first_id: None,
            end_id: None,
        };
        assert!(matches!(run(&params), Err(RunError::Client(_))));
        assert_eq!(std::fs::read_to_string(&games).unwrap(), "id\n7,old\n");
    }
}
