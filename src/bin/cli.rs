// src/bin/cli.rs
use boxscore_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let Some(params) = cli::parse_args(std::env::args().skip(1))? else {
        eprintln!("{}", cli::HELP);
        return Ok(());
    };
    cli::run(&params)?;
    Ok(())
}
