//! Terminal Banqi.
//!
//! Play against the AI or a friend from the command line. Settings come from
//! `banqi.toml` (or `--config FILE`); flags override single fields.

mod render;
mod session;
mod settings;

#[cfg(test)]
mod session_tests;

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use banqi_core::TurnOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::Session;
use crate::settings::{Mode, Settings};

const DEFAULT_CONFIG: &str = "banqi.toml";

fn print_usage() {
    println!("Usage: banqi [--config FILE] [--pvp] [--first|--second|--random-order]");
    println!("             [--seed N] [--delay MS]");
}

fn parse_args(args: &[String]) -> Result<Settings> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    if let Some(i) = args.iter().position(|a| a == "--config") {
        config_path = args
            .get(i + 1)
            .map(PathBuf::from)
            .context("--config needs a path")?;
    }
    let mut settings = Settings::load_or_default(&config_path)?;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => i += 1,
            "--pvp" => settings.mode = Mode::Pvp,
            "--first" => settings.turn_order = TurnOrder::HumanFirst,
            "--second" => settings.turn_order = TurnOrder::AiFirst,
            "--random-order" => settings.turn_order = TurnOrder::Random,
            "--seed" => {
                i += 1;
                let seed = args.get(i).context("--seed needs a value")?;
                settings.game.seed = Some(seed.parse().context("--seed expects a number")?);
            }
            "--delay" => {
                i += 1;
                let ms = args.get(i).context("--delay needs a value")?;
                settings.ai_delay_ms = ms.parse().context("--delay expects milliseconds")?;
            }
            other => {
                print_usage();
                bail!("unknown option: {other}");
            }
        }
        i += 1;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let settings = parse_args(&args)?;

    println!("Banqi (Chinese Dark Chess). Type 'help' for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(settings);
    session.run(stdin.lock(), &mut stdout)?;
    info!(status = ?session.game().status(), "session over");
    Ok(())
}
