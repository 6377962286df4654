//! Tournament CLI
//!
//! Run matches between Banqi engines and save the reports.

use anyhow::{bail, Context, Result};
use banqi_core::{Engine, GreedyEngine, StalemateRule};
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Banqi Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--max-plies P]");
    println!("                   [--seed S] [--stalemate any|own] [--out FILE]");
    println!("  tournament show <report.json>");
    println!();
    println!("Engines:");
    println!("  greedy        - Captures first, then random flips, then random moves");
    println!("  random        - Uniformly random legal action");
    println!();
    println!("Examples:");
    println!("  tournament match greedy random --games 100 --seed 7");
    println!("  tournament match greedy greedy --stalemate own --out selfplay.json");
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "greedy" => Ok(Box::new(GreedyEngine::new())),
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine: {spec}"),
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine names");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    let mut out = None;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" | "-g" => {
                config.num_games = flag_value(args, i, flag)?
                    .parse()
                    .context("--games expects a number")?;
            }
            "--max-plies" => {
                config.max_plies = flag_value(args, i, flag)?
                    .parse()
                    .context("--max-plies expects a number")?;
            }
            "--seed" | "-s" => {
                config.seed = Some(
                    flag_value(args, i, flag)?
                        .parse()
                        .context("--seed expects a number")?,
                );
            }
            "--stalemate" => {
                config.stalemate_rule = match flag_value(args, i, flag)? {
                    "any" => StalemateRule::AnyFaceDown,
                    "own" => StalemateRule::OwnFaceDown,
                    other => bail!("unknown stalemate rule: {other}"),
                };
            }
            "--out" | "-o" => out = Some(flag_value(args, i, flag)?.to_string()),
            _ => bail!("unknown option: {flag}"),
        }
        i += 2;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, ply cap: {}", config.num_games, config.max_plies);
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
    report.print_report();

    if let Some(path) = out {
        report
            .save(Path::new(&path))
            .with_context(|| format!("failed to save report to {path}"))?;
        println!("Report written to {path}");
    }
    Ok(())
}

fn show_report(args: &[String]) -> Result<()> {
    let path = args.first().context("show requires a report file")?;
    let report =
        MatchReport::load(Path::new(path)).with_context(|| format!("failed to load {path}"))?;
    report.print_report();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "show" => show_report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
