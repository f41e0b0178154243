//! Strictly Connect - CLI entry point

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_connect::cli::{Cli, Command};
use strictly_connect::{
    ComputerPlayer, EngineConfig, GameReport, Mark, Player, Preset, ScriptedPlayer, SelfPlay,
};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            preset,
            seed,
            script,
            json,
        } => run_play(config, preset, seed, script, json),
        Command::Config { preset } => print_config(preset),
    }
}

/// Play one game and print the report
#[instrument(skip(script))]
fn run_play(
    config: Option<PathBuf>,
    preset: Option<Preset>,
    seed: Option<u64>,
    script: Option<String>,
    json: bool,
) -> Result<()> {
    let config = match (config, preset) {
        (Some(path), _) => EngineConfig::from_file(path)?,
        (None, Some(preset)) => EngineConfig::preset(preset),
        (None, None) => EngineConfig::default(),
    }
    .with_seed(seed);

    let driver = SelfPlay::new(config.clone())?;
    let mut second = ComputerPlayer::new("computer-o", Mark::O, &config)?;
    let mut first: Box<dyn Player> = match script {
        Some(script) => {
            info!("Player X follows the script");
            Box::new(ScriptedPlayer::parse("scripted-x", Mark::X, &script)?)
        }
        None => Box::new(ComputerPlayer::new("computer-x", Mark::X, &config)?),
    };

    let report = driver.run(first.as_mut(), &mut second)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &GameReport) {
    for row in report.board() {
        println!("{}", row);
    }
    println!();
    for (idx, record) in report.moves().iter().enumerate() {
        println!(
            "{:>3}. {} ({}) {}",
            idx + 1,
            record.player(),
            record.mark(),
            record.chosen()
        );
    }
    println!();
    println!("{}", report.outcome());
}

/// Print the preset configuration as TOML
fn print_config(preset: Preset) -> Result<()> {
    let config = EngineConfig::preset(preset);
    print!("{}", config.to_toml()?);
    Ok(())
}
