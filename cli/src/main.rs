//! Interactive console front end for the scrapclash combat engine.
//!
//! Builds a three-unit team (menu or `--team`), then runs a match against
//! the boss with stdin-driven turns. `RUST_LOG=debug` surfaces the engine's
//! internal logging.

mod console;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use log::info;
use scrapclash_core::{run_match, Archetype, MatchOutcome, MatchState, MatchView, TEAM_SIZE};

use crate::console::{prompt_team, render_status, ConsoleChooser, ConsolePresenter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TeamPick {
    Attacker,
    Defender,
    Support,
    Sniper,
    Healer,
}

impl From<TeamPick> for Archetype {
    fn from(pick: TeamPick) -> Self {
        match pick {
            TeamPick::Attacker => Archetype::Attacker,
            TeamPick::Defender => Archetype::Defender,
            TeamPick::Support => Archetype::Support,
            TeamPick::Sniper => Archetype::Sniper,
            TeamPick::Healer => Archetype::Healer,
        }
    }
}

#[derive(Parser)]
#[command(name = "scrapclash", version, about = "Turn-based mech boss battle")]
struct Cli {
    /// Seed for the boss's target picks; defaults to the system clock
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the team-build menu: three comma-separated archetypes,
    /// e.g. `--team attacker,defender,healer`
    #[arg(long, value_delimiter = ',')]
    team: Option<Vec<TeamPick>>,

    /// Write the full event log to this file as JSON after the match
    #[arg(long)]
    dump_log: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!("boss targeting seed: {seed}");

    let picks: [Archetype; TEAM_SIZE] = match cli.team {
        Some(team) => {
            if team.len() != TEAM_SIZE {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("--team needs exactly {TEAM_SIZE} archetypes"),
                ));
            }
            [team[0].into(), team[1].into(), team[2].into()]
        }
        None => prompt_team()?,
    };

    let mut state = MatchState::new(picks);
    print!("{}", render_status(&MatchView::from_state(&state)));

    let mut chooser = ConsoleChooser::new(seed);
    let mut presenter = ConsolePresenter::new();
    let outcome = run_match(&mut state, &mut chooser, &mut presenter);

    match outcome {
        MatchOutcome::Victory => println!("The boss goes down after {} rounds. Victory!", state.round),
        MatchOutcome::Defeat => println!("The team is wiped out in round {}. Defeat.", state.round),
    }

    if let Some(path) = cli.dump_log {
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &presenter.events)?;
        println!("event log written to {}", path.display());
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
