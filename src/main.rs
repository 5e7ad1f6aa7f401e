//! Bowling score keeper (default binary).
//!
//! Reads the players and one pin-state reading per throw from stdin, and
//! prints the score sheet after every round. `--random` plays the whole game
//! with simulated throws instead.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_bowling::core::SimpleRng;
use tui_bowling::engine::{simulate_round, Session, SessionError};
use tui_bowling::input::Prompter;
use tui_bowling::term::{ScoreTable, TableRenderer};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of players (asked for on stdin when omitted)
    #[arg(short, long)]
    players: Option<usize>,

    /// Simulate every throw instead of reading pin states
    #[arg(long)]
    random: bool,

    /// Seed for simulated throws
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Print the final scores as JSON after the game
    #[arg(long)]
    json: bool,

    /// Disable colours in the score sheet
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut renderer = TableRenderer::stdout(!args.plain);

    let count = match args.players {
        Some(count) => count,
        None => prompter.read_player_count()?,
    };
    let names = (1..=count)
        .map(|number| prompter.read_player_name(number))
        .collect::<Result<Vec<_>>>()?;
    let mut session = Session::new(names)?;

    if args.random {
        info!(seed = args.seed, "simulating game");
        run_random(&mut session, &mut renderer, args.seed)?;
    } else {
        run_interactive(&mut session, &mut prompter, &mut renderer)?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&session.snapshots())?;
        println!("{json}");
    }
    Ok(())
}

fn run_interactive<R: BufRead, W: Write, O: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    renderer: &mut TableRenderer<O>,
) -> Result<()> {
    while let Some(player) = session.current_player() {
        let name = player.name().to_string();
        let standing = prompter.read_standing_count(&name)?;
        match session.submit_standing_count(standing) {
            Ok(outcome) if outcome.ends_round() => draw(session, renderer)?,
            Ok(_) => {}
            // The reading cannot follow the previous one; ask again.
            Err(err @ SessionError::InvalidThrow(_)) => prompter.reject(&err)?,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_random<O: Write>(
    session: &mut Session,
    renderer: &mut TableRenderer<O>,
    seed: u32,
) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    while !session.is_finished() {
        simulate_round(session, &mut rng)?;
        println!("Round complete!");
        draw(session, renderer)?;
    }
    Ok(())
}

fn draw<O: Write>(session: &Session, renderer: &mut TableRenderer<O>) -> Result<()> {
    renderer.draw(&ScoreTable::from_snapshots(&session.snapshots()))
}
