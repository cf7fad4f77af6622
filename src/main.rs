//! Command line driver: trains the learner against a random opponent and
//! prints how its results evolve.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tacto::game::variant::GameVariant;
use tacto::report::{self, Histogram, Summary};
use tacto::simulation::Simulator;
use tracing_subscriber::EnvFilter;

/// Number of games per line when printing the history.
const HISTORY_WIDTH: usize = 100;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Variant {
    /// 3x3 board, three in a row.
    TicTacToe,
    /// 5x5 board, four in a row.
    BigTacToe,
}

impl From<Variant> for GameVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::TicTacToe => Self::tic_tac_toe(),
            Variant::BigTacToe => Self::big_tac_toe(),
        }
    }
}

/// Plays the learner against a random opponent and reports how its results
/// change as it accumulates winning shapes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    /// Board to play on.
    #[arg(long, value_enum, default_value_t = Variant::BigTacToe)]
    variant: Variant,
    /// Number of games to play.
    #[arg(long, default_value_t = 10_000)]
    games: usize,
    /// Number of histogram bins the games are split into.
    #[arg(long, default_value_t = 50)]
    bins: usize,
    /// Seed for reproducible runs. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the winner of every game.
    #[arg(long)]
    print_history: bool,
    /// Print every learned shape.
    #[arg(long)]
    print_database: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    tacto::print_build_info();

    let rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut simulator = Simulator::new(config.variant.into(), rng);
    let history = simulator.play(config.games)?;

    if config.print_history {
        println!("{}", report::render_history_lines(history, HISTORY_WIDTH));
        println!();
    }
    print!("{}", Histogram::from_history(history, config.bins));
    println!("{}", Summary::from_history(history));

    if config.print_database {
        println!();
        print!("{}", simulator.database());
    }
    println!("Learned shapes: {}", simulator.database().len());
    Ok(())
}
