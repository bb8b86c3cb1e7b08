use clap::Parser;
use robopig::dice::die::Die;
use robopig::dice::SEED;
use robopig::game::engine::Engine;
use robopig::game::seat::Seat;
use robopig::game::TIME_LIMIT;
use robopig::players::Kind;

/// Pig at the terminal: first seat to bank 100 points wins.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Table {
    /// Who takes seat one.
    #[arg(long, value_enum, default_value = "human")]
    player1: Kind,
    /// Who takes seat two.
    #[arg(long, value_enum, default_value = "human")]
    player2: Kind,
    /// Put sixty seconds on the clock; highest score at the buzzer wins.
    #[arg(long)]
    timed: bool,
    /// Seed for the table die. The same seed rolls the same match.
    #[arg(long, default_value_t = SEED)]
    seed: u64,
}

fn main() {
    robopig::log();
    let table = Table::parse();
    log::info!(
        "seating {:?} and {:?} (seed {}, timed {})",
        table.player1,
        table.player2,
        table.seed,
        table.timed
    );
    let die = Box::new(Die::with_seed(table.seed));
    let one = Seat::new("Player 1", table.player1.into());
    let two = Seat::new("Player 2", table.player2.into());
    let mut engine = match table.timed {
        true => Engine::timed(one, two, die, TIME_LIMIT),
        false => Engine::new(one, two, die),
    };
    engine.play();
}
