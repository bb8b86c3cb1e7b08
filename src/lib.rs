//! Pig at the terminal: two seats, one die, first to a hundred banked
//! points. Seats are occupied by humans at the prompt or by robots playing
//! the hold-at-25 line.

pub mod dice;
pub mod game;
pub mod players;

/// Banked scores and the stake riding on a turn.
pub type Points = u16;
/// Seat index at the table.
pub type Position = usize;

/// Initialize terminal logging. INFO and up, no location/target/thread noise.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
