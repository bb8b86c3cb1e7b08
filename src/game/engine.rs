use super::choice::Choice;
use super::outcome::Outcome;
use super::seat::Seat;
use super::turn::Turn;
use super::GOAL;
use super::N;
use crate::dice::die::Dice;
use crate::dice::face::Face;
use crate::Position;
use colored::Colorize;
use std::cmp::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Runs a match of Pig: two seats, one die, alternating turns until a seat
/// banks the goal. A timed table carries a deadline consulted between
/// turns; the plain table is the same engine with no deadline at all.
pub struct Engine {
    seats: [Seat; N],
    die: Box<dyn Dice>,
    action: Position,
    turns: usize,
    until: Option<Instant>,
}

impl Engine {
    pub fn new(one: Seat, two: Seat, die: Box<dyn Dice>) -> Self {
        Self {
            seats: [one, two],
            die,
            action: 0,
            turns: 0,
            until: None,
        }
    }

    /// Same table, with the clock running. The match stops at the first
    /// turn boundary past the deadline; a turn in flight always finishes.
    pub fn timed(one: Seat, two: Seat, die: Box<dyn Dice>, limit: Duration) -> Self {
        let mut engine = Self::new(one, two, die);
        engine.until = Some(Instant::now() + limit);
        engine
    }

    /// Alternate turns until a seat banks the goal, or until the clock
    /// judges the table. First to the goal wins on the spot; the other
    /// seat gets no reply.
    pub fn play(&mut self) -> Outcome {
        let outcome = loop {
            if self.expired() {
                break self.judge();
            }
            self.turn();
            if let Some(position) = self.leader() {
                break Outcome::Winner(position);
            }
            self.rotate();
        };
        self.announce(outcome);
        outcome
    }

    fn turn(&mut self) {
        self.begin();
        let mut state = Turn::Rolling;
        while state == Turn::Rolling {
            state = self.round();
        }
    }

    /// One draw of the die, one decision. The seat is consulted every
    /// round, but a bust ends the turn no matter what it chose.
    fn round(&mut self) -> Turn {
        let face = self.die.roll();
        let live = self.seats[self.action].roll(face);
        self.report(face);
        match (self.seats[self.action].decide(), live) {
            (Choice::Roll, true) => Turn::Rolling,
            (Choice::Hold, true) => self.hold(),
            (_, false) => self.bust(),
        }
    }

    fn hold(&mut self) -> Turn {
        let banked = self.seats[self.action].stake();
        self.seats[self.action].hold();
        println!(
            "{} {:>2}  score {:>3}",
            "HOLD".green().bold(),
            banked,
            self.seats[self.action].score()
        );
        Turn::Held
    }

    fn bust(&mut self) -> Turn {
        println!("{}", "BUST".red().bold());
        Turn::Busted
    }

    fn begin(&mut self) {
        self.turns += 1;
        debug_assert_eq!(self.seats[self.action].stake(), 0);
        println!(
            "\n{}\nTURN {:<3} {}",
            "-".repeat(21),
            self.turns,
            self.seats[self.action].name().bold()
        );
    }

    fn report(&self, face: Face) {
        let ref seat = self.seats[self.action];
        println!(
            "{} {}  stake {:>3}  score {:>3}",
            "ROLL".cyan().bold(),
            face,
            seat.stake(),
            seat.score()
        );
    }

    fn rotate(&mut self) {
        self.action = (self.action + 1) % N;
    }

    fn leader(&self) -> Option<Position> {
        self.seats.iter().position(|seat| seat.score() >= GOAL)
    }

    fn expired(&self) -> bool {
        self.until.map_or(false, |t| Instant::now() >= t)
    }

    /// The clock's verdict: strictly higher score wins, a dead heat ties.
    fn judge(&self) -> Outcome {
        match self.seats[0].score().cmp(&self.seats[1].score()) {
            Ordering::Greater => Outcome::Winner(0),
            Ordering::Less => Outcome::Winner(1),
            Ordering::Equal => Outcome::Tie,
        }
    }

    fn announce(&self, outcome: Outcome) {
        log::debug!("match over after {} turns", self.turns);
        println!("\n{}", "-".repeat(21));
        for seat in self.seats.iter() {
            println!("{}", seat);
        }
        match outcome {
            Outcome::Winner(position) => {
                println!("\n{} wins!", self.seats[position].name().bold())
            }
            Outcome::Tie => println!("\n{}", "It's a tie!".bold()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::die::Die;
    use crate::dice::loaded::Loaded;
    use crate::game::TIME_LIMIT;
    use crate::players::robot::Robot;

    fn seat(name: &str) -> Seat {
        Seat::new(name, Box::new(Robot))
    }

    /// Bank a fixed score through the public API: roll sixes, top up, hold.
    fn bank(seat: &mut Seat, mut points: crate::Points) {
        while points > 7 {
            seat.roll(Face::Six);
            points -= 6;
        }
        match points {
            0 => {}
            7 => {
                seat.roll(Face::Three);
                seat.roll(Face::Four);
            }
            n => {
                seat.roll(Face::from(n as u8));
            }
        }
        seat.hold();
    }

    #[test]
    fn the_action_rotates() {
        let mut engine = Engine::new(seat("one"), seat("two"), Box::new(Loaded::from(vec![])));
        assert_eq!(engine.action, 0);
        engine.rotate();
        assert_eq!(engine.action, 1);
        engine.rotate();
        assert_eq!(engine.action, 0);
    }

    #[test]
    fn a_bust_spares_the_banked_score() {
        let mut one = seat("one");
        bank(&mut one, 70);
        let die = Box::new(Loaded::from(vec![5, 6, 6, 1]));
        let mut engine = Engine::new(one, seat("two"), die);
        engine.turn();
        assert_eq!(engine.seats[0].score(), 70);
        assert_eq!(engine.seats[0].stake(), 0);
        assert_eq!(engine.turns, 1);
    }

    #[test]
    fn a_winning_hold_ends_the_match_on_the_spot() {
        let mut one = seat("one");
        bank(&mut one, 80);
        let die = Box::new(Loaded::from(vec![6, 6, 6, 6]));
        let mut engine = Engine::new(one, seat("two"), die);
        let outcome = engine.play();
        assert_eq!(outcome, Outcome::Winner(0));
        assert_eq!(engine.seats[0].score(), 104);
        assert_eq!(engine.seats[1].score(), 0);
        assert_eq!(engine.turns, 1);
    }

    #[test]
    fn a_dead_heat_at_the_deadline_is_a_tie() {
        let mut one = seat("one");
        let mut two = seat("two");
        bank(&mut one, 64);
        bank(&mut two, 64);
        let die = Box::new(Loaded::from(vec![]));
        let mut engine = Engine::timed(one, two, die, Duration::ZERO);
        assert_eq!(engine.play(), Outcome::Tie);
        assert_eq!(engine.turns, 0);
    }

    #[test]
    fn the_higher_score_wins_at_the_deadline() {
        let mut one = seat("one");
        let mut two = seat("two");
        bank(&mut one, 70);
        bank(&mut two, 55);
        let die = Box::new(Loaded::from(vec![]));
        let mut engine = Engine::timed(one, two, die, Duration::ZERO);
        assert_eq!(engine.play(), Outcome::Winner(0));

        let mut one = seat("one");
        let mut two = seat("two");
        bank(&mut one, 55);
        bank(&mut two, 70);
        let die = Box::new(Loaded::from(vec![]));
        let mut engine = Engine::timed(one, two, die, Duration::ZERO);
        assert_eq!(engine.play(), Outcome::Winner(1));
    }

    #[test]
    fn the_goal_still_wins_on_a_timed_table() {
        let die = Box::new(Die::with_seed(7));
        let mut engine = Engine::timed(seat("one"), seat("two"), die, TIME_LIMIT);
        let winner = match engine.play() {
            Outcome::Winner(w) => w,
            Outcome::Tie => panic!("finished well inside the deadline"),
        };
        assert!(engine.seats[winner].score() >= GOAL);
        assert!(engine.seats[1 - winner].score() < GOAL);
    }

    #[test]
    fn a_turn_in_flight_outlives_the_clock() {
        struct Sluggish(Loaded);
        impl Dice for Sluggish {
            fn roll(&mut self) -> Face {
                std::thread::sleep(Duration::from_millis(60));
                self.0.roll()
            }
        }
        let die = Box::new(Sluggish(Loaded::from(vec![6, 6, 6, 6, 6])));
        let mut engine = Engine::timed(seat("one"), seat("two"), die, Duration::from_millis(200));
        assert_eq!(engine.play(), Outcome::Winner(0));
        assert_eq!(engine.seats[0].score(), 30);
        assert_eq!(engine.turns, 1);
    }

    #[test]
    fn robots_always_finish_what_they_start() {
        for seed in 0..32 {
            let die = Box::new(Die::with_seed(seed));
            let mut engine = Engine::new(seat("one"), seat("two"), die);
            let winner = match engine.play() {
                Outcome::Winner(w) => w,
                Outcome::Tie => panic!("untimed tables cannot tie"),
            };
            assert!(engine.seats[winner].score() >= GOAL);
            assert!(engine.seats[winner].score() < GOAL + 30);
            assert!(engine.seats[1 - winner].score() < GOAL);
        }
    }
}
