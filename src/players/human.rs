pub struct Human;

impl Player for Human {
    fn decide(&self, _: Points, _: Points) -> Choice {
        let input = Input::new()
            .with_prompt("Enter 'r' to roll or 'h' to hold")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                Choice::try_from(i.as_str()).map(|_| ())
            })
            .interact()
            .unwrap();
        Choice::try_from(input.as_str()).unwrap()
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::game::choice::Choice;
use crate::game::player::Player;
use crate::Points;
use dialoguer::Input;
use std::fmt::Debug;
use std::fmt::Formatter;
