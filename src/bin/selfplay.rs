//! Terminal self-play: the engine plays both sides with the trained
//! weights until a terminal outcome or the ply cap.

use std::time::Duration;

use chess_ai::{choose_move_with, Deadline, Outcome, Position, ThreatMap, Weights};

const MAX_PLIES: usize = 40;
const DEPTH: u32 = 2;
const BUDGET: Duration = Duration::from_secs(60);

fn main() {
    let mut position = Position::new();

    for ply in 1..=MAX_PLIES {
        let threats = ThreatMap::compute(&position);
        match threats.outcome() {
            Outcome::Ongoing => {}
            Outcome::WhiteWins => {
                println!("White wins");
                return;
            }
            Outcome::BlackWins => {
                println!("Black wins");
                return;
            }
            Outcome::Tie => {
                println!("Tie");
                return;
            }
        }

        let color = position.side_to_move();
        let deadline = Deadline::after(BUDGET);
        match choose_move_with(&position, color, DEPTH, deadline, &Weights::TRAINED) {
            Ok((value, mv)) => {
                println!("{ply:>3}. {color}: {mv} (value {value})");
                position = position.apply(mv);
            }
            Err(err) => {
                eprintln!("search failed: {err}");
                return;
            }
        }
    }

    println!("{position}");
    println!("stopped after {MAX_PLIES} plies");
}
