//! Terminal rendering of a finished run.

use colored::Colorize;
use hanabi::domain::cards_display::print_card;
use hanabi::domain::{Card, Color, CurrentState, Number};

/// Board line with each pile's top card, or a dimmed colour name when empty.
pub fn board_line(state: &CurrentState) -> String {
    Color::ALL
        .iter()
        .map(|&color| match Number::from_value(state.board.height(color)) {
            Some(top) => print_card(&Card::new(color, top)).to_string(),
            None => format!("{color} -").dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn summary(state: &CurrentState, turns_taken: usize) -> String {
    let status = if state.is_game_active {
        "in progress".green()
    } else {
        "over".red()
    };
    format!(
        "Game {} {status}: score {}/25, mistakes {}/3, hints {}, {} turn(s) this run, {} total",
        state.game_id,
        state.score(),
        state.mistakes,
        state.hints_remaining,
        turns_taken,
        state.turns_applied,
    )
}

pub fn print_final(state: &CurrentState, turns_taken: usize) {
    println!();
    print!("{}", state.render_table());
    println!();
    println!("Board: {}", board_line(state));
    println!("{}", summary(state, turns_taken).bold());
}
