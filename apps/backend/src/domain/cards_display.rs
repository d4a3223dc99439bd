//! Text rendering for cards: canonical tokens and colour-coded terminal output.

use std::fmt;

use colored::{ColoredString, Colorize};

use super::cards_types::{Card, Color, Number};

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.number)
    }
}

/// `"RED 1, BLUE 3, ..."`
pub fn hand_to_string(hand: &[Card]) -> String {
    hand.iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Single digit painted in the card's colour.
pub fn print_card(card: &Card) -> ColoredString {
    let digit = card.number.value().to_string();
    match card.color {
        Color::Red => digit.red(),
        Color::Blue => digit.blue(),
        Color::Green => digit.green(),
        Color::Yellow => digit.yellow(),
        Color::White => digit.white(),
    }
}

pub fn print_hand(hand: &[Card]) -> String {
    hand.iter()
        .map(|c| print_card(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
