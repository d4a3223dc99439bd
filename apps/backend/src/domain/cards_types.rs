//! Core card-related types: Card, Color, Number

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
}

impl Color {
    /// Canonical deck order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::White,
    ];

    /// Uppercase token used in card text and decision text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::White => "WHITE",
        }
    }

    /// Lowercase word used when a hint is narrated.
    pub const fn word(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Number {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Number {
    pub const ALL: [Number; 5] = [
        Number::One,
        Number::Two,
        Number::Three,
        Number::Four,
        Number::Five,
    ];

    pub const fn value(self) -> u8 {
        match self {
            Number::One => 1,
            Number::Two => 2,
            Number::Three => 3,
            Number::Four => 4,
            Number::Five => 5,
        }
    }

    pub const fn from_value(value: u8) -> Option<Number> {
        match value {
            1 => Some(Number::One),
            2 => Some(Number::Two),
            3 => Some(Number::Three),
            4 => Some(Number::Four),
            5 => Some(Number::Five),
            _ => None,
        }
    }

    /// How many copies of this number each color has in the deck.
    pub const fn copies(self) -> usize {
        match self {
            Number::One => 3,
            Number::Two | Number::Three | Number::Four => 2,
            Number::Five => 1,
        }
    }

    pub const fn word(self) -> &'static str {
        match self {
            Number::One => "one",
            Number::Two => "two",
            Number::Three => "three",
            Number::Four => "four",
            Number::Five => "five",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub color: Color,
    pub number: Number,
}

impl Card {
    pub const fn new(color: Color, number: Number) -> Self {
        Self { color, number }
    }
}
