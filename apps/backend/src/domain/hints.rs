//! Hint vocabulary and the per-card record a hint leaves behind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Color, Number};
use crate::errors::domain::{DomainError, ParseKind};

/// One of the ten hints: a colour or a number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HintType {
    Color(Color),
    Number(Number),
}

impl HintType {
    pub const ALL: [HintType; 10] = [
        HintType::Color(Color::Red),
        HintType::Color(Color::Blue),
        HintType::Color(Color::Green),
        HintType::Color(Color::Yellow),
        HintType::Color(Color::White),
        HintType::Number(Number::One),
        HintType::Number(Number::Two),
        HintType::Number(Number::Three),
        HintType::Number(Number::Four),
        HintType::Number(Number::Five),
    ];

    pub fn matches(self, card: &Card) -> bool {
        match self {
            HintType::Color(color) => card.color == color,
            HintType::Number(number) => card.number == number,
        }
    }

    /// Lowercase word used in narration ("red", "three").
    pub const fn word(self) -> &'static str {
        match self {
            HintType::Color(c) => c.word(),
            HintType::Number(n) => n.word(),
        }
    }

    /// Stored form (`COLOR_RED` .. `NUMBER_FIVE`).
    pub const fn code(self) -> &'static str {
        match self {
            HintType::Color(Color::Red) => "COLOR_RED",
            HintType::Color(Color::Blue) => "COLOR_BLUE",
            HintType::Color(Color::Green) => "COLOR_GREEN",
            HintType::Color(Color::Yellow) => "COLOR_YELLOW",
            HintType::Color(Color::White) => "COLOR_WHITE",
            HintType::Number(Number::One) => "NUMBER_ONE",
            HintType::Number(Number::Two) => "NUMBER_TWO",
            HintType::Number(Number::Three) => "NUMBER_THREE",
            HintType::Number(Number::Four) => "NUMBER_FOUR",
            HintType::Number(Number::Five) => "NUMBER_FIVE",
        }
    }

    pub fn from_code(code: &str) -> Result<HintType, DomainError> {
        HintType::ALL
            .into_iter()
            .find(|h| h.code() == code)
            .ok_or_else(|| {
                DomainError::parse(ParseKind::HintType, format!("Invalid hint type {code}"))
            })
    }

    /// Decision-text token (`RED`, `3`).
    pub fn token(self) -> String {
        match self {
            HintType::Color(c) => c.as_str().to_string(),
            HintType::Number(n) => n.value().to_string(),
        }
    }
}

/// Parses the decision vocabulary: `RED`, `YELLOW`, `GREEN`, `BLUE`, `WHITE`, `1`..`5`.
/// Anything else is rejected; there is no fallback.
impl FromStr for HintType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HintType::ALL
            .into_iter()
            .find(|h| h.token() == s)
            .ok_or_else(|| {
                DomainError::parse(ParseKind::HintType, format!("Invalid hint type {s}"))
            })
    }
}

impl TryFrom<String> for HintType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HintType::from_code(&value)
    }
}

impl From<HintType> for String {
    fn from(value: HintType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for HintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// What one card learned from one hint: it is, or is not, of `hint`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HintRecord {
    pub hint: HintType,
    pub negated: bool,
}

impl fmt::Display for HintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not {}", self.hint.word())
        } else {
            f.write_str(self.hint.word())
        }
    }
}

pub fn hint_matches(hint: HintType, card: &Card) -> bool {
    hint.matches(card)
}

/// Record for one slot. An empty slot never matches.
pub fn record_hint(hint: HintType, card: Option<&Card>) -> HintRecord {
    HintRecord {
        hint,
        negated: !card.is_some_and(|c| hint.matches(c)),
    }
}

/// `"is red, is not three"`, the form used in prompts and table dumps.
pub fn describe_history(history: &[HintRecord]) -> String {
    history
        .iter()
        .map(|h| format!("is {h}"))
        .collect::<Vec<_>>()
        .join(", ")
}
