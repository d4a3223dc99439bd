//! Card parsing from the canonical text form (e.g., "RED 1", "WHITE 5")

use std::str::FromStr;

use super::cards_types::{Card, Color, Number};
use crate::errors::domain::{DomainError, ParseKind};

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::parse(ParseKind::Card, format!("Invalid color {s}")))
    }
}

impl FromStr for Number {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Number::from_value)
            .ok_or_else(|| DomainError::parse(ParseKind::Card, format!("Invalid number {s}")))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(' ');
        let (Some(color), Some(number), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::parse(
                ParseKind::Card,
                format!("Parse card: {s}"),
            ));
        };
        Ok(Card {
            color: color.parse()?,
            number: number.parse()?,
        })
    }
}

/// Parse a single `"<COLOR> <NUMBER>"` token.
pub fn parse_card(text: &str) -> Result<Card, DomainError> {
    text.parse()
}

/// Non-panicking helper to parse card tokens (e.g., "RED 1", "BLUE 4") into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
