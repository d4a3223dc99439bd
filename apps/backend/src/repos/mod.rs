//! Repository functions: adapters in, domain records out.

pub mod games;
pub mod players;
pub mod turns;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Decode a stored JSON array of card tokens.
pub(crate) fn decode_cards(
    value: serde_json::Value,
    what: &str,
) -> Result<Vec<crate::domain::Card>, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Stored {what} is not a list of cards: {e}"),
        )
    })
}

pub(crate) fn encode_cards(cards: &[crate::domain::Card]) -> Vec<String> {
    cards.iter().map(ToString::to_string).collect()
}
