//! Parsing the oracle's answer into a turn action.
//!
//! Accepted forms, keyword case-insensitive, indices 1-based:
//! `PLAY <n>`, `DISCARD <n>`, `HINT <name> <RED|YELLOW|GREEN|BLUE|WHITE|1..5>`.
//! Names are matched exactly against the players at the table.

use super::hints::HintType;
use super::state::CurrentState;
use super::turns::TurnAction;
use crate::errors::domain::{DomainError, ParseKind};

pub fn parse_decision(text: &str, state: &CurrentState) -> Result<TurnAction, DomainError> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let bad_shape = || {
        DomainError::parse(
            ParseKind::Decision,
            format!("Unrecognised decision: {text:?}"),
        )
    };

    let Some(keyword) = tokens.first() else {
        return Err(bad_shape());
    };

    match (keyword.to_ascii_uppercase().as_str(), &tokens[1..]) {
        ("PLAY", [index]) => Ok(TurnAction::Play {
            index: parse_index(index)?,
        }),
        ("DISCARD", [index]) => Ok(TurnAction::Discard {
            index: parse_index(index)?,
        }),
        ("HINT", [name, token]) => {
            let target = state
                .players
                .iter()
                .find(|p| p.name == *name)
                .ok_or_else(|| {
                    DomainError::parse(
                        ParseKind::PlayerName,
                        format!("No player named {name} in game {}", state.game_id),
                    )
                })?;
            let hint: HintType = token.to_ascii_uppercase().parse()?;
            Ok(TurnAction::Hint {
                target: target.player_id,
                hint,
            })
        }
        _ => Err(bad_shape()),
    }
}

/// 1-based card position to a 0-based slot.
fn parse_index(token: &str) -> Result<usize, DomainError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| {
            DomainError::parse(
                ParseKind::Decision,
                format!("Card index must be a positive integer, got {token:?}"),
            )
        })
}

