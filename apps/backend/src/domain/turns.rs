//! Turn log entries and the action each one carries.

use serde::Serialize;

use super::hints::HintType;
use super::records::{GameId, PlayerId};
use crate::errors::domain::DomainError;

/// What a player did on their turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnAction {
    Hint { target: PlayerId, hint: HintType },
    Discard { index: usize },
    Play { index: usize },
}

/// A persisted turn. Exactly one action group is set on a well-formed row;
/// [`Turn::action`] enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub id: i32,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub hint_target_id: Option<PlayerId>,
    pub hint_type: Option<HintType>,
    pub discard_index: Option<usize>,
    pub play_index: Option<usize>,
}

impl Turn {
    /// Build the row for `action`, before it has an id.
    pub fn from_action(game_id: GameId, player_id: PlayerId, action: TurnAction) -> Self {
        let mut turn = Turn {
            id: 0,
            game_id,
            player_id,
            hint_target_id: None,
            hint_type: None,
            discard_index: None,
            play_index: None,
        };
        match action {
            TurnAction::Hint { target, hint } => {
                turn.hint_target_id = Some(target);
                turn.hint_type = Some(hint);
            }
            TurnAction::Discard { index } => turn.discard_index = Some(index),
            TurnAction::Play { index } => turn.play_index = Some(index),
        }
        turn
    }

    pub fn action(&self) -> Result<TurnAction, DomainError> {
        let hint = match (self.hint_target_id, self.hint_type) {
            (Some(target), Some(hint)) => Some(TurnAction::Hint { target, hint }),
            (None, None) => None,
            _ => {
                return Err(DomainError::invalid_turn(format!(
                    "Turn {} has a hint target without a hint type or the reverse",
                    self.id
                )))
            }
        };
        let discard = self.discard_index.map(|index| TurnAction::Discard { index });
        let play = self.play_index.map(|index| TurnAction::Play { index });

        let mut set = [hint, discard, play].into_iter().flatten();
        match (set.next(), set.next()) {
            (Some(action), None) => Ok(action),
            (None, _) => Err(DomainError::invalid_turn(format!(
                "Turn {} has no action",
                self.id
            ))),
            (Some(_), Some(_)) => Err(DomainError::invalid_turn(format!(
                "Turn {} has more than one action",
                self.id
            ))),
        }
    }
}
