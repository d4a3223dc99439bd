//! DTOs for turns_sea adapter.

use crate::entities::turns::HintKind;

/// One turn row. Callers set exactly one action group.
#[derive(Debug, Clone)]
pub struct TurnCreate {
    pub game_id: i32,
    pub player_id: i32,
    pub hint_target_id: Option<i32>,
    pub hint_type: Option<HintKind>,
    pub discard_index: Option<i16>,
    pub play_index: Option<i16>,
}

impl TurnCreate {
    pub fn hint(game_id: i32, player_id: i32, target_id: i32, hint: HintKind) -> Self {
        Self {
            hint_target_id: Some(target_id),
            hint_type: Some(hint),
            ..Self::bare(game_id, player_id)
        }
    }

    pub fn discard(game_id: i32, player_id: i32, index: i16) -> Self {
        Self {
            discard_index: Some(index),
            ..Self::bare(game_id, player_id)
        }
    }

    pub fn play(game_id: i32, player_id: i32, index: i16) -> Self {
        Self {
            play_index: Some(index),
            ..Self::bare(game_id, player_id)
        }
    }

    fn bare(game_id: i32, player_id: i32) -> Self {
        Self {
            game_id,
            player_id,
            hint_target_id: None,
            hint_type: None,
            discard_index: None,
            play_index: None,
        }
    }
}
