//! What one player is allowed to see.
//!
//! A player's own seat carries only hint histories. Every other seat carries
//! real card identities.

use serde::Serialize;

use super::cards_types::Card;
use super::hints::HintRecord;
use super::records::{GameId, PlayerId};
use super::state::{BoardPiles, CurrentState};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatView {
    Own {
        player_id: PlayerId,
        name: String,
        hand_size: usize,
        hints: Vec<Vec<HintRecord>>,
    },
    Other {
        player_id: PlayerId,
        name: String,
        hand: Vec<Card>,
        hints: Vec<Vec<HintRecord>>,
    },
}

impl SeatView {
    pub fn name(&self) -> &str {
        match self {
            SeatView::Own { name, .. } | SeatView::Other { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub game_id: GameId,
    pub viewer_id: PlayerId,
    pub viewer_name: String,
    /// Table order, the viewer's own seat included.
    pub seats: Vec<SeatView>,
    pub board: BoardPiles,
    pub mistakes: u32,
    pub hints_remaining: u32,
    /// Everything the viewer has been told, oldest first.
    pub narration: Vec<String>,
    pub is_my_turn: bool,
    pub is_game_active: bool,
}

impl PlayerView {
    pub fn for_player(state: &CurrentState, viewer_id: PlayerId) -> Result<Self, DomainError> {
        let viewer = state.player(viewer_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {viewer_id} is not in game {}", state.game_id),
            )
        })?;

        let seats = state
            .players
            .iter()
            .map(|p| {
                if p.player_id == viewer_id {
                    SeatView::Own {
                        player_id: p.player_id,
                        name: p.name.clone(),
                        hand_size: p.hand.len(),
                        hints: p.hints.iter().take(p.hand.len()).cloned().collect(),
                    }
                } else {
                    SeatView::Other {
                        player_id: p.player_id,
                        name: p.name.clone(),
                        hand: p.hand.clone(),
                        hints: p.hints.iter().take(p.hand.len()).cloned().collect(),
                    }
                }
            })
            .collect();

        Ok(PlayerView {
            game_id: state.game_id,
            viewer_id,
            viewer_name: viewer.name.clone(),
            seats,
            board: state.board,
            mistakes: state.mistakes,
            hints_remaining: state.hints_remaining,
            narration: viewer.narration.clone(),
            is_my_turn: state.active_player_id == viewer_id,
            is_game_active: state.is_game_active,
        })
    }

    /// View of whoever is due to act.
    pub fn for_active_player(state: &CurrentState) -> Result<Self, DomainError> {
        Self::for_player(state, state.active_player_id)
    }

    pub fn other_names(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().filter_map(|s| match s {
            SeatView::Other { name, .. } => Some(name.as_str()),
            SeatView::Own { .. } => None,
        })
    }
}
