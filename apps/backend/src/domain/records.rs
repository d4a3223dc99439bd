//! Immutable inputs to reconstruction: the game and its players.

use serde::Serialize;

use super::cards_types::Card;

pub type GameId = i32;
pub type PlayerId = i32;

/// A game as created: its deck order never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub initial_deck: Vec<Card>,
}

/// A seat at the table. Turn order is ascending `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: GameId,
    pub name: String,
    pub initial_hand: Vec<Card>,
}
