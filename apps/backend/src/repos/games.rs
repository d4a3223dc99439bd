//! Game repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use super::{decode_cards, encode_cards};
use crate::adapters::games_sea as games_adapter;
use crate::domain::{Card, Game, GameId};
use crate::entities::games;
use crate::errors::domain::DomainError;

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        Ok(Game {
            id: model.id,
            initial_deck: decode_cards(model.initial_deck, "deck")?,
        })
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_by_id(conn, game_id)
        .await?
        .map(Game::try_from)
        .transpose()
}

/// Find game by ID or return a `NotFound(Game)` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

/// Lock the game row and load it. Appends call this first.
pub async fn lock_game(txn: &DatabaseTransaction, game_id: GameId) -> Result<Game, DomainError> {
    let game = games_adapter::lock_game(txn, game_id).await?;
    Game::try_from(game)
}

pub async fn create_game(txn: &DatabaseTransaction, deck: &[Card]) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(encode_cards(deck));
    let game = games_adapter::create_game(txn, dto).await?;
    Game::try_from(game)
}
