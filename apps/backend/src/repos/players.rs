//! Player repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use super::{decode_cards, encode_cards};
use crate::adapters::players_sea as players_adapter;
use crate::domain::{Card, GameId, Player};
use crate::entities::players;
use crate::errors::domain::DomainError;

impl TryFrom<players::Model> for Player {
    type Error = DomainError;

    fn try_from(model: players::Model) -> Result<Self, Self::Error> {
        Ok(Player {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
            initial_hand: decode_cards(model.initial_hand, "hand")?,
        })
    }
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    game_id: GameId,
    name: &str,
    hand: &[Card],
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate::new(game_id, name, encode_cards(hand));
    let player = players_adapter::create_player(txn, dto).await?;
    Player::try_from(player)
}

/// Players in turn order (ascending id).
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<Vec<Player>, DomainError> {
    players_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Player::try_from)
        .collect()
}
