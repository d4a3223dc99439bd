//! Game creation and state loading.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use tracing::info;

use crate::domain::rules::PLAYER_COUNT;
use crate::domain::{deal_initial_hands, reconstruct, shuffled_deck, CurrentState, GameId, PlayerId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::{games, players, turns};
use crate::utils::names::player_names;

/// Ids assigned to a freshly created game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedGame {
    pub game_id: GameId,
    /// Turn order.
    pub player_ids: Vec<PlayerId>,
}

/// Game domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Shuffle a deck, deal it, and persist the game with its players.
    ///
    /// The caller owns the transaction; nothing is visible until it commits.
    pub async fn create_game(
        &self,
        txn: &DatabaseTransaction,
        player_count: usize,
        seed: Option<u64>,
    ) -> Result<CreatedGame, AppError> {
        if !PLAYER_COUNT.contains(&player_count) {
            return Err(AppError::invalid(
                ErrorCode::InvalidPlayerCount,
                format!(
                    "Player count must be between {} and {}, got {player_count}",
                    PLAYER_COUNT.start(),
                    PLAYER_COUNT.end()
                ),
            ));
        }

        let deck = shuffled_deck(seed);
        let hands = deal_initial_hands(&deck, player_count)?;
        let names = player_names(player_count, seed);

        let game = games::create_game(txn, &deck).await?;
        let mut player_ids = Vec::with_capacity(player_count);
        for (name, hand) in names.iter().zip(&hands) {
            let player = players::create_player(txn, game.id, name, hand).await?;
            player_ids.push(player.id);
        }

        info!(game_id = game.id, player_count, seeded = seed.is_some(), "game_created");
        Ok(CreatedGame {
            game_id: game.id,
            player_ids,
        })
    }

    /// Load the game's records and replay the turn log.
    pub async fn load_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: GameId,
    ) -> Result<CurrentState, AppError> {
        let Some(game) = games::find_by_id(conn, game_id).await? else {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game_id} not found"),
            )
            .into());
        };
        let players = players::find_all_by_game(conn, game_id).await?;
        let turns = turns::find_all_by_game(conn, game_id).await?;
        Ok(reconstruct(Some(&game), &players, &turns)?)
    }
}
