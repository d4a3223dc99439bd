//! Game flow service: validate-then-commit appends and the oracle loop.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::games::GameService;
use crate::ai::DecisionOracle;
use crate::domain::{
    apply_turn, build_prompt, parse_decision, reconstruct, CurrentState, GameId, PlayerId,
    PlayerView, Turn, TurnAction,
};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::{games, players, turns};

/// A turn that made it into the log, with the state it produced.
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedTurn {
    pub turn: Turn,
    pub state: CurrentState,
}

/// One oracle cycle: what it was asked, what it said, and what got appended.
#[derive(Debug, Clone, Serialize)]
pub struct OracleTurn {
    pub player_id: PlayerId,
    pub prompt: String,
    pub response: String,
    pub action: TurnAction,
    pub submitted: SubmittedTurn,
}

/// Result of driving a game with the oracle.
#[derive(Debug, Clone, Serialize)]
pub struct PlayRun {
    pub turns_taken: usize,
    pub state: CurrentState,
}

/// Game flow service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Append `action` for `player_id` if it is legal right now.
    ///
    /// The game row is locked, the log replayed, and the candidate turn run
    /// through the same fold before anything is written, so a rejected
    /// action leaves the log untouched.
    pub async fn submit_action(
        &self,
        txn: &DatabaseTransaction,
        game_id: GameId,
        player_id: PlayerId,
        action: TurnAction,
    ) -> Result<SubmittedTurn, AppError> {
        debug!(game_id, player_id, ?action, "Submitting turn");

        let game = games::lock_game(txn, game_id).await?;
        let seats = players::find_all_by_game(txn, game_id).await?;
        let log = turns::find_all_by_game(txn, game_id).await?;
        let state = reconstruct(Some(&game), &seats, &log)?;

        if !state.is_game_active {
            return Err(DomainError::conflict(
                ConflictKind::GameOver,
                format!("Game {game_id} is over after {} mistakes", state.mistakes),
            )
            .into());
        }
        if state.player(player_id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not in game {game_id}"),
            )
            .into());
        }
        if state.active_player_id != player_id {
            return Err(DomainError::conflict(
                ConflictKind::NotActivePlayer,
                format!(
                    "It is player {}'s turn, not player {player_id}'s",
                    state.active_player_id
                ),
            )
            .into());
        }

        let candidate = Turn::from_action(game_id, player_id, action);
        let next = apply_turn(state, &candidate, &game.initial_deck)?;

        let turn = turns::create_turn(txn, game_id, player_id, action).await?;
        info!(
            game_id,
            player_id,
            turn_id = turn.id,
            ?action,
            mistakes = next.mistakes,
            hints_remaining = next.hints_remaining,
            "turn_appended"
        );
        Ok(SubmittedTurn { turn, state: next })
    }

    /// Ask the oracle for the active player's move and append it.
    ///
    /// The oracle is called outside any transaction. A response that does not
    /// parse is logged and returned as an error; no move is guessed.
    pub async fn take_oracle_turn(
        &self,
        db: &DatabaseConnection,
        oracle: &dyn DecisionOracle,
        game_id: GameId,
    ) -> Result<OracleTurn, AppError> {
        let state = GameService.load_state(db, game_id).await?;
        if !state.is_game_active {
            return Err(DomainError::conflict(
                ConflictKind::GameOver,
                format!("Game {game_id} is over"),
            )
            .into());
        }

        let view = PlayerView::for_active_player(&state)?;
        let prompt = build_prompt(&view);
        debug!(game_id, player = %view.viewer_name, oracle = oracle.name(), "\n{prompt}");

        let response = oracle.decide(&prompt).await?;
        let action = parse_decision(&response, &state).inspect_err(|e| {
            warn!(
                game_id,
                player = %view.viewer_name,
                response = %response,
                error = %e,
                "oracle_response_rejected"
            );
        })?;

        let txn = db.begin().await?;
        let submitted = self
            .submit_action(&txn, game_id, view.viewer_id, action)
            .await?;
        txn.commit().await?;

        Ok(OracleTurn {
            player_id: view.viewer_id,
            prompt,
            response,
            action,
            submitted,
        })
    }

    /// Take oracle turns until the game ends or `max_turns` have been taken.
    /// Stops at the first error.
    pub async fn play_until_done(
        &self,
        db: &DatabaseConnection,
        oracle: &dyn DecisionOracle,
        game_id: GameId,
        max_turns: usize,
    ) -> Result<PlayRun, AppError> {
        let mut state = GameService.load_state(db, game_id).await?;
        let mut turns_taken = 0;

        while state.is_game_active && turns_taken < max_turns {
            let taken = self.take_oracle_turn(db, oracle, game_id).await?;
            state = taken.submitted.state;
            turns_taken += 1;
        }

        info!(
            game_id,
            turns_taken,
            score = state.score(),
            mistakes = state.mistakes,
            is_game_active = state.is_game_active,
            "play_finished"
        );
        Ok(PlayRun { turns_taken, state })
    }
}
