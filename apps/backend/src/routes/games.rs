//! Game-related HTTP routes.

use actix_web::{web, HttpResponse};
use sea_orm::TransactionTrait;
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::domain::{build_prompt, parse_decision, PlayerView};
use crate::error::AppError;
use crate::extractors::{GameId, PlayerPath, ValidatedJson};
use crate::services::game_flow::GameFlowService;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    player_count: usize,
    #[serde(default)]
    seed: Option<u64>,
}

/// A turn in the decision text format, e.g. `"HINT Bob RED"` or `"PLAY 1"`.
#[derive(Debug, Deserialize)]
struct SubmitTurnRequest {
    player_id: i32,
    action: String,
}

#[derive(Debug, Serialize)]
struct PromptResponse {
    game_id: i32,
    player_id: i32,
    player_name: String,
    prompt: String,
}

/// POST /api/games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let db = require_db(&app_state)?;

    let txn = db.begin().await?;
    let created = GameService
        .create_game(&txn, body.player_count, body.seed)
        .await?;
    txn.commit().await?;

    Ok(HttpResponse::Created().json(created))
}

/// GET /api/games/{game_id}/state
///
/// The authoritative state with every hand visible.
async fn get_state(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let state = GameService.load_state(db, game_id.0).await?;
    Ok(HttpResponse::Ok().json(state))
}

/// GET /api/games/{game_id}/players/{player_id}/view
async fn get_player_view(
    game_id: GameId,
    player_id: PlayerPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let state = GameService.load_state(db, game_id.0).await?;
    let view = PlayerView::for_player(&state, player_id.0)?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /api/games/{game_id}/prompt
async fn get_prompt(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let state = GameService.load_state(db, game_id.0).await?;
    let view = PlayerView::for_active_player(&state)?;

    Ok(HttpResponse::Ok().json(PromptResponse {
        game_id: game_id.0,
        player_id: view.viewer_id,
        prompt: build_prompt(&view),
        player_name: view.viewer_name,
    }))
}

/// POST /api/games/{game_id}/turns
async fn submit_turn(
    game_id: GameId,
    body: ValidatedJson<SubmitTurnRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let db = require_db(&app_state)?;

    let state = GameService.load_state(db, game_id.0).await?;
    let action = parse_decision(&body.action, &state)?;

    let txn = db.begin().await?;
    let submitted = GameFlowService
        .submit_action(&txn, game_id.0, body.player_id, action)
        .await?;
    txn.commit().await?;

    Ok(HttpResponse::Created().json(submitted))
}

/// POST /api/games/{game_id}/advance
///
/// One oracle turn for whoever is active.
async fn advance(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let taken = GameFlowService
        .take_oracle_turn(db, app_state.oracle.as_ref(), game_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(taken))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}/state", web::get().to(get_state))
        .route(
            "/{game_id}/players/{player_id}/view",
            web::get().to(get_player_view),
        )
        .route("/{game_id}/prompt", web::get().to(get_prompt))
        .route("/{game_id}/turns", web::post().to(submit_turn))
        .route("/{game_id}/advance", web::post().to(advance));
}
