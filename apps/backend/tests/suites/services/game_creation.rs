use std::collections::HashSet;

use backend_test_support::db::TestDb;
use hanabi::domain::shuffled_deck;
use hanabi::errors::ErrorCode;
use hanabi::repos::{games, players};
use hanabi::services::games::GameService;
use hanabi::utils::names::NAME_POOL;
use sea_orm::TransactionTrait;

#[tokio::test]
async fn seeded_game_is_dealt_from_the_stored_deck() {
    let db = TestDb::new().await.unwrap();

    let txn = db.conn.begin().await.unwrap();
    let created = GameService.create_game(&txn, 3, Some(7)).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(created.player_ids.len(), 3);
    let game = games::require_game(&db.conn, created.game_id).await.unwrap();
    assert_eq!(game.initial_deck, shuffled_deck(Some(7)));

    let seats = players::find_all_by_game(&db.conn, created.game_id).await.unwrap();
    for (i, seat) in seats.iter().enumerate() {
        assert_eq!(seat.initial_hand, game.initial_deck[i * 4..i * 4 + 4].to_vec());
        assert!(NAME_POOL.contains(&seat.name.as_str()));
    }
    let names: HashSet<_> = seats.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn new_game_state_is_the_initial_deal() {
    let db = TestDb::new().await.unwrap();

    let txn = db.conn.begin().await.unwrap();
    let created = GameService.create_game(&txn, 5, Some(3)).await.unwrap();
    txn.commit().await.unwrap();

    let state = GameService
        .load_state(&db.conn, created.game_id)
        .await
        .unwrap();
    assert_eq!(state.players.len(), 5);
    assert!(state.players.iter().all(|p| p.hand.len() == 4));
    assert_eq!(state.draw_cursor, 20);
    assert_eq!(state.hints_remaining, 8);
    assert_eq!(state.mistakes, 0);
    assert_eq!(state.active_player_id, created.player_ids[0]);
    assert!(state.is_game_active);
}

#[tokio::test]
async fn player_count_outside_two_to_five_is_rejected() {
    let db = TestDb::new().await.unwrap();

    for count in [0, 1, 6] {
        let txn = db.conn.begin().await.unwrap();
        let err = GameService.create_game(&txn, count, None).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPlayerCount);
        assert_eq!(err.status().as_u16(), 422);
    }
}

#[tokio::test]
async fn rolled_back_creation_leaves_nothing_behind() {
    let db = TestDb::new().await.unwrap();

    let txn = db.conn.begin().await.unwrap();
    let created = GameService.create_game(&txn, 2, None).await.unwrap();
    txn.rollback().await.unwrap();

    assert!(games::find_by_id(&db.conn, created.game_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn loading_a_missing_game_is_not_found() {
    let db = TestDb::new().await.unwrap();

    let err = GameService.load_state(&db.conn, 77).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}
