use backend_test_support::db::TestDb;
use hanabi::domain::{Color, HintType, Number, TurnAction};
use hanabi::errors::ErrorCode;
use hanabi::repos::turns;
use hanabi::services::games::GameService;

use crate::support::{alice_and_bob, submit};

fn hint_red(target: i32) -> TurnAction {
    TurnAction::Hint {
        target,
        hint: HintType::Color(Color::Red),
    }
}

#[tokio::test]
async fn legal_play_is_appended_and_applied() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let alice = table.player_ids[0];

    let submitted = submit(&db.conn, table.game_id, alice, TurnAction::Play { index: 0 })
        .await
        .unwrap();

    assert_eq!(submitted.turn.play_index, Some(0));
    assert_eq!(submitted.state.board.height(Color::Red), 1);
    assert_eq!(submitted.state.active_player_id, table.player_ids[1]);
    assert_eq!(submitted.state.players[0].hand[0], table.deck[8]);

    let reloaded = GameService
        .load_state(&db.conn, table.game_id)
        .await
        .unwrap();
    assert_eq!(reloaded, submitted.state);
}

#[tokio::test]
async fn out_of_turn_submission_is_a_conflict_and_not_persisted() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;

    let err = submit(
        &db.conn,
        table.game_id,
        table.player_ids[1],
        TurnAction::Play { index: 0 },
    )
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotActivePlayer);
    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 0);
}

#[tokio::test]
async fn rule_violations_are_rejected_before_anything_is_written() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let alice = table.player_ids[0];

    let self_hint = submit(&db.conn, table.game_id, alice, hint_red(alice))
        .await
        .unwrap_err();
    assert_eq!(self_hint.code(), ErrorCode::InvalidTurn);

    let out_of_range = submit(&db.conn, table.game_id, alice, TurnAction::Discard { index: 4 })
        .await
        .unwrap_err();
    assert_eq!(out_of_range.code(), ErrorCode::InvalidTurn);

    let stranger = submit(&db.conn, table.game_id, alice, hint_red(9_999))
        .await
        .unwrap_err();
    assert_eq!(stranger.code(), ErrorCode::InvalidTurn);

    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 0);
}

#[tokio::test]
async fn ninth_hint_is_out_of_hints() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let (alice, bob) = (table.player_ids[0], table.player_ids[1]);

    for round in 0..4 {
        submit(&db.conn, table.game_id, alice, hint_red(bob))
            .await
            .unwrap_or_else(|e| panic!("alice hint {round}: {e}"));
        submit(&db.conn, table.game_id, bob, hint_red(alice))
            .await
            .unwrap_or_else(|e| panic!("bob hint {round}: {e}"));
    }

    let err = submit(&db.conn, table.game_id, alice, hint_red(bob))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfHints);
    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 8);

    // A discard earns one back.
    let submitted = submit(&db.conn, table.game_id, alice, TurnAction::Discard { index: 3 })
        .await
        .unwrap();
    assert_eq!(submitted.state.hints_remaining, 1);
}

#[tokio::test]
async fn third_mistake_ends_the_game() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let (alice, bob) = (table.player_ids[0], table.player_ids[1]);

    // RED 2, RED 2, then the freshly drawn RED 4: all unplayable on an empty pile.
    submit(&db.conn, table.game_id, alice, TurnAction::Play { index: 3 })
        .await
        .unwrap();
    submit(&db.conn, table.game_id, bob, TurnAction::Play { index: 0 })
        .await
        .unwrap();
    let last = submit(&db.conn, table.game_id, alice, TurnAction::Play { index: 0 })
        .await
        .unwrap();

    assert_eq!(last.state.mistakes, 3);
    assert!(!last.state.is_game_active);
    assert_eq!(last.state.board.height(Color::Red), 0);

    let err = submit(&db.conn, table.game_id, bob, TurnAction::Play { index: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameOver);
    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 3);
}

#[tokio::test]
async fn hint_records_follow_the_target_hand() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let (alice, bob) = (table.player_ids[0], table.player_ids[1]);

    let submitted = submit(
        &db.conn,
        table.game_id,
        alice,
        TurnAction::Hint {
            target: bob,
            hint: HintType::Number(Number::Three),
        },
    )
    .await
    .unwrap();

    let negated: Vec<bool> = submitted.state.players[1]
        .hints
        .iter()
        .map(|slot| slot[0].negated)
        .collect();
    // Bob holds RED 2, RED 3, RED 3, RED 4.
    assert_eq!(negated, vec![true, false, false, true]);
    assert_eq!(submitted.state.hints_remaining, 7);
}

#[tokio::test]
async fn unknown_submitter_is_player_not_found() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;

    let err = submit(&db.conn, table.game_id, 9_999, TurnAction::Play { index: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
}
