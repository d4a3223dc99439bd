use backend_test_support::db::TestDb;
use hanabi::ai::ScriptedOracle;
use hanabi::domain::{Color, HintType, TurnAction};
use hanabi::errors::ErrorCode;
use hanabi::repos::turns;
use hanabi::services::game_flow::GameFlowService;

use crate::support::alice_and_bob;

#[tokio::test]
async fn oracle_turn_prompts_the_active_player_and_appends_its_answer() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let oracle = ScriptedOracle::new(["PLAY 1"]);

    let taken = GameFlowService
        .take_oracle_turn(&db.conn, &oracle, table.game_id)
        .await
        .unwrap();

    assert_eq!(taken.player_id, table.player_ids[0]);
    assert_eq!(taken.action, TurnAction::Play { index: 0 });
    assert_eq!(taken.submitted.state.board.height(Color::Red), 1);

    let prompts = oracle.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Your name is Alice."));
    assert!(prompts[0].contains("They are: Bob."));
    assert!(prompts[0].contains("Bob has 4 cards in their hand. These cards are: RED 2, RED 3, RED 3, RED 4"));
}

#[tokio::test]
async fn hint_answer_names_the_target() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let oracle = ScriptedOracle::new(["hint Bob red."]);

    let taken = GameFlowService
        .take_oracle_turn(&db.conn, &oracle, table.game_id)
        .await
        .unwrap();

    assert_eq!(
        taken.action,
        TurnAction::Hint {
            target: table.player_ids[1],
            hint: HintType::Color(Color::Red),
        }
    );
}

#[tokio::test]
async fn unparseable_answer_is_surfaced_and_nothing_is_appended() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;

    for (answer, code) in [
        ("I think I'll wait", ErrorCode::ParseDecision),
        ("HINT Zed RED", ErrorCode::UnknownPlayerName),
        ("HINT Bob PURPLE", ErrorCode::ParseHint),
    ] {
        let oracle = ScriptedOracle::new([answer]);
        let err = GameFlowService
            .take_oracle_turn(&db.conn, &oracle, table.game_id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), code, "answer {answer:?}");
    }
    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 0);
}

#[tokio::test]
async fn silent_oracle_is_an_oracle_error() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;

    let err = GameFlowService
        .take_oracle_turn(&db.conn, &ScriptedOracle::default(), table.game_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OracleError);
    assert_eq!(err.status().as_u16(), 502);
}

#[tokio::test]
async fn play_until_done_stops_when_the_game_ends() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    // Three unplayable cards, then answers that must never be asked for.
    let oracle = ScriptedOracle::new(["PLAY 4", "PLAY 1", "PLAY 1", "DISCARD 1", "DISCARD 1"]);

    let run = GameFlowService
        .play_until_done(&db.conn, &oracle, table.game_id, 10)
        .await
        .unwrap();

    assert_eq!(run.turns_taken, 3);
    assert!(!run.state.is_game_active);
    assert_eq!(run.state.mistakes, 3);
    assert_eq!(oracle.remaining(), 2);
}

#[tokio::test]
async fn play_until_done_respects_the_turn_limit() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let oracle = ScriptedOracle::new(["HINT Bob 3", "HINT Alice 1", "HINT Bob 4"]);

    let run = GameFlowService
        .play_until_done(&db.conn, &oracle, table.game_id, 2)
        .await
        .unwrap();

    assert_eq!(run.turns_taken, 2);
    assert_eq!(run.state.hints_remaining, 6);
    assert_eq!(oracle.remaining(), 1);
}

#[tokio::test]
async fn play_until_done_halts_on_the_first_bad_answer() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let oracle = ScriptedOracle::new(["DISCARD 2", "PASS"]);

    let err = GameFlowService
        .play_until_done(&db.conn, &oracle, table.game_id, 10)
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ParseDecision);
    assert_eq!(turns::count_by_game(&db.conn, table.game_id).await.unwrap(), 1);
}
