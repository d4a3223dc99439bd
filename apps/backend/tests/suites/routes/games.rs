use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::db::TestDb;
use backend_test_support::problem_details::assert_problem_details;
use hanabi::ai::ScriptedOracle;
use hanabi::state::app_state::AppState;
use serde_json::{json, Value};

use crate::support::{alice_and_bob, create_test_app};

#[actix_web::test]
async fn create_game_returns_ids_in_turn_order() {
    let db = TestDb::new().await.unwrap();
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({"player_count": 4, "seed": 99}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<i64> = body["player_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let game_id = body["game_id"].as_i64().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}/state"))
        .to_request();
    let state: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(state["draw_cursor"], 16);
    assert_eq!(state["hints_remaining"], 8);
    assert_eq!(state["active_player_id"].as_i64().unwrap(), ids[0]);
}

#[actix_web::test]
async fn create_game_rejects_bad_player_count() {
    let db = TestDb::new().await.unwrap();
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({"player_count": 6}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "INVALID_PLAYER_COUNT",
        StatusCode::UNPROCESSABLE_ENTITY,
        None,
    )
    .await;
}

#[actix_web::test]
async fn player_view_hides_only_the_viewers_cards() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/games/{}/players/{}/view",
            table.game_id, table.player_ids[0]
        ))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view["viewer_name"], "Alice");
    assert_eq!(view["is_my_turn"], true);
    assert_eq!(view["seats"][0]["kind"], "own");
    assert!(view["seats"][0].get("hand").is_none());
    assert_eq!(view["seats"][0]["hand_size"], 4);
    assert_eq!(view["seats"][1]["kind"], "other");
    assert_eq!(view["seats"][1]["hand"][0], "RED 2");
}

#[actix_web::test]
async fn view_for_a_stranger_is_player_not_found() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/players/9999/view", table.game_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}

#[actix_web::test]
async fn prompt_is_for_the_active_player() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/prompt", table.game_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["player_name"], "Alice");
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("You are playing Hanabi with 1 other players."));
    assert!(prompt.contains("Card 1: \n"));
}

#[actix_web::test]
async fn submitted_turn_text_is_parsed_and_appended() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/turns", table.game_id))
        .set_json(json!({"player_id": table.player_ids[0], "action": "HINT Bob 3"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["turn"]["hint_type"], "NUMBER_THREE");
    assert_eq!(body["state"]["hints_remaining"], 7);
    assert_eq!(
        body["state"]["active_player_id"].as_i64().unwrap(),
        i64::from(table.player_ids[1])
    );
}

#[actix_web::test]
async fn submitted_turn_errors_map_to_stable_codes() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let app = create_test_app(AppState::for_tests(db.conn.clone())).await;
    let uri = format!("/api/games/{}/turns", table.game_id);

    let cases = [
        (table.player_ids[1], "PLAY 1", "NOT_ACTIVE_PLAYER", StatusCode::CONFLICT),
        (table.player_ids[0], "PLAY 5", "INVALID_TURN", StatusCode::UNPROCESSABLE_ENTITY),
        (table.player_ids[0], "HINT Alice RED", "INVALID_TURN", StatusCode::UNPROCESSABLE_ENTITY),
        (table.player_ids[0], "JUMP", "PARSE_DECISION", StatusCode::BAD_REQUEST),
        (table.player_ids[0], "HINT Carol RED", "UNKNOWN_PLAYER_NAME", StatusCode::BAD_REQUEST),
    ];
    for (player_id, action, code, status) in cases {
        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({"player_id": player_id, "action": action}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, code, status, None).await;
    }
}

#[actix_web::test]
async fn advance_takes_one_oracle_turn() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;
    let oracle = Arc::new(ScriptedOracle::new(["DISCARD 4"]));
    let app = create_test_app(AppState::new(db.conn.clone(), oracle.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/advance", table.game_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["response"], "DISCARD 4");
    assert_eq!(body["action"]["kind"], "DISCARD");
    assert_eq!(body["action"]["index"], 3);
    assert_eq!(body["submitted"]["state"]["hints_remaining"], 9);
    assert_eq!(oracle.prompts().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/advance", table.game_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "ORACLE_ERROR", StatusCode::BAD_GATEWAY, None).await;
}
