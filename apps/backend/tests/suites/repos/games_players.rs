use backend_test_support::db::TestDb;
use hanabi::adapters::games_sea;
use hanabi::domain::{all_cards, shuffled_deck, Card, Color, Number};
use hanabi::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use hanabi::repos::{games, players};
use sea_orm::TransactionTrait;

use crate::support::{alice_and_bob, seed_table};

#[tokio::test]
async fn game_deck_round_trips_in_draw_order() {
    let db = TestDb::new().await.unwrap();
    let deck = shuffled_deck(Some(11));
    let table = seed_table(&db.conn, deck.clone(), &["Jane", "Tom", "Sue"]).await;

    let game = games::find_by_id(&db.conn, table.game_id)
        .await
        .unwrap()
        .expect("game exists");
    assert_eq!(game.initial_deck, deck);
}

#[tokio::test]
async fn missing_game_is_none_or_not_found() {
    let db = TestDb::new().await.unwrap();

    assert!(games::find_by_id(&db.conn, 404).await.unwrap().is_none());
    let err = games::require_game(&db.conn, 404).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}

#[tokio::test]
async fn players_come_back_in_id_order_with_their_hands() {
    let db = TestDb::new().await.unwrap();
    let table = alice_and_bob(&db.conn).await;

    let seats = players::find_all_by_game(&db.conn, table.game_id).await.unwrap();
    assert_eq!(
        seats.iter().map(|p| p.id).collect::<Vec<_>>(),
        table.player_ids
    );
    assert_eq!(seats[0].name, "Alice");
    assert_eq!(
        seats[0].initial_hand,
        vec![
            Card::new(Color::Red, Number::One),
            Card::new(Color::Red, Number::One),
            Card::new(Color::Red, Number::One),
            Card::new(Color::Red, Number::Two),
        ]
    );
    assert_eq!(seats[1].initial_hand, all_cards()[4..8].to_vec());
}

#[tokio::test]
async fn players_of_other_games_are_not_returned() {
    let db = TestDb::new().await.unwrap();
    let first = alice_and_bob(&db.conn).await;
    let second = seed_table(&db.conn, all_cards(), &["Mike", "Jill", "Jack"]).await;

    let seats = players::find_all_by_game(&db.conn, first.game_id).await.unwrap();
    assert_eq!(seats.len(), 2);
    let seats = players::find_all_by_game(&db.conn, second.game_id).await.unwrap();
    assert_eq!(seats.len(), 3);
}

#[tokio::test]
async fn undecodable_deck_is_data_corruption() {
    let db = TestDb::new().await.unwrap();

    let txn = db.conn.begin().await.unwrap();
    let model = games_sea::create_game(
        &txn,
        games_sea::GameCreate::new(vec!["PURPLE 9".to_string()]),
    )
    .await
    .unwrap();
    txn.commit().await.unwrap();

    let err = games::find_by_id(&db.conn, model.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}
