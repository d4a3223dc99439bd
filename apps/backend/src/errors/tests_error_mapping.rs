// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::ai::AiError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ParseKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_parse_errors_to_400() {
    let app: AppError = DomainError::parse(ParseKind::Card, "Invalid color PURPLE").into();
    assert_eq!(app.code(), ErrorCode::ParseCard);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError = DomainError::parse(ParseKind::PlayerName, "nobody called Zed").into();
    assert_eq!(app.code(), ErrorCode::UnknownPlayerName);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_turn_rule_violations_to_422() {
    let app: AppError = DomainError::invalid_turn("two actions").into();
    assert_eq!(app.code(), ErrorCode::InvalidTurn);
    assert_eq!(app.status().as_u16(), 422);

    let app: AppError = DomainError::OutOfHints.into();
    assert_eq!(app.code(), ErrorCode::OutOfHints);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts_to_409() {
    let app: AppError = DomainError::conflict(ConflictKind::NotActivePlayer, "not you").into();
    assert_eq!(app.code().as_str(), "NOT_ACTIVE_PLAYER");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::DeckExhausted {
        cursor: 50,
        deck_len: 50,
    }
    .into();
    assert_eq!(app.code(), ErrorCode::DeckExhausted);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict").into();
    assert_eq!(app.code(), ErrorCode::Conflict);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Players, "no players").into();
    assert_eq!(app.code(), ErrorCode::PlayersNotFound);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad json").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_oracle_failures_to_gateway_statuses() {
    let app: AppError = AiError::Timeout.into();
    assert_eq!(app.code(), ErrorCode::OracleTimeout);
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = AiError::EmptyResponse.into();
    assert_eq!(app.code(), ErrorCode::OracleError);
    assert_eq!(app.status().as_u16(), 502);
}

#[test]
fn humanizes_codes_for_titles() {
    assert_eq!(AppError::humanize_code("NOT_ACTIVE_PLAYER"), "Not Active Player");
}
