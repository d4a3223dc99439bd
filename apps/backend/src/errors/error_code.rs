//! Error codes for the Hanabi backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Malformed card token
    ParseCard,
    /// Malformed hint token
    ParseHint,
    /// Oracle/decision text did not match any command form
    ParseDecision,
    /// Decision names a player who is not at the table
    UnknownPlayerName,
    /// Turn shape or reference is invalid
    InvalidTurn,
    /// Hint requested with none left
    OutOfHints,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Game has no players
    PlayersNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Submitter is not the active player
    NotActivePlayer,
    /// Mistake threshold reached
    GameOver,
    /// Draw attempted past the end of the deck
    DeckExhausted,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Decision oracle failed
    OracleError,
    /// Decision oracle did not answer in time
    OracleTimeout,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::ParseCard => "PARSE_CARD",
            Self::ParseHint => "PARSE_HINT",
            Self::ParseDecision => "PARSE_DECISION",
            Self::UnknownPlayerName => "UNKNOWN_PLAYER_NAME",
            Self::InvalidTurn => "INVALID_TURN",
            Self::OutOfHints => "OUT_OF_HINTS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayersNotFound => "PLAYERS_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::NotActivePlayer => "NOT_ACTIVE_PLAYER",
            Self::GameOver => "GAME_OVER",
            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::OracleError => "ORACLE_ERROR",
            Self::OracleTimeout => "ORACLE_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
