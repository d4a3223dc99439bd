//! Domain-level error type used across the reconstructor, services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What kind of text failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseKind {
    /// `"<COLOR> <NUMBER>"` card token
    Card,
    /// Hint vocabulary token (`RED`, `3`, `COLOR_RED`, ...)
    HintType,
    /// Oracle decision text (`PLAY 1`, `DISCARD 2`, `HINT <name> <token>`)
    Decision,
    /// Player name in a decision that matches nobody at the table
    PlayerName,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    /// The game exists but has no players
    Players,
    Player,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// A turn was submitted by someone other than the active player
    NotActivePlayer,
    /// A turn was submitted after the mistake threshold was reached
    GameOver,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed card, hint or decision text
    Parse(ParseKind, String),
    /// Turn with the wrong action cardinality, or referencing an unknown player,
    /// a self-targeted hint or a card slot that does not exist
    InvalidTurn(String),
    /// Missing game or empty player set
    NotFound(NotFoundKind, String),
    /// Hint requested with zero hints remaining
    OutOfHints,
    /// A draw was attempted past the end of the initial deck
    DeckExhausted { cursor: usize, deck_len: usize },
    /// Semantic conflict with the current state of the log
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Parse(kind, d) => write!(f, "parse error {kind:?}: {d}"),
            DomainError::InvalidTurn(d) => write!(f, "invalid turn: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::OutOfHints => write!(f, "out of hints"),
            DomainError::DeckExhausted { cursor, deck_len } => {
                write!(f, "deck exhausted: draw index {cursor} of {deck_len}")
            }
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn parse(kind: ParseKind, detail: impl Into<String>) -> Self {
        Self::Parse(kind, detail.into())
    }
    pub fn invalid_turn(detail: impl Into<String>) -> Self {
        Self::InvalidTurn(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
