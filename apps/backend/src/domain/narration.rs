//! One-line descriptions of a turn, phrased for whoever reads them.
//!
//! The acting player is never told which card they drew.

use super::cards_types::{Card, Color, Number};
use super::hints::HintType;

/// How the reader relates to the turn being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The reader took the turn.
    Actor,
    /// The reader received the hint.
    Target,
    /// Anyone else.
    Bystander,
}

/// Result of a play as the narration needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Matched,
    /// `needed` is `None` when the colour's pile was already complete.
    Mistake {
        color: Color,
        needed: Option<Number>,
        mistakes: u32,
    },
}

pub fn hint_line(perspective: Perspective, actor: &str, target: &str, hint: HintType) -> String {
    match perspective {
        Perspective::Actor => format!("You hinted {target} the cards which are {hint}."),
        Perspective::Target => format!("{actor} hinted you the cards which are {hint}."),
        Perspective::Bystander => {
            format!("{actor} hinted {target} the cards which are {hint}.")
        }
    }
}

pub fn discard_line(perspective: Perspective, actor: &str, discarded: &Card, drawn: &Card) -> String {
    match perspective {
        Perspective::Actor => format!("You discarded {discarded} and drew a card."),
        Perspective::Target | Perspective::Bystander => {
            format!("{actor} discarded {discarded} and drew {drawn}.")
        }
    }
}

pub fn play_line(
    perspective: Perspective,
    actor: &str,
    played: &Card,
    drawn: &Card,
    outcome: PlayOutcome,
) -> String {
    let (subject, draw) = match perspective {
        Perspective::Actor => ("You".to_string(), "You drew a card.".to_string()),
        Perspective::Target | Perspective::Bystander => {
            (actor.to_string(), format!("They drew {drawn}."))
        }
    };
    match outcome {
        PlayOutcome::Matched => {
            format!("{subject} played {played}, which matched the needed card. {draw}")
        }
        PlayOutcome::Mistake {
            color,
            needed,
            mistakes,
        } => {
            let needed = match needed {
                Some(number) => format!("the needed card {color} {number}"),
                None => format!("any needed card, as the {color} pile is complete"),
            };
            format!(
                "{subject} played {played}, which did not match {needed}. There have now been {mistakes} mistake(s). {draw}"
            )
        }
    }
}
