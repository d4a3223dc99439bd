//! Natural-language decision request for the player about to act.

use std::fmt::Write as _;

use super::cards_display::hand_to_string;
use super::cards_types::Color;
use super::hints::describe_history;
use super::player_view::{PlayerView, SeatView};
use super::rules::MAX_MISTAKES;

const RULES: &str = "\
In Hanabi, players are fully aware of all other players' hands, but not their own. You can see the other players' hands below.
When a hint is given to a player, they are told all of the cards in their hand which match the hint. For example, if a player
has a hand of RED 1, YELLOW 3, GREEN 3, RED 2, and they are given a hint of RED, they will be told that the first and last cards
in their hand are RED. If they are given a hint of 3, they will be told that the second and third cards in their hand are 3s.

Absent other evidence, a player should assume that when they receive a hint, that hint indicates to play the leftmost card that
matches the hint. For example, if a player has a hand of RED 1, YELLOW 3, GREEN 3, RED 2, and they are given a hint of 3, they
should assume that they should play the second card in their hand, the YELLOW 3.

For example, to suggest that the next player should play their leftmost 1, you might respond: HINT <NAME> 1
To suggest that a player's last card is a five and should not be discarded, you might respond: HINT <NAME> 5
To suggest that multiple blue cards in a player's hand can be played in order from left to right, you might respond: HINT <NAME> BLUE
";

const CONVENTIONS: &str = "\
If a player plays incorrectly, that triggers a mistake. If three mistakes are made, the game ends.

This game follows these conventions:
- If you believe you can play a card safely, prefer to do so.
- Every hint should cause one or more players to play a card. Always give hints which match at least one card in a player's hand.
- Every hint should provide new information that the players did not know.
- New cards are placed at the left of the hand.
- If you are going to discard a card, discard the rightmost card that has not been clued.
";

const ACTIONS: &str = "\
It is your turn. You may do one of the following actions by answering in the corresponding format as the only response:
PLAY <N>, where N is the index of the card you want to play, counting from 1 on the left.
DISCARD <N>, where N is the index of the card you want to discard, counting from 1 on the left.
HINT <PLAYER> <COLOR>, where PLAYER is the player's name to hint and COLOR is replaced with the color to hint, such as RED or BLUE. When you hint a color, that player learns all cards in their hand which are that color.
HINT <PLAYER> <NUMBER>, where PLAYER is the player's name to hint and NUMBER is replaced with the number to hint, such as 1 or 3. When you hint a number, that player learns all cards in their hand which are that number.
";

/// Render `view` as the prompt sent to the decision oracle.
///
/// The viewer's own cards appear only through their hint histories.
pub fn build_prompt(view: &PlayerView) -> String {
    let mut out = String::new();
    let others: Vec<&str> = view.other_names().collect();

    let _ = writeln!(
        out,
        "You are playing Hanabi with {} other players. They are: {}.",
        others.len(),
        others.join(", ")
    );
    let _ = writeln!(
        out,
        "Your name is {}. There have been {} mistake(s) so far, and you have {} mistakes left.",
        view.viewer_name,
        view.mistakes,
        MAX_MISTAKES.saturating_sub(view.mistakes)
    );
    let _ = writeln!(out, "You have {} hint(s) left to give.", view.hints_remaining);
    out.push('\n');
    out.push_str(RULES);
    out.push('\n');

    out.push_str(
        "The goal is to build each color of card in order, from 1 to 5. The only cards which can be played to the board currently are:\n",
    );
    for color in [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::White,
    ] {
        match view.board.needed(color) {
            Some(number) => {
                let _ = writeln!(out, "{color} {number}");
            }
            None => {
                let _ = writeln!(out, "{color} (pile complete)");
            }
        }
    }
    out.push('\n');
    out.push_str(CONVENTIONS);
    out.push('\n');

    if !view.narration.is_empty() {
        out.push_str("The following turns have been taken:\n");
        for line in &view.narration {
            let _ = writeln!(out, "{line}");
        }
        out.push('\n');
    }

    for seat in &view.seats {
        match seat {
            SeatView::Own {
                hand_size, hints, ..
            } => {
                let _ = writeln!(
                    out,
                    "You have {hand_size} cards in your hand. You know the following information about these cards:"
                );
                for (i, history) in hints.iter().enumerate() {
                    let _ = writeln!(out, "Card {}: {}", i + 1, describe_history(history));
                }
            }
            SeatView::Other {
                name, hand, hints, ..
            } => {
                let _ = writeln!(
                    out,
                    "{name} has {} cards in their hand. These cards are: {}",
                    hand.len(),
                    hand_to_string(hand)
                );
                let _ = writeln!(
                    out,
                    "{name} has received the following hints about cards in their hand:"
                );
                for (card, history) in hand.iter().zip(hints) {
                    let _ = writeln!(out, "{card}: {}", describe_history(history));
                }
            }
        }
        out.push('\n');
    }

    out.push_str(ACTIONS);
    out
}
