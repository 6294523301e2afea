//! Score and lives bookkeeping
//!
//! Events from one tick are applied together, then the round is checked: a win
//! is checked before a loss, so a tick that does both counts as a win.

use super::collision::GameEvent;
use super::state::{Outcome, Scoreboard};

/// Apply one tick's events to the scoreboard.
///
/// Returns the outcome only on the call that ends the round. After that every
/// call is a no-op until the scoreboard is replaced.
pub fn apply_events(board: &mut Scoreboard, events: &[GameEvent], win_score: u32) -> Option<Outcome> {
    // Nothing happened, so nothing to re-evaluate
    if board.is_over() || events.is_empty() {
        return None;
    }

    for event in events {
        match *event {
            GameEvent::Collected(kind) => {
                board.score = board.score.saturating_add(kind.points());
            }
            GameEvent::Missed(kind) => {
                if kind.costs_life() {
                    board.lives = board.lives.saturating_sub(1);
                }
            }
        }
    }

    let outcome = if board.score >= win_score {
        Some(Outcome::Win)
    } else if board.lives == 0 {
        Some(Outcome::Lose)
    } else {
        None
    };

    if let Some(outcome) = outcome {
        log::info!(
            "Round over: {:?} (score {}, lives {})",
            outcome,
            board.score,
            board.lives
        );
        board.outcome = Some(outcome);
    }
    outcome
}
