use super::{Evaluation, Evaluator};
use crate::action::Position;
use crate::location::NONE;

/// -1 (terminal) iff the opponent currently occupies the objective tile,
/// 0 (non-terminal) otherwise.
///
/// This is deliberately asymmetric: negamax calls `evaluate` from the
/// perspective of the side about to move, so `player_location` here is
/// always the "incoming" side that just had a turn pass to it, not the side
/// that just moved. A shift can translate that side onto the objective
/// without it having moved there itself, so standing on the objective as
/// the side *about to move* is never scored as a win — only the opponent
/// (the side that just moved) reaching it is decisive.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinEvaluator;

impl Evaluator for WinEvaluator {
    fn evaluate(&self, position: &Position) -> Evaluation {
        let objective_location = position.graph.location_of(position.objective_id, NONE);
        if !objective_location.is_none() && !position.opponent_location.is_none() && objective_location == position.opponent_location {
            Evaluation::terminal(-1.0)
        } else {
            Evaluation::non_terminal(0.0)
        }
    }
}
