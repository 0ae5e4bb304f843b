use super::{Evaluation, Evaluator};
use crate::action::Position;
use crate::location::{Location, NONE};

/// `dist(opponent, objective) − dist(player, objective)`, Chebyshev
/// (chessboard king-move) distance: positive when the mover is closer to the
/// objective than the opponent is. Zero if either distance is exactly 0 (the
/// win is already decided by `WinEvaluator`, so this term shouldn't also
/// claim credit for it) or if the objective is currently on the leftover
/// tile (not placed on the board, so no Chebyshev distance to it is
/// meaningful).
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectiveChessboardDistance;

impl Evaluator for ObjectiveChessboardDistance {
    fn evaluate(&self, position: &Position) -> Evaluation {
        let objective_location = position.graph.location_of(position.objective_id, NONE);
        if objective_location.is_none() {
            return Evaluation::non_terminal(0.0);
        }

        let player_distance = chebyshev_distance(position.player_location, objective_location);
        if position.opponent_location.is_none() {
            return Evaluation::non_terminal(0.0);
        }
        let opponent_distance = chebyshev_distance(position.opponent_location, objective_location);

        if player_distance == 0 || opponent_distance == 0 {
            Evaluation::non_terminal(0.0)
        } else {
            Evaluation::non_terminal((opponent_distance - player_distance) as f64)
        }
    }
}

fn chebyshev_distance(from: Location, to: Location) -> i64 {
    let d_row = (from.row - to.row).unsigned_abs();
    let d_column = (from.column - to.column).unsigned_abs();
    d_row.max(d_column) as i64
}
