//! Position evaluation (C7): scoring a [`Position`] from the current
//! player's point of view, used by both search engines to rank candidate
//! actions and by minimax to cut off non-terminal leaves.

mod objective_distance;
mod reachable;
mod win;

pub use objective_distance::ObjectiveChessboardDistance;
pub use reachable::ReachableLocationsHeuristic;
pub use win::WinEvaluator;

use std::ops::{Add, Mul, Neg};

use crate::action::Position;

/// The score of a position: a numeric `value` plus whether the position is
/// terminal (the game is decided, so no deeper search can change the outcome).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub terminal: bool,
}

impl Evaluation {
    pub const ZERO: Evaluation = Evaluation { value: 0.0, terminal: false };

    pub fn new(value: f64, terminal: bool) -> Evaluation {
        Evaluation { value, terminal }
    }

    pub fn non_terminal(value: f64) -> Evaluation {
        Evaluation::new(value, false)
    }

    pub fn terminal(value: f64) -> Evaluation {
        Evaluation::new(value, true)
    }
}

impl Neg for Evaluation {
    type Output = Evaluation;
    fn neg(self) -> Evaluation {
        Evaluation::new(-self.value, self.terminal)
    }
}

impl Add for Evaluation {
    type Output = Evaluation;
    fn add(self, rhs: Evaluation) -> Evaluation {
        Evaluation::new(self.value + rhs.value, self.terminal || rhs.terminal)
    }
}

impl Mul<f64> for Evaluation {
    type Output = Evaluation;
    fn mul(self, scalar: f64) -> Evaluation {
        Evaluation::new(self.value * scalar, self.terminal)
    }
}

/// Something that can score a [`Position`] from the perspective of
/// `position.player_location`.
pub trait Evaluator {
    fn evaluate(&self, position: &Position) -> Evaluation;
}

/// A weighted sum of sub-evaluators: `sum(weight_i * evaluator_i.evaluate())`.
/// Terminal if any weighted term is terminal (a win/loss is decisive no
/// matter how the heuristics underneath it are blended).
pub struct MultiEvaluator {
    terms: Vec<(f64, Box<dyn Evaluator + Send + Sync>)>,
}

impl MultiEvaluator {
    pub fn new() -> MultiEvaluator {
        MultiEvaluator { terms: Vec::new() }
    }

    pub fn with_term(mut self, weight: f64, evaluator: impl Evaluator + Send + Sync + 'static) -> MultiEvaluator {
        self.terms.push((weight, Box::new(evaluator)));
        self
    }
}

impl Default for MultiEvaluator {
    fn default() -> MultiEvaluator {
        MultiEvaluator::new()
    }
}

impl Evaluator for MultiEvaluator {
    fn evaluate(&self, position: &Position) -> Evaluation {
        self.terms
            .iter()
            .map(|(weight, evaluator)| evaluator.evaluate(position) * *weight)
            .fold(Evaluation::ZERO, Add::add)
    }
}

/// Win/loss only: useful for exhaustive search, which only ever needs to
/// distinguish "reaches the objective" from "does not".
pub fn win() -> MultiEvaluator {
    MultiEvaluator::new().with_term(100.0, WinEvaluator)
}

/// Win/loss plus a tie-breaking preference for positions that keep more of
/// the board reachable (mirrors the reference evaluator mix used by the
/// minimax engine).
pub fn win_and_reachable() -> MultiEvaluator {
    MultiEvaluator::new().with_term(100.0, WinEvaluator).with_term(1.0, ReachableLocationsHeuristic)
}

/// Win/loss plus a tie-breaking preference for positions closer to the
/// objective by Chebyshev distance.
pub fn win_and_objective_distance() -> MultiEvaluator {
    MultiEvaluator::new().with_term(100.0, WinEvaluator).with_term(1.0, ObjectiveChessboardDistance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_negation_flips_value_keeps_terminal() {
        let eval = Evaluation::terminal(5.0);
        assert_eq!(-eval, Evaluation::terminal(-5.0));
    }

    #[test]
    fn evaluation_add_is_terminal_if_either_side_is() {
        let sum = Evaluation::non_terminal(1.0) + Evaluation::terminal(2.0);
        assert_eq!(sum, Evaluation::terminal(3.0));
    }

    #[test]
    fn multi_evaluator_with_no_terms_is_zero() {
        use crate::graph::MazeGraph;
        let graph = MazeGraph::new(3);
        let position = Position { graph: &graph, player_location: crate::location::Location::new(0, 0), opponent_location: crate::location::NONE, objective_id: 0 };
        assert_eq!(MultiEvaluator::new().evaluate(&position), Evaluation::ZERO);
    }
}
