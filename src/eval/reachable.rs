use super::{Evaluation, Evaluator};
use crate::action::Position;
use crate::reachability::reachable_from;

/// `floor(sqrt(|reach(player)|)) − floor(sqrt(|reach(opponent)|))`: a tie
/// breaker that favors keeping more of the board open to the mover than to
/// the opponent. The square root tempers the heuristic's swing against the
/// decisive `WinEvaluator` term once the two reachable sets grow large (the
/// raw cell count would otherwise dominate on big boards).
#[derive(Clone, Copy, Debug, Default)]
pub struct ReachableLocationsHeuristic;

impl Evaluator for ReachableLocationsHeuristic {
    fn evaluate(&self, position: &Position) -> Evaluation {
        let player_reach = reachable_from(position.graph, position.player_location).len();
        let opponent_reach = if position.opponent_location.is_none() {
            0
        } else {
            reachable_from(position.graph, position.opponent_location).len()
        };
        let diameter = |count: usize| (count as f64).sqrt().floor();
        Evaluation::non_terminal(diameter(player_reach) - diameter(opponent_reach))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MazeGraph, EAST, WEST};
    use crate::location::{Location, NONE};

    #[test]
    fn more_open_corridors_score_higher() {
        let isolated = MazeGraph::new(3);
        let isolated_position = Position { graph: &isolated, player_location: Location::new(1, 1), opponent_location: NONE, objective_id: 0 };
        let isolated_score = ReachableLocationsHeuristic.evaluate(&isolated_position).value;

        let mut corridor = isolated.clone();
        corridor.set_out_paths(Location::new(1, 1), EAST);
        corridor.set_out_paths(Location::new(1, 2), WEST);
        let corridor_position = Position { graph: &corridor, player_location: Location::new(1, 1), opponent_location: NONE, objective_id: 0 };
        let corridor_score = ReachableLocationsHeuristic.evaluate(&corridor_position).value;

        assert!(corridor_score > isolated_score);
    }

    #[test]
    fn an_opponent_with_more_reach_scores_lower() {
        // Player has a two-cell reach (1 tile beyond itself); opponent has a
        // four-cell reach, so the opponent's term should pull the score down.
        let mut graph = MazeGraph::new(5);
        graph.set_out_paths(Location::new(0, 0), EAST);
        graph.set_out_paths(Location::new(0, 1), EAST | WEST);
        graph.set_out_paths(Location::new(0, 2), EAST | WEST);
        graph.set_out_paths(Location::new(0, 3), EAST | WEST);
        graph.set_out_paths(Location::new(0, 4), WEST);

        let isolated_opponent = Position { graph: &graph, player_location: Location::new(0, 0), opponent_location: NONE, objective_id: 0 };
        let reaching_opponent = Position { graph: &graph, player_location: Location::new(0, 0), opponent_location: Location::new(0, 4), objective_id: 0 };

        let without_opponent = ReachableLocationsHeuristic.evaluate(&isolated_opponent).value;
        let with_opponent = ReachableLocationsHeuristic.evaluate(&reaching_opponent).value;
        assert!(with_opponent < without_opponent);
    }
}
