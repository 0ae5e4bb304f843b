//! Exhaustive search (C5): the single-player engine. Finds the shortest
//! sequence of turns that gets the player onto the objective tile, searching
//! breadth-first so the first solution found is shortest.

mod state;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use state::{GameState, StateKey};

use crate::action::{PlayerAction, ShiftAction, SolverInstance};
use crate::geometry::translate_by_shift;
use crate::graph::Rotation;
use crate::location::NONE;
use crate::reachability::reachable_from;

/// How far the search is willing to look before giving up.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig { max_depth: 8 }
    }
}

static ABORT: AtomicBool = AtomicBool::new(false);

/// Requests that the in-progress (or next) call to [`find_best_actions`]
/// return early with `None`.
///
/// Like the rest of the core, this flag is safe only for single-threaded
/// use: it is meant to be set from a signal handler or a timer callback
/// running on the same thread between polls, not from a concurrently
/// running search thread.
pub fn abort_computation() {
    ABORT.store(true, Ordering::Relaxed);
}

/// Breadth-first search over the tree of reachable positions, returning the
/// shortest sequence of turns (shift + move) that lands the player on the
/// objective tile, or `None` if no such sequence exists within
/// `config.max_depth` turns or the search was aborted.
pub fn find_best_actions(instance: &SolverInstance, config: &SearchConfig) -> Option<Vec<PlayerAction>> {
    ABORT.store(false, Ordering::Relaxed);

    if is_on_objective(instance) {
        return Some(Vec::new());
    }

    let mut arena = vec![GameState { instance: instance.clone(), parent: None, action: None }];
    let mut visited = HashSet::new();
    visited.insert(StateKey::of(&arena[0].instance));

    let mut frontier = vec![0usize];
    let mut depth = 0;

    while !frontier.is_empty() && depth < config.max_depth {
        if ABORT.load(Ordering::Relaxed) {
            log::debug!("exhaustive search aborted at depth {depth}");
            return None;
        }

        let mut next_frontier = Vec::new();

        for state_index in frontier {
            for (action, child_instance) in expand(&arena[state_index].instance) {
                let key = StateKey::of(&child_instance);
                if !visited.insert(key) {
                    continue;
                }

                let terminal = is_on_objective(&child_instance);
                arena.push(GameState { instance: child_instance, parent: Some(state_index), action: Some(action) });
                let child_index = arena.len() - 1;

                if terminal {
                    return Some(reconstruct(&arena, child_index));
                }
                next_frontier.push(child_index);
            }
        }

        depth += 1;
        log::debug!("exhaustive search completed depth {depth} with {} candidate states", next_frontier.len());
        frontier = next_frontier;
    }

    None
}

/// Whether the player already stands on the objective tile. The single-player
/// win check: unlike [`crate::eval::WinEvaluator`] (which only ever credits
/// the *opponent* reaching the objective, for negamax's perspective-swap),
/// exhaustive search has no opponent and a reached objective always means
/// the player itself just moved there.
fn is_on_objective(instance: &SolverInstance) -> bool {
    let objective_location = instance.graph.location_of(instance.objective_id, NONE);
    !objective_location.is_none() && objective_location == instance.player_location
}

/// Every legal `(action, resulting instance)` pair reachable from `instance`
/// in a single turn: one candidate per (allowed shift location, rotation
/// choice, reachable move destination).
fn expand(instance: &SolverInstance) -> Vec<(PlayerAction, SolverInstance)> {
    let mut candidates = Vec::new();

    for shift_location in instance.allowed_shift_locations() {
        let symmetry = instance.graph.leftover().rotation_symmetry();
        for quarter_turns in 0..symmetry {
            let rotation = Rotation::from_quarter_turns(quarter_turns);

            let mut graph = instance.graph.clone();
            graph.shift(shift_location, rotation);
            let player_after_shift = translate_by_shift(instance.player_location, shift_location, graph.extent());

            for move_location in reachable_from(&graph, player_after_shift) {
                let mut child = SolverInstance::new(graph.clone(), move_location, instance.objective_id);
                child.opponent_location = instance.opponent_location;
                child.previous_shift = shift_location;

                let action = PlayerAction { shift: ShiftAction { location: shift_location, rotation }, move_location };
                candidates.push((action, child));
            }
        }
    }

    candidates
}

fn reconstruct(arena: &[GameState], mut index: usize) -> Vec<PlayerAction> {
    let mut actions = Vec::new();
    while let Some(action) = arena[index].action {
        actions.push(action);
        index = arena[index].parent.expect("a state with an action always has a parent");
    }
    actions.reverse();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{standard_shift_locations, MazeGraph, EAST, NORTH, SOUTH, WEST};
    use crate::location::Location;

    fn all_cross_graph(extent: isize) -> MazeGraph {
        let mut graph = MazeGraph::new(extent);
        for row in 0..extent {
            for column in 0..extent {
                graph.set_out_paths(Location::new(row, column), NORTH | EAST | SOUTH | WEST);
            }
        }
        graph.set_leftover_out_paths(NORTH | EAST | SOUTH | WEST);
        for location in standard_shift_locations(extent) {
            graph.add_shift_location(location);
        }
        graph
    }

    #[test]
    fn already_on_objective_needs_no_actions() {
        let graph = all_cross_graph(7);
        let objective_id = graph.node(Location::new(3, 3)).node_id;
        let instance = SolverInstance::new(graph, Location::new(3, 3), objective_id);
        let actions = find_best_actions(&instance, &SearchConfig::default());
        assert_eq!(actions, Some(Vec::new()));
    }

    #[test]
    fn finds_a_direct_path_when_fully_open() {
        let graph = all_cross_graph(7);
        let objective_id = graph.node(Location::new(0, 0)).node_id;
        let instance = SolverInstance::new(graph, Location::new(6, 6), objective_id);
        let actions = find_best_actions(&instance, &SearchConfig::default()).expect("should find a path");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].move_location, Location::new(0, 0));
    }

    #[test]
    fn no_solution_within_depth_returns_none() {
        // Every tile is isolated: no shift can open a path to the objective.
        let mut graph = MazeGraph::new(5);
        graph.add_shift_location(Location::new(0, 1));
        let objective_id = graph.node(Location::new(4, 4)).node_id;
        let instance = SolverInstance::new(graph, Location::new(0, 0), objective_id);
        assert_eq!(find_best_actions(&instance, &SearchConfig { max_depth: 2 }), None);
    }

    #[test]
    fn a_new_search_resets_a_previously_requested_abort() {
        abort_computation();
        assert!(ABORT.load(Ordering::Relaxed));

        let graph = all_cross_graph(7);
        let objective_id = graph.node(Location::new(0, 0)).node_id;
        let instance = SolverInstance::new(graph, Location::new(6, 6), objective_id);
        assert!(find_best_actions(&instance, &SearchConfig::default()).is_some());
    }
}
