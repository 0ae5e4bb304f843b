//! Minimax search (C6/C8): the two-player engine. Alternates turns between
//! the player and the opponent (both chasing the same objective tile),
//! scoring positions with negamax and alpha-beta pruning.
//!
//! Unlike the reference implementation this is grounded on, which clones the
//! whole board for every child node, this search mutates the board in place
//! and threads the result back up through an RAII guard
//! ([`guard::AppliedShift`]) that guarantees the shift is undone, even if a
//! branch returns early.

mod guard;
mod status;

pub use status::{get_search_status, SearchStatus};

use std::sync::atomic::{AtomicBool, Ordering};

use guard::AppliedShift;

use crate::action::{allowed_shift_locations, PlayerAction, Position, ShiftAction, SolverInstance};
use crate::eval::{win_and_reachable, Evaluation, Evaluator, MultiEvaluator};
use crate::geometry::translate_by_shift;
use crate::graph::Rotation;
use crate::location::{Location, NONE};
use crate::reachability::reachable_from;

static ABORT: AtomicBool = AtomicBool::new(false);

/// Requests that the in-progress (or next) call to [`iterate_minimax`]
/// return early with its best completed depth's answer.
///
/// Like [`crate::exh::abort_computation`], this is safe only for
/// single-threaded use: the flag is polled between iterative-deepening
/// depths, not from inside the recursive search itself.
pub fn abort_computation() {
    ABORT.store(true, Ordering::Relaxed);
}

/// Upper bound on how many plies [`iterate_minimax`] will deepen to if
/// neither side reaches a terminal position and nobody calls
/// [`abort_computation`]. Chosen well above any depth reachable in a
/// practical time budget at the board sizes this core targets, so it is
/// never the limiting factor in ordinary use; it exists purely to keep the
/// loop total.
const MAX_ITERATIVE_DEEPENING_DEPTH: u32 = 64;

/// The sentinel result returned when no child action ever improves on the
/// search's initial `-infinity` bound, e.g. every registered shift location
/// is forbidden by the no-pushback rule.
fn sentinel_action() -> PlayerAction {
    PlayerAction { shift: ShiftAction { location: Location::new(0, 0), rotation: Rotation::ZERO }, move_location: NONE }
}

/// Tuning knobs for a minimax search, mirroring the teacher's
/// `AgentConfig`: which evaluator to score positions with, and the depth
/// bound for a fixed-depth search.
pub struct SearchConfig {
    pub evaluator: MultiEvaluator,
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig { evaluator: win_and_reachable(), max_depth: 3 }
    }
}

impl SearchConfig {
    /// Runs [`find_best_action`] with this config's evaluator and depth.
    pub fn find_best_action(&self, instance: &mut SolverInstance) -> MinimaxResult {
        find_best_action(instance, &self.evaluator, self.max_depth)
    }

    /// Runs [`iterate_minimax`] with this config's evaluator.
    pub fn iterate_minimax(&self, instance: &mut SolverInstance) -> PlayerAction {
        iterate_minimax(instance, &self.evaluator)
    }
}

/// The outcome of a single fixed-depth (or one rung of an iterative
/// deepening) search: the best action found, its evaluation from the
/// mover's perspective, and the depth it was searched to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimaxResult {
    pub action: PlayerAction,
    pub evaluation: Evaluation,
    pub depth_reached: u32,
}

/// Searches exactly `max_depth` plies deep and returns the best action for
/// `instance.player_location` to take, scored by `evaluator`.
///
/// Returns the sentinel action (see [`sentinel_action`]) with a zero,
/// non-terminal evaluation if there is no legal action at all (every
/// registered shift location is a forbidden pushback).
///
/// `instance` is left exactly as it was found: the board is mutated and
/// restored in place during the search, never left shifted.
pub fn find_best_action(instance: &mut SolverInstance, evaluator: &dyn Evaluator, max_depth: u32) -> MinimaxResult {
    match root_search(
        &mut instance.graph,
        instance.player_location,
        instance.opponent_location,
        instance.objective_id,
        instance.previous_shift,
        max_depth,
        evaluator,
    ) {
        Some((action, evaluation)) => MinimaxResult { action, evaluation, depth_reached: max_depth },
        None => MinimaxResult { action: sentinel_action(), evaluation: Evaluation::ZERO, depth_reached: max_depth },
    }
}

/// Iterative deepening: repeatedly calls [`find_best_action`] at increasing
/// depth, keeping the most recently completed depth's answer, until either
/// a terminal evaluation is found (a forced win/loss no deeper search can
/// change), [`abort_computation`] is called, or
/// [`MAX_ITERATIVE_DEEPENING_DEPTH`] is reached.
///
/// Returns the sentinel action only if depth 1 itself found no legal
/// action.
pub fn iterate_minimax(instance: &mut SolverInstance, evaluator: &dyn Evaluator) -> PlayerAction {
    ABORT.store(false, Ordering::Relaxed);
    let search_id = status::begin_search();

    let mut best = MinimaxResult { action: sentinel_action(), evaluation: Evaluation::ZERO, depth_reached: 0 };

    for depth in 1..=MAX_ITERATIVE_DEEPENING_DEPTH {
        if ABORT.load(Ordering::Relaxed) {
            log::debug!("minimax search {search_id} aborted before depth {depth}");
            break;
        }

        let root = root_search(
            &mut instance.graph,
            instance.player_location,
            instance.opponent_location,
            instance.objective_id,
            instance.previous_shift,
            depth,
            evaluator,
        );

        match root {
            Some((action, evaluation)) => {
                log::debug!("minimax search {search_id} completed depth {depth}: {evaluation:?}");
                let decided = evaluation.terminal;
                best = MinimaxResult { action, evaluation, depth_reached: depth };
                status::update(search_id, SearchStatus { current_depth: depth, is_terminal: decided });
                if decided {
                    break;
                }
            }
            None => {
                log::warn!("minimax search {search_id} found no legal action at depth {depth}");
                break;
            }
        }
    }

    status::end_search(search_id);
    best.action
}

/// One fixed-depth search at the root: like [`negamax`], but also records
/// which action produced the best value.
#[allow(clippy::too_many_arguments)]
fn root_search(
    graph: &mut crate::graph::MazeGraph,
    player_location: Location,
    opponent_location: Location,
    objective_id: u32,
    previous_shift: Location,
    depth: u32,
    evaluator: &dyn Evaluator,
) -> Option<(PlayerAction, Evaluation)> {
    let mut alpha = Evaluation::non_terminal(f64::NEG_INFINITY);
    let beta = Evaluation::non_terminal(f64::INFINITY);
    let mut best: Option<(PlayerAction, Evaluation)> = None;

    visit_children(
        graph,
        player_location,
        opponent_location,
        objective_id,
        previous_shift,
        depth,
        evaluator,
        &mut alpha,
        beta,
        |action, value| {
            let is_better = match best {
                None => true,
                Some((_, best_value)) => value.value > best_value.value,
            };
            if is_better {
                best = Some((action, value));
            }
        },
    );

    best
}

/// Negamax with alpha-beta pruning: the value of the position from the
/// perspective of whoever is about to move (`player_location`).
#[allow(clippy::too_many_arguments)]
fn negamax(
    graph: &mut crate::graph::MazeGraph,
    player_location: Location,
    opponent_location: Location,
    objective_id: u32,
    previous_shift: Location,
    depth: u32,
    mut alpha: Evaluation,
    beta: Evaluation,
    evaluator: &dyn Evaluator,
) -> Evaluation {
    let position = Position { graph, player_location, opponent_location, objective_id };
    let current = evaluator.evaluate(&position);
    if depth == 0 || current.terminal {
        return current;
    }

    let mut any_action = false;
    visit_children(
        graph,
        player_location,
        opponent_location,
        objective_id,
        previous_shift,
        depth,
        evaluator,
        &mut alpha,
        beta,
        |_action, _value| any_action = true,
    );

    if any_action {
        alpha
    } else {
        // No legal action from here (every registered shift is a forbidden
        // pushback): the position can't be improved by searching deeper.
        current
    }
}

/// Enumerates every legal action from the current position (every allowed
/// shift location, every distinct rotation of the leftover tile, every cell
/// reachable after that shift), applies each in place, recurses one ply down
/// through [`negamax`], and reports the action and its value (from the
/// mover's perspective) to `on_child`.
///
/// `alpha` is threaded through and updated in place (fail-soft negamax); the
/// search stops early once `alpha >= beta` (a beta cutoff).
#[allow(clippy::too_many_arguments)]
fn visit_children(
    graph: &mut crate::graph::MazeGraph,
    player_location: Location,
    opponent_location: Location,
    objective_id: u32,
    previous_shift: Location,
    depth: u32,
    evaluator: &dyn Evaluator,
    alpha: &mut Evaluation,
    beta: Evaluation,
    mut on_child: impl FnMut(PlayerAction, Evaluation),
) {
    let candidate_shifts = allowed_shift_locations(graph, previous_shift);
    let symmetry = graph.leftover().rotation_symmetry();
    let extent = graph.extent();

    for shift_location in candidate_shifts {
        for quarter_turns in 0..symmetry {
            let rotation = Rotation::from_quarter_turns(quarter_turns);

            let translated_mover = translate(player_location, shift_location, extent);
            let translated_waiting = translate(opponent_location, shift_location, extent);

            let move_locations = {
                let guard = AppliedShift::apply(graph, shift_location, rotation);
                reachable_from(guard.graph(), translated_mover)
            };

            for move_location in move_locations {
                let mut guard = AppliedShift::apply(graph, shift_location, rotation);

                let action = PlayerAction { shift: ShiftAction { location: shift_location, rotation }, move_location };

                // Negamax alternates perspective every ply: the mover's new
                // location becomes next ply's waiting player, and whoever
                // was waiting (translated by this shift) becomes next
                // ply's mover.
                let value = -negamax(
                    guard.graph_mut(),
                    translated_waiting,
                    move_location,
                    objective_id,
                    shift_location,
                    depth - 1,
                    -beta,
                    -*alpha,
                    evaluator,
                );
                drop(guard);

                on_child(action, value);
                if value.value > alpha.value {
                    *alpha = value;
                }
                if alpha.value >= beta.value {
                    return;
                }
            }
        }
    }
}

fn translate(location: Location, shift_location: Location, extent: isize) -> Location {
    if location.is_none() {
        location
    } else {
        translate_by_shift(location, shift_location, extent)
    }
}
