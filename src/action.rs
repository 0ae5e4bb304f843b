//! Actions a player can take, and the instance a search is run against (C4).

use crate::geometry::opposing_shift;
use crate::graph::{MazeGraph, Rotation};
use crate::location::{Location, NONE};

/// Inserting the leftover tile at a border location with a given rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftAction {
    pub location: Location,
    pub rotation: Rotation,
}

/// A full turn: a shift followed by moving to a reachable location (which may
/// be the player's own post-shift location, i.e. "stay put").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerAction {
    pub shift: ShiftAction,
    pub move_location: Location,
}

/// Everything a search needs to find the best action for the player to move:
/// the board, where the two players currently stand, which tile they're
/// trying to reach, and which shift (if any) must not be immediately undone.
#[derive(Clone, Debug)]
pub struct SolverInstance {
    pub graph: MazeGraph,
    pub player_location: Location,
    pub opponent_location: Location,
    pub objective_id: u32,
    pub previous_shift: Location,
}

impl SolverInstance {
    pub fn new(graph: MazeGraph, player_location: Location, objective_id: u32) -> SolverInstance {
        SolverInstance { graph, player_location, opponent_location: NONE, objective_id, previous_shift: NONE }
    }

    /// Whether `shift_location` would exactly undo `self.previous_shift`
    /// (push the same line back the way it came), which is forbidden (§4.4
    /// no-pushback rule). Always false if there was no previous shift.
    pub fn is_pushback(&self, shift_location: Location) -> bool {
        is_pushback(self.previous_shift, shift_location, self.graph.extent())
    }

    /// The border shift locations a player may legally choose from this turn,
    /// i.e. every registered shift location except the one forbidden by the
    /// no-pushback rule.
    pub fn allowed_shift_locations(&self) -> Vec<Location> {
        allowed_shift_locations(&self.graph, self.previous_shift)
    }

    /// A cheap, borrowed view of this instance suitable for passing to an
    /// [`crate::eval::Evaluator`] without cloning the board.
    pub fn as_position(&self) -> Position<'_> {
        Position {
            graph: &self.graph,
            player_location: self.player_location,
            opponent_location: self.opponent_location,
            objective_id: self.objective_id,
        }
    }
}

/// Whether `shift_location` would exactly undo `previous_shift`.
pub fn is_pushback(previous_shift: Location, shift_location: Location, extent: isize) -> bool {
    !previous_shift.is_none() && shift_location == opposing_shift(previous_shift, extent)
}

/// The registered shift locations of `graph` minus whichever one would be a
/// pushback of `previous_shift`.
pub fn allowed_shift_locations(graph: &MazeGraph, previous_shift: Location) -> Vec<Location> {
    graph.shift_locations().iter().copied().filter(|&location| !is_pushback(previous_shift, location, graph.extent())).collect()
}

/// A borrowed snapshot of a position, for scoring by an
/// [`crate::eval::Evaluator`] without requiring ownership of the board —
/// the minimax search mutates its board in place rather than cloning it per
/// node (§9), so its evaluator calls need a view, not an owned instance.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a> {
    pub graph: &'a MazeGraph,
    pub player_location: Location,
    pub opponent_location: Location,
    pub objective_id: u32,
}
