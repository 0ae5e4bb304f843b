//! RAII guard that guarantees a shift applied in place is always undone,
//! even if the caller returns early (a pruned branch, a panic unwinding
//! through the search). This is what lets the minimax search mutate the
//! board directly instead of cloning it at every node, unlike the reference
//! implementation it's grounded on (§9 in-place mutation).

use crate::graph::{MazeGraph, Rotation};
use crate::location::Location;

pub struct AppliedShift<'a> {
    graph: &'a mut MazeGraph,
    border: Location,
    original_leftover_rotation: Rotation,
}

impl<'a> AppliedShift<'a> {
    pub fn apply(graph: &'a mut MazeGraph, border: Location, rotation: Rotation) -> AppliedShift<'a> {
        let original_leftover_rotation = graph.leftover().rotation;
        graph.shift(border, rotation);
        AppliedShift { graph, border, original_leftover_rotation }
    }

    pub fn graph(&self) -> &MazeGraph {
        self.graph
    }

    /// Reborrows the board mutably, for passing one ply further down the
    /// search while this guard keeps the shift alive.
    pub fn graph_mut(&mut self) -> &mut MazeGraph {
        self.graph
    }
}

impl Drop for AppliedShift<'_> {
    fn drop(&mut self) {
        self.graph.unshift(self.border, self.original_leftover_rotation);
    }
}
