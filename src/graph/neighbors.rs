use super::node::DIRECTIONS;
use super::{node::opposite, MazeGraph};
use crate::location::Location;

/// Lazily yields the in-board cells connected to a location by a bidirectional
/// edge: the source tile has an opening in direction `d`, the target cell is
/// in-board, and the target tile has an opening in the opposite direction.
pub struct Neighbors<'a> {
    graph: &'a MazeGraph,
    location: Location,
    next_direction_index: usize,
}

impl<'a> Neighbors<'a> {
    pub(super) fn new(graph: &'a MazeGraph, location: Location) -> Neighbors<'a> {
        Neighbors { graph, location, next_direction_index: 0 }
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let node = *self.graph.node(self.location);
        while self.next_direction_index < DIRECTIONS.len() {
            let direction = DIRECTIONS[self.next_direction_index];
            self.next_direction_index += 1;

            if !node.has_out_path(direction) {
                continue;
            }
            let offset = super::direction_offset(direction);
            let candidate = self.location + offset;
            if !candidate.in_bounds(self.graph.extent()) {
                continue;
            }
            if self.graph.node(candidate).has_out_path(opposite(direction)) {
                return Some(candidate);
            }
        }
        None
    }
}
