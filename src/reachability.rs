//! Reachability search over a [`MazeGraph`] (C3), grounded in breadth-first
//! traversal of the neighbor relation rather than any notion of a shortest
//! path: the maze cares only about *whether* a cell can be reached from a
//! shift, never the distance.

use std::collections::VecDeque;

use crate::graph::MazeGraph;
use crate::location::Location;
use crate::sets::LocationSet;

/// Whether `target` can be reached from `source` by following bidirectional
/// wall openings. A location is always reachable from itself.
pub fn is_reachable(graph: &MazeGraph, source: Location, target: Location) -> bool {
    if source == target {
        return true;
    }
    let mut visited = LocationSet::new(graph.extent());
    let mut queue = VecDeque::new();
    visited.insert(&source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if neighbor == target {
                return true;
            }
            if visited.insert(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// All locations reachable from `source`, including `source` itself.
pub fn reachable_from(graph: &MazeGraph, source: Location) -> Vec<Location> {
    let mut visited = LocationSet::new(graph.extent());
    let mut queue = VecDeque::new();
    let mut result = vec![source];
    visited.insert(&source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if visited.insert(&neighbor) {
                result.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
    result
}

/// One location discovered during [`multi_source_reachable`], along with the
/// index (into the `sources` slice passed in) of whichever source's search
/// frontier reached it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachableNode {
    pub reached_location: Location,
    pub parent_source_index: usize,
}

/// Breadth-first search from several sources at once. Every location is
/// attributed to the first source whose frontier reaches it; a location
/// already reachable from an earlier source in `sources` is not re-attributed
/// to a later one. The returned locations include the sources themselves
/// (each attributed to its own index).
///
/// This is how the exhaustive search distinguishes, in one pass, "reachable
/// after a straight insert" from "reachable after a rotated insert" without
/// running the BFS once per rotation candidate.
pub fn multi_source_reachable(graph: &MazeGraph, sources: &[Location]) -> Vec<ReachableNode> {
    let mut visited = LocationSet::new(graph.extent());
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    for (source_index, &source) in sources.iter().enumerate() {
        if visited.insert(&source) {
            result.push(ReachableNode { reached_location: source, parent_source_index: source_index });
            queue.push_back((source, source_index));
        }
    }

    while let Some((current, source_index)) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if visited.insert(&neighbor) {
                result.push(ReachableNode { reached_location: neighbor, parent_source_index: source_index });
                queue.push_back((neighbor, source_index));
            }
        }
    }

    result
}
