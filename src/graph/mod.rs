//! The maze board: tiles laid out on an `extent x extent` grid plus the
//! leftover tile held off-board, and the shift operation that moves them (C2).

mod neighbors;
mod node;

pub use neighbors::Neighbors;
pub use node::{opposite, Node, OutPaths, Rotation, DIRECTIONS, EAST, NORTH, SOUTH, WEST};

use crate::geometry::offset_by_shift_location;
use crate::location::{Location, Offset};

/// The unit step in board coordinates that an opening in `direction` points
/// toward, used by [`Neighbors`] to find the cell across a wall opening.
pub(super) fn direction_offset(direction: OutPaths) -> Offset {
    match direction {
        NORTH => Offset::new(-1, 0),
        SOUTH => Offset::new(1, 0),
        EAST => Offset::new(0, 1),
        WEST => Offset::new(0, -1),
        _ => unreachable!("direction {direction:#06b} is not a single cardinal bit"),
    }
}

/// The border shift locations of a square board of the given extent: every
/// other cell along each edge, skipping the four corners (§4.2/§6).
///
/// This is the conventional layout used by the reference game; a graph is
/// free to register a different set of shift locations via
/// [`MazeGraph::add_shift_location`].
pub fn standard_shift_locations(extent: isize) -> Vec<Location> {
    let mut locations = Vec::new();
    let mut offset = 1;
    while offset < extent - 1 {
        locations.push(Location::new(0, offset));
        locations.push(Location::new(extent - 1, offset));
        locations.push(Location::new(offset, 0));
        locations.push(Location::new(offset, extent - 1));
        offset += 2;
    }
    locations
}

/// The board: an `extent x extent` grid of tiles plus the one tile held in
/// reserve, and the set of border cells a shift may be performed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGraph {
    extent: isize,
    tiles: Vec<Node>,
    leftover: Node,
    shift_locations: Vec<Location>,
}

impl MazeGraph {
    /// A board of the given extent with every tile defaulted (no openings,
    /// node id 0) and no shift locations registered.
    ///
    /// Callers build up a real instance with [`Self::set_out_paths`],
    /// [`Self::set_leftover_out_paths`] and [`Self::add_shift_location`] (or
    /// start from [`standard_shift_locations`]).
    pub fn new(extent: isize) -> MazeGraph {
        assert!(extent > 0 && extent % 2 == 1, "extent must be a positive odd number, got {extent}");
        let num_cells = (extent * extent) as usize;
        let tiles = (0..num_cells).map(|id| Node::new(id as u32, 0, Rotation::ZERO)).collect();
        MazeGraph { extent, tiles, leftover: Node::new(num_cells as u32, 0, Rotation::ZERO), shift_locations: Vec::new() }
    }

    /// Builds a graph directly from a flat, row-major list of `extent*extent`
    /// board tiles plus one trailing leftover tile.
    ///
    /// Panics if the slice length doesn't match or any node id repeats
    /// (§7: malformed instances are a programmer error, not recoverable).
    pub fn from_nodes(extent: isize, nodes: &[Node]) -> MazeGraph {
        assert!(extent > 0 && extent % 2 == 1, "extent must be a positive odd number, got {extent}");
        let num_cells = (extent * extent) as usize;
        assert_eq!(nodes.len(), num_cells + 1, "expected {} nodes ({extent}x{extent} board + leftover), got {}", num_cells + 1, nodes.len());

        let mut seen_ids = std::collections::HashSet::with_capacity(nodes.len());
        for node in nodes {
            assert!(seen_ids.insert(node.node_id), "duplicate node id {}", node.node_id);
        }

        MazeGraph {
            extent,
            tiles: nodes[..num_cells].to_vec(),
            leftover: nodes[num_cells],
            shift_locations: Vec::new(),
        }
    }

    pub fn extent(&self) -> isize {
        self.extent
    }

    pub fn num_nodes(&self) -> usize {
        self.tiles.len() + 1
    }

    pub fn shift_locations(&self) -> &[Location] {
        &self.shift_locations
    }

    pub fn add_shift_location(&mut self, location: Location) {
        self.shift_locations.push(location);
    }

    pub fn node(&self, location: Location) -> &Node {
        &self.tiles[location.index(self.extent)]
    }

    pub fn node_mut(&mut self, location: Location) -> &mut Node {
        &mut self.tiles[location.index(self.extent)]
    }

    pub fn set_out_paths(&mut self, location: Location, out_paths: OutPaths) {
        self.node_mut(location).out_paths = out_paths;
    }

    pub fn leftover(&self) -> &Node {
        &self.leftover
    }

    pub fn leftover_mut(&mut self) -> &mut Node {
        &mut self.leftover
    }

    pub fn set_leftover_out_paths(&mut self, out_paths: OutPaths) {
        self.leftover.out_paths = out_paths;
    }

    /// The in-board cells reachable from `location` by a single bidirectional
    /// wall opening (C2). Lazy: directions are checked on demand.
    pub fn neighbors(&self, location: Location) -> Neighbors<'_> {
        Neighbors::new(self, location)
    }

    /// The location of the tile with the given `node_id`, searched for among
    /// the `extent x extent` board tiles only (the leftover is never "in" the
    /// matrix). Returns `fallback` if no board tile carries that id — callers
    /// use this after a shift to re-locate a player or objective whose tile
    /// may have just been ejected into the leftover slot.
    pub fn location_of(&self, node_id: u32, fallback: Location) -> Location {
        for row in 0..self.extent {
            for column in 0..self.extent {
                let location = Location::new(row, column);
                if self.node(location).node_id == node_id {
                    return location;
                }
            }
        }
        fallback
    }

    /// Slides the row or column through `border` one cell in the direction
    /// the border points into the board, inserting the current leftover tile
    /// at `border` (with its rotation set to `leftover_rotation`) and making
    /// the tile ejected off the far end the new leftover.
    ///
    /// Panics if `border` was never registered via [`Self::add_shift_location`]
    /// (§7: an invalid shift location is a programmer error).
    pub fn shift(&mut self, border: Location, leftover_rotation: Rotation) {
        assert!(self.shift_locations.contains(&border), "{border:?} is not a registered shift location");
        log::trace!("shifting at {border:?} with leftover rotation {leftover_rotation:?}");

        let direction = offset_by_shift_location(border, self.extent);
        let line: Vec<Location> = (0..self.extent).map(|i| border + direction.scale(i)).collect();

        let ejected = *self.node(line[line.len() - 1]);
        for i in (1..line.len()).rev() {
            let previous = *self.node(line[i - 1]);
            *self.node_mut(line[i]) = previous;
        }

        let mut inserted = self.leftover;
        inserted.rotation = leftover_rotation;
        *self.node_mut(line[0]) = inserted;

        self.leftover = ejected;
    }

    /// The exact inverse of a prior [`Self::shift`] call at the same
    /// `border`: restores every tile to the position it held before that
    /// shift, and restores the leftover to `original_leftover_rotation` (the
    /// rotation it carried *before* the shift stamped it with whatever
    /// rotation was requested at insertion time).
    ///
    /// Used by the minimax search to back out of a move without cloning the
    /// whole board (§9 in-place mutation).
    pub fn unshift(&mut self, border: Location, original_leftover_rotation: Rotation) {
        assert!(self.shift_locations.contains(&border), "{border:?} is not a registered shift location");

        let direction = offset_by_shift_location(border, self.extent);
        let line: Vec<Location> = (0..self.extent).map(|i| border + direction.scale(i)).collect();

        let inserted = *self.node(line[0]);
        for i in 0..line.len() - 1 {
            let next = *self.node(line[i + 1]);
            *self.node_mut(line[i]) = next;
        }
        *self.node_mut(line[line.len() - 1]) = self.leftover;

        let mut restored_leftover = inserted;
        restored_leftover.rotation = original_leftover_rotation;
        self.leftover = restored_leftover;
    }
}
